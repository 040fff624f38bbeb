pub mod board;
pub mod calendar;
pub mod drag;
pub mod sorting;
pub mod stats;
pub mod task;
pub mod user;

pub use board::{Board, BoardConfig, Column, ColumnConfig, ColumnId, TransferOutcome};
pub use calendar::{events_on, CalendarMonth, CalendarState, Event, EventKind};
pub use drag::DragSession;
pub use sorting::{
    filter_and_sort_users, filter_users, sort_users, SortDirection, SortState, UserSortField,
};
pub use stats::BoardStats;
pub use task::{Priority, Task, TaskId};
pub use user::User;
