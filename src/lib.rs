//! # Dashboard Core
//!
//! State and domain models behind the admin dashboard's kanban board, user
//! directory and calendar.
//!
//! The board is an ordered set of columns holding ordered tasks. Cards move
//! between columns through [`Board::transfer`], driven by drag gestures that
//! [`KanbanView`] forwards. Nothing here renders or persists; the host owns
//! the view layer and replaces its snapshot after each drop.

pub mod domain;
pub mod error;
pub mod fixtures;
pub mod kanban;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardConfig, Column, ColumnConfig, ColumnId, TransferOutcome},
    calendar::{CalendarMonth, CalendarState, Event, EventKind},
    drag::DragSession,
    stats::BoardStats,
    task::{Priority, Task, TaskId},
    user::User,
};
pub use error::{DashboardError, Result};
pub use kanban::KanbanView;
