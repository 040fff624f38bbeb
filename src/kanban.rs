//! Drag-and-drop controller for the kanban board.
//!
//! [`KanbanView`] is the single owner of the board and the drag session. The
//! rendering layer forwards its gesture callbacks here and re-renders from
//! [`KanbanView::board_snapshot`].

use crate::domain::{Board, BoardStats, ColumnId, DragSession, TaskId, TransferOutcome};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct KanbanView {
    board: Board,
    drag: DragSession,
}

impl KanbanView {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            drag: DragSession::new(),
        }
    }

    /// A card started being dragged
    pub fn on_drag_start(&mut self, task_id: impl Into<TaskId>) {
        self.drag.begin_drag(task_id.into());
    }

    /// A card was dropped on a column
    ///
    /// Moves the dragged task to the tail of `column_id` and always closes the
    /// drag session. Returns [`TransferOutcome::TaskNotFound`] without touching
    /// the board when no drag is in progress.
    pub fn on_drop(&mut self, column_id: impl Into<ColumnId>) -> TransferOutcome {
        let column_id = column_id.into();

        let outcome = match self.drag.active_task_id() {
            Some(task_id) => {
                let mut next = self.board.clone();
                let outcome = next.apply_transfer(task_id, &column_id);
                self.board = next;
                outcome
            }
            None => {
                debug!(column = %column_id, "drop without an active drag");
                TransferOutcome::TaskNotFound
            }
        };

        self.drag.end_drag();
        outcome
    }

    /// The platform cancelled the drag (e.g. escape pressed)
    pub fn on_drag_end(&mut self) {
        self.drag.end_drag();
    }

    pub fn board_snapshot(&self) -> &Board {
        &self.board
    }

    pub fn dragged_task_id(&self) -> Option<&TaskId> {
        self.drag.active_task_id()
    }

    pub fn is_dragging(&self, task_id: &TaskId) -> bool {
        self.drag.is_dragging(task_id)
    }

    pub fn stats(&self) -> BoardStats {
        self.board.stats()
    }

    pub fn into_board(self) -> Board {
        self.board
    }
}
