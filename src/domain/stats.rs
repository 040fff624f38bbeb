use crate::domain::board::{Board, BoardConfig, ColumnId};
use serde::Serialize;

/// Summary counts shown under the kanban board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStats {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub high_priority: usize,
}

impl BoardStats {
    /// Counts using the default `progress` and `done` columns
    pub fn compute(board: &Board) -> Self {
        Self::for_columns(
            board,
            &ColumnId::from(BoardConfig::IN_PROGRESS),
            &ColumnId::from(BoardConfig::DONE),
        )
    }

    /// Missing columns count as empty
    pub fn for_columns(board: &Board, in_progress: &ColumnId, done: &ColumnId) -> Self {
        let column_len = |id: &ColumnId| board.column(id).map(|col| col.len()).unwrap_or(0);

        Self {
            total: board.task_count(),
            in_progress: column_len(in_progress),
            completed: column_len(done),
            high_priority: board.tasks().filter(|task| task.is_high_priority()).count(),
        }
    }
}

impl Board {
    pub fn stats(&self) -> BoardStats {
        BoardStats::compute(self)
    }
}
