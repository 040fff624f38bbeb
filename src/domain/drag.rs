use crate::domain::task::TaskId;
use tracing::debug;

/// Tracks which task, if any, is being dragged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    active: Option<TaskId>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the dragged task, replacing any earlier one
    ///
    /// The id is not checked against the board; drag gestures only start on
    /// rendered cards.
    pub fn begin_drag(&mut self, task_id: TaskId) {
        debug!(task = %task_id, "drag started");
        self.active = Some(task_id);
    }

    pub fn end_drag(&mut self) {
        if let Some(task_id) = self.active.take() {
            debug!(task = %task_id, "drag ended");
        }
    }

    pub fn active_task_id(&self) -> Option<&TaskId> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Whether this card is the one being dragged (rendered dimmed)
    pub fn is_dragging(&self, task_id: &TaskId) -> bool {
        self.active.as_ref() == Some(task_id)
    }
}
