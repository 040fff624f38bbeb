use crate::{
    domain::task::{Task, TaskId},
    error::{DashboardError, Result},
};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::{collections::HashSet, fmt};
use tracing::{debug, warn};

/// Identifier of a board column (e.g., "todo", "done")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ColumnId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Layout of a single column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub id: ColumnId,
    pub title: String,
    pub color: String,
}

impl ColumnConfig {
    pub fn new(
        id: impl Into<ColumnId>,
        title: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub columns: Vec<ColumnConfig>,
}

impl BoardConfig {
    pub const TODO: &'static str = "todo";
    pub const IN_PROGRESS: &'static str = "progress";
    pub const REVIEW: &'static str = "review";
    pub const DONE: &'static str = "done";
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: vec![
                ColumnConfig::new(Self::TODO, "To Do", "bg-dashboard-accent"),
                ColumnConfig::new(
                    Self::IN_PROGRESS,
                    "In Progress",
                    "bg-dashboard-warning",
                ),
                ColumnConfig::new(Self::REVIEW, "In Review", "bg-dashboard-secondary"),
                ColumnConfig::new(Self::DONE, "Done", "bg-dashboard-success"),
            ],
        }
    }
}

/// A workflow stage holding tasks in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(rename = "color")]
    pub color_tag: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(
        id: impl Into<ColumnId>,
        title: impl Into<String>,
        color_tag: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color_tag: color_tag.into(),
            tasks: Vec::new(),
        }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Index of the task within this column, if present
    pub fn position(&self, task_id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| &task.id == task_id)
    }

    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.position(task_id).is_some()
    }
}

impl From<&ColumnConfig> for Column {
    fn from(config: &ColumnConfig) -> Self {
        Self::new(config.id.clone(), config.title.clone(), config.color.clone())
    }
}

/// What a transfer did to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Task left `from` and was appended to `to`
    Moved { from: ColumnId, to: ColumnId },
    /// Task was dropped on its own column and now sits at its tail
    MovedToEnd { column: ColumnId },
    /// No column holds the task; board unchanged
    TaskNotFound,
    /// Target column does not exist; board unchanged
    ColumnNotFound,
}

impl TransferOutcome {
    /// Whether the board changed
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Moved { .. } | Self::MovedToEnd { .. })
    }
}

/// Kanban board state
///
/// Every task id lives in exactly one column. Columns are fixed once the
/// board is built; only [`Board::transfer`] changes task placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    columns: Vec<Column>,
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct BoardRepr {
            columns: Vec<Column>,
        }

        let repr = BoardRepr::deserialize(deserializer)?;
        Board::from_columns(repr.columns).map_err(de::Error::custom)
    }
}

impl Board {
    /// Builds an empty board with the configured column layout
    pub fn new(config: &BoardConfig) -> Result<Self> {
        Self::from_columns(config.columns.iter().map(Column::from).collect())
    }

    /// Builds a board from seeded columns, rejecting duplicate column or task ids
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        Self::check_unique_ids(&columns)?;
        Ok(Self { columns })
    }

    fn check_unique_ids(columns: &[Column]) -> Result<()> {
        let mut column_ids = HashSet::new();
        let mut task_ids = HashSet::new();

        for column in columns {
            if !column_ids.insert(&column.id) {
                return Err(DashboardError::DuplicateColumn(column.id.to_string()));
            }
            for task in &column.tasks {
                if !task_ids.insert(&task.id) {
                    return Err(DashboardError::DuplicateTask {
                        task: task.id.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| &col.id == id)
    }

    /// Column currently holding the task
    pub fn locate_task(&self, task_id: &TaskId) -> Option<&ColumnId> {
        self.find_task(task_id)
            .map(|(column_index, _)| &self.columns[column_index].id)
    }

    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.find_task(task_id)
            .map(|(column_index, position)| &self.columns[column_index].tasks[position])
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns.iter().flat_map(|col| col.tasks.iter())
    }

    /// All task ids in column order, then rank order
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.tasks().map(|task| task.id.clone()).collect()
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Returns a new board with the task moved to the tail of the target column
    ///
    /// Unknown task or column ids leave the returned board identical to `self`.
    /// Dropping a task on its own column sends it to the bottom of that column.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use dashboard_core::{Board, Column, ColumnId, Task, TaskId};
    ///
    /// let due = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    /// let board = Board::from_columns(vec![
    ///     Column::new("todo", "To Do", "bg-dashboard-accent")
    ///         .with_task(Task::new("T1", "Design landing page", due))
    ///         .with_task(Task::new("T2", "Update documentation", due)),
    ///     Column::new("done", "Done", "bg-dashboard-success"),
    /// ])
    /// .unwrap();
    ///
    /// let moved = board.transfer(&TaskId::from("T1"), &ColumnId::from("done"));
    /// assert_eq!(moved.locate_task(&TaskId::from("T1")), Some(&ColumnId::from("done")));
    ///
    /// let unchanged = board.transfer(&TaskId::from("T9"), &ColumnId::from("done"));
    /// assert_eq!(unchanged, board);
    /// ```
    pub fn transfer(&self, task_id: &TaskId, target: &ColumnId) -> Board {
        let mut next = self.clone();
        next.apply_transfer(task_id, target);
        next
    }

    /// In-place form of [`Board::transfer`]
    pub fn apply_transfer(&mut self, task_id: &TaskId, target: &ColumnId) -> TransferOutcome {
        let Some((source_index, position)) = self.find_task(task_id) else {
            warn!(task = %task_id, column = %target, "transfer skipped: task not on board");
            return TransferOutcome::TaskNotFound;
        };

        // Resolve the target before removing anything so the task cannot be lost.
        let Some(target_index) = self.columns.iter().position(|col| &col.id == target) else {
            warn!(task = %task_id, column = %target, "transfer skipped: unknown column");
            return TransferOutcome::ColumnNotFound;
        };

        let task = self.columns[source_index].tasks.remove(position);
        self.columns[target_index].tasks.push(task);

        let from = self.columns[source_index].id.clone();
        let outcome = if source_index == target_index {
            TransferOutcome::MovedToEnd { column: from }
        } else {
            TransferOutcome::Moved {
                from,
                to: target.clone(),
            }
        };
        debug!(task = %task_id, ?outcome, "task transferred");
        outcome
    }

    fn find_task(&self, task_id: &TaskId) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(column_index, col)| col.position(task_id).map(|pos| (column_index, pos)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            columns: BoardConfig::default()
                .columns
                .iter()
                .map(Column::from)
                .collect(),
        }
    }
}
