use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Duplicate column ID: {0}")]
    DuplicateColumn(String),

    #[error("Task {task} appears in more than one column")]
    DuplicateTask { task: String },

    #[error("Invalid priority '{0}'. Valid priorities: low, medium, high")]
    InvalidPriority(String),

    #[error(
        "Invalid sort field '{0}'. Valid fields: name, email, role, status, last-login"
    )]
    InvalidSortField(String),

    #[error("Invalid sort direction '{0}'. Valid directions: asc, desc")]
    InvalidSortDirection(String),

    #[error("Invalid month {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
