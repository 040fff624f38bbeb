//! Seed data the dashboard starts from.

use crate::{
    domain::{Board, Event, User},
    error::Result,
};

const BOARD_JSON: &str = include_str!("../fixtures/board.json");
const USERS_JSON: &str = include_str!("../fixtures/users.json");
const EVENTS_JSON: &str = include_str!("../fixtures/events.json");

/// The kanban board shown on first load
pub fn initial_board() -> Result<Board> {
    Ok(serde_json::from_str(BOARD_JSON)?)
}

/// Rows of the user directory table
pub fn users() -> Result<Vec<User>> {
    Ok(serde_json::from_str(USERS_JSON)?)
}

/// Calendar entries for June 2024
pub fn events() -> Result<Vec<Event>> {
    Ok(serde_json::from_str(EVENTS_JSON)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{events_on, BoardConfig, ColumnId, EventKind, Priority, TaskId};
    use chrono::NaiveDate;

    #[test]
    fn test_initial_board_matches_default_layout() {
        let board = initial_board().unwrap();
        let config = BoardConfig::default();

        let ids: Vec<&ColumnId> = board.columns().iter().map(|c| &c.id).collect();
        let expected: Vec<&ColumnId> = config.columns.iter().map(|c| &c.id).collect();
        assert_eq!(ids, expected);
        assert_eq!(board.task_count(), 5);
    }

    #[test]
    fn test_initial_board_task_details() {
        let board = initial_board().unwrap();
        let task = board.task(&TaskId::from("3")).unwrap();

        assert_eq!(task.title, "Implement user authentication");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.assignee, "Mike Johnson");
        assert_eq!(task.comment_count, 5);
        assert_eq!(task.labels, vec!["Backend", "Security"]);
        assert_eq!(board.locate_task(&task.id), Some(&ColumnId::from("progress")));
    }

    #[test]
    fn test_initial_board_stats() {
        let stats = initial_board().unwrap().stats();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.high_priority, 2);
    }

    #[test]
    fn test_users() {
        let users = users().unwrap();
        assert_eq!(users.len(), 6);
        assert_eq!(users[5].name, "Lisa Davis");
        assert_eq!(users[5].status, "Pending");
    }

    #[test]
    fn test_events() {
        let events = events().unwrap();
        assert_eq!(events.len(), 5);

        let day = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let on_day = events_on(&events, day);
        assert_eq!(on_day.len(), 1);
        assert_eq!(on_day[0].title, "Client Presentation");
        assert_eq!(on_day[0].kind, EventKind::Meeting);
        assert_eq!(on_day[0].participants, vec!["Sarah Wilson", "Mike Johnson"]);
        assert_eq!(on_day[0].location.as_deref(), Some("Zoom Meeting"));
    }
}
