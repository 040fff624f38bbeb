use chrono::NaiveDate;
use dashboard_core::{Board, Column, ColumnId, KanbanView, Task, TaskId};
use proptest::prelude::*;
use proptest::test_runner::Config;
use std::collections::HashMap;

const MAX_COLUMNS: usize = 5;
const MAX_TASKS: usize = 12;

fn build_board(placement: &[usize], column_count: usize) -> Board {
    let due = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let mut columns: Vec<Column> = (0..column_count)
        .map(|i| Column::new(format!("c{i}"), format!("Column {i}"), "bg"))
        .collect();
    for (i, &slot) in placement.iter().enumerate() {
        columns[slot % column_count]
            .tasks
            .push(Task::new(format!("t{i}"), format!("Task {i}"), due));
    }
    Board::from_columns(columns).unwrap()
}

fn occurrences(board: &Board) -> HashMap<TaskId, usize> {
    let mut seen = HashMap::new();
    for id in board.task_ids() {
        *seen.entry(id).or_insert(0) += 1;
    }
    seen
}

// Task and column indices run past the real ones so misses are exercised.
fn move_sequences() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..MAX_TASKS + 3, 0..MAX_COLUMNS + 2), 0..40)
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn transfers_conserve_every_task(
        column_count in 1..=MAX_COLUMNS,
        placement in prop::collection::vec(0..MAX_COLUMNS, 0..MAX_TASKS),
        moves in move_sequences(),
    ) {
        let original = build_board(&placement, column_count);
        let expected: Vec<TaskId> = original.task_ids();

        let mut board = original.clone();
        for (task, column) in moves {
            let task_id = TaskId::new(format!("t{task}"));
            board = board.transfer(&task_id, &ColumnId::new(format!("c{column}")));
        }

        let seen = occurrences(&board);
        prop_assert_eq!(seen.len(), expected.len());
        for id in &expected {
            prop_assert_eq!(seen.get(id).copied(), Some(1));
        }
        prop_assert_eq!(board.columns().len(), original.columns().len());
    }

    #[test]
    fn transfer_touches_only_source_and_target(
        column_count in 2..=MAX_COLUMNS,
        placement in prop::collection::vec(0..MAX_COLUMNS, 1..MAX_TASKS),
        task in 0..MAX_TASKS,
        target in 0..MAX_COLUMNS,
    ) {
        let board = build_board(&placement, column_count);
        let task_id = TaskId::new(format!("t{task}"));
        let target_id = ColumnId::new(format!("c{}", target % column_count));
        let source_id = board.locate_task(&task_id).cloned();

        let next = board.transfer(&task_id, &target_id);

        for (before, after) in board.columns().iter().zip(next.columns()) {
            if Some(&before.id) != source_id.as_ref() && before.id != target_id {
                prop_assert_eq!(before, after);
            }
        }
        if source_id.is_some() {
            let tail = next.column(&target_id).and_then(|col| col.tasks.last());
            prop_assert_eq!(tail.map(|t| &t.id), Some(&task_id));
        } else {
            prop_assert_eq!(&next, &board);
        }
    }

    #[test]
    fn drop_always_ends_drag(
        placement in prop::collection::vec(0..MAX_COLUMNS, 0..MAX_TASKS),
        task in 0..MAX_TASKS + 3,
        target in 0..MAX_COLUMNS + 2,
    ) {
        let mut view = KanbanView::new(build_board(&placement, MAX_COLUMNS));

        view.on_drag_start(format!("t{task}"));
        view.on_drop(format!("c{target}"));

        prop_assert!(view.dragged_task_id().is_none());
    }
}
