//! Per-board progress statistics.

use super::{Board, ColumnId};
use crate::task::domain::Task;
use serde::Serialize;

/// Task count and contents of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnStats {
    /// Column identifier.
    pub column_id: ColumnId,
    /// Column title.
    pub column_name: String,
    /// Number of tasks in the column.
    pub task_count: usize,
    /// Tasks of the column, ascending by position.
    pub tasks: Vec<Task>,
}

/// Progress summary of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStats {
    /// Number of tasks on the board, including tasks in unknown columns.
    pub total_tasks: usize,
    /// Number of tasks sitting in a completion column.
    pub completed_tasks: usize,
    /// Completed share in whole percent, rounded half up.
    pub completion_rate: usize,
    /// Statistics per catalog column, in display order.
    pub column_stats: Vec<ColumnStats>,
}

impl BoardStats {
    /// Summarises `tasks` against the column catalog of `board`.
    #[must_use]
    pub fn summarise(board: &Board, tasks: &[Task]) -> Self {
        let column_stats = board
            .columns()
            .iter()
            .map(|column| {
                let mut column_tasks: Vec<Task> = tasks
                    .iter()
                    .filter(|task| task.column_id() == &column.id)
                    .cloned()
                    .collect();
                column_tasks.sort_by_key(|task| (task.position(), task.id()));
                ColumnStats {
                    column_id: column.id.clone(),
                    column_name: column.name.clone(),
                    task_count: column_tasks.len(),
                    tasks: column_tasks,
                }
            })
            .collect();

        let total_tasks = tasks.len();
        let completed_tasks = tasks
            .iter()
            .filter(|task| task.column_id().is_completion())
            .count();

        Self {
            total_tasks,
            completed_tasks,
            completion_rate: completion_rate(completed_tasks, total_tasks),
            column_stats,
        }
    }
}

#[expect(
    clippy::integer_division,
    reason = "half-up rounding of a whole-percent ratio is integer arithmetic"
)]
fn completion_rate(completed: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    completed
        .saturating_mul(200)
        .saturating_add(total)
        / total.saturating_mul(2)
}
