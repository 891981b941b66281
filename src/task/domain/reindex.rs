//! Position reindexing rules for moves, insertions and removals.
//!
//! Every rule operates on the tasks of one `(owner, board)` pair and keeps
//! each column's positions unique. With [`PositionPolicy::compact_vacated`]
//! enabled the rules also keep them contiguous from zero.

use super::{ColumnSlot, Position, Task, TaskId};
use crate::board::domain::{BoardId, ColumnId};
use crate::user::domain::UserId;
use std::collections::BTreeSet;

/// Tunable behaviour of the reindexing engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionPolicy {
    /// Close the slot a task leaves behind (on move and on delete) and clamp
    /// the destination rank to the destination column length.
    ///
    /// When `false` the vacated slot stays empty and the requested rank is
    /// used verbatim.
    pub compact_vacated: bool,
    /// Reject moves into columns missing from the board's catalog.
    pub validate_columns: bool,
}

/// The `(owner, board, column)` partition inside which positions are ranked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnPartition {
    /// Owning user.
    pub owner: UserId,
    /// Board holding the column.
    pub board_id: BoardId,
    /// Column identifier.
    pub column_id: ColumnId,
}

impl ColumnPartition {
    /// Creates a partition key.
    #[must_use]
    pub const fn new(owner: UserId, board_id: BoardId, column_id: ColumnId) -> Self {
        Self {
            owner,
            board_id,
            column_id,
        }
    }

    /// Returns the partition `task` currently belongs to.
    #[must_use]
    pub fn of(task: &Task) -> Self {
        Self::new(task.owner().clone(), task.board_id(), task.column_id().clone())
    }

    /// Returns `true` when `task` sits in this partition.
    #[must_use]
    pub fn contains(&self, task: &Task) -> bool {
        task.board_id() == self.board_id
            && task.column_id() == &self.column_id
            && task.is_owned_by(&self.owner)
    }

    /// Shifts every task of the partition at or below `from` one rank down.
    pub fn open_slot<'a>(&self, tasks: impl IntoIterator<Item = &'a mut Task>, from: Position) {
        for task in tasks {
            if self.contains(task) && task.position() >= from {
                task.set_position(task.position().next());
            }
        }
    }

    /// Shifts every task of the partition below `vacated` one rank up.
    pub fn close_slot<'a>(&self, tasks: impl IntoIterator<Item = &'a mut Task>, vacated: Position) {
        for task in tasks {
            if self.contains(task) && task.position() > vacated {
                task.set_position(task.position().previous());
            }
        }
    }

    /// Returns `true` when the partition's positions are exactly `0..n`.
    #[must_use]
    pub fn is_dense<'a>(&self, tasks: impl IntoIterator<Item = &'a Task>) -> bool {
        let mut count: usize = 0;
        let mut seen = BTreeSet::new();
        for task in tasks.into_iter().filter(|task| self.contains(task)) {
            count = count.saturating_add(1);
            if !seen.insert(task.position()) {
                return false;
            }
        }
        seen.iter().copied().eq((0..count).map(Position::after_len))
    }
}

/// A request to place one task at a given slot of its board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskMove {
    task_id: TaskId,
    owner: UserId,
    destination: ColumnSlot,
    compact_vacated: bool,
}

impl TaskMove {
    /// Creates a move of `task_id`, scoped to `owner`, into `destination`.
    #[must_use]
    pub const fn new(
        task_id: TaskId,
        owner: UserId,
        destination: ColumnSlot,
        policy: PositionPolicy,
    ) -> Self {
        Self {
            task_id,
            owner,
            destination,
            compact_vacated: policy.compact_vacated,
        }
    }

    /// Returns the moved task's identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the user the move is scoped to.
    #[must_use]
    pub const fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Returns the requested destination.
    #[must_use]
    pub const fn destination(&self) -> &ColumnSlot {
        &self.destination
    }

    /// Returns `true` when the vacated slot is closed.
    #[must_use]
    pub const fn compacts_vacated(&self) -> bool {
        self.compact_vacated
    }

    /// Returns `true` when `task` already sits at the destination.
    #[must_use]
    pub fn is_noop_for(&self, task: &Task) -> bool {
        task.column_id() == &self.destination.column_id
            && task.position() == self.destination.position
    }

    /// Returns the rank the task actually lands on, given how many other
    /// tasks remain in the destination column once the task has left it.
    #[must_use]
    pub fn landing_position(&self, remaining_in_destination: usize) -> Position {
        if self.compact_vacated {
            self.destination
                .position
                .min(Position::after_len(remaining_in_destination))
        } else {
            self.destination.position
        }
    }

    /// Applies the move to `moved` and the other tasks of its board.
    ///
    /// `others` may contain unrelated tasks; only those sharing the moved
    /// task's owner and board are touched. Returns `false` without changing
    /// anything when the move is a no-op.
    pub fn apply<'a>(
        &self,
        moved: &mut Task,
        others: impl IntoIterator<Item = &'a mut Task>,
    ) -> bool {
        if self.is_noop_for(moved) {
            return false;
        }

        let source = ColumnPartition::of(moved);
        let destination = ColumnPartition::new(
            moved.owner().clone(),
            moved.board_id(),
            self.destination.column_id.clone(),
        );
        let mut board_tasks: Vec<&mut Task> = others
            .into_iter()
            .filter(|task| task.id() != moved.id())
            .filter(|task| task.board_id() == moved.board_id() && task.is_owned_by(moved.owner()))
            .collect();

        if self.compact_vacated {
            source.close_slot(board_tasks.iter_mut().map(|task| &mut **task), moved.position());
        }
        let remaining = board_tasks
            .iter()
            .filter(|task| destination.contains(task))
            .count();
        let landing = self.landing_position(remaining);
        destination.open_slot(board_tasks.iter_mut().map(|task| &mut **task), landing);
        moved.place(ColumnSlot::new(self.destination.column_id.clone(), landing));
        true
    }
}
