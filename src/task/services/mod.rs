//! Application services for task lifecycle and position reindexing.

mod lifecycle;
mod reorder;

pub use lifecycle::{
    CreateTaskRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
};
pub use reorder::{MoveTaskRequest, PositionUpdate, ReorderError, ReorderResult, ReorderService};
