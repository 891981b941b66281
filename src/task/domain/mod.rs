//! Domain model for tasks and position reindexing.
//!
//! The reindexing rules in this module are pure: adapters hand them the
//! tasks of a partition and persist whatever the rules changed.

mod error;
mod ids;
mod position;
mod reindex;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use position::{ColumnSlot, Position};
pub use reindex::{ColumnPartition, PositionPolicy, TaskMove};
pub use task::{PersistedTaskData, Task, TaskDetails, TaskPatch};
