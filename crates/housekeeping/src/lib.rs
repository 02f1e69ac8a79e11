//! Housekeeping and maintenance task queue.

pub mod task;

pub use task::{
    HousekeepingTask, Priority, TaskStatus, TaskType, filter_by_priority, filter_by_status,
};
