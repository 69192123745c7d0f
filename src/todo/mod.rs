//! To-do domain models
//!
//! - `task`: the task item and its id generator
//! - `task_store`: the ordered in-memory task collection

mod task;
mod task_store;

pub use task::{DEFAULT_SEED, Task};
pub use task_store::TaskStore;
