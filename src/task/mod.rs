//! Task domain model and in-memory store
//!
//! - `model`: the `Task` record, `Priority`, and creation/update inputs
//! - `store`: the ordered in-memory collection owned by the server

mod model;
mod store;

pub use model::{NewTask, Priority, Task, TaskPatch, local_date_today};
pub use store::{StoreError, TaskStore};
