//! Service layer - use cases over the repositories.

mod todo_service;
mod user_service;

pub use todo_service::{TodoManager, TodoService};
pub use user_service::{UserDirectory, UserService};
