//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The user record, its public projection and the todo entity live here so
//! both the data-access service and the HTTP gateway share one definition.

pub mod constants;
pub mod error;
pub mod password;
pub mod todo;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use todo::{CreateTodo, Todo};
pub use user::{NewUser, User, UserDto, UserRole};
