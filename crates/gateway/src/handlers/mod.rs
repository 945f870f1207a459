//! HTTP request handlers.

mod health_handler;
mod todo_handler;
mod user_handler;

pub use health_handler::health_routes;
pub use todo_handler::todo_routes;
pub use user_handler::user_routes;
