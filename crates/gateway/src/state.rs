//! Application state for dependency injection.

use std::sync::Arc;

use hub_service_lib::infra::Database;
use hub_service_lib::service::{TodoService, UserService};
use hub_service_lib::Services;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub todo_service: Arc<dyn TodoService>,
    pub database: Arc<Database>,
}

impl AppState {
    /// Create new app state with manually injected services.
    pub fn new(
        user_service: Arc<dyn UserService>,
        todo_service: Arc<dyn TodoService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            user_service,
            todo_service,
            database,
        }
    }

    /// Wire the default services over the given database.
    pub fn from_database(database: Database) -> Self {
        let services = Services::from_database(&database);
        Self::new(services.users, services.todos, Arc::new(database))
    }
}
