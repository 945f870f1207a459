//! Hub Service Library
//!
//! Data-access layer for the Terminal Hub dashboard: user listing with
//! credential-free projections, todos, migrations and seed data.
//! The HTTP gateway embeds it through [`Services`].

pub mod config;
pub mod infra;
pub mod repository;
pub mod seed;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::AppResult;

use crate::config::HubServiceConfig;
use crate::infra::Database;
use crate::repository::{TodoStore, UserStore};
use crate::service::{TodoManager, TodoService, UserDirectory, UserService};

/// Wired services over one database connection.
#[derive(Clone)]
pub struct Services {
    pub users: Arc<dyn UserService>,
    pub todos: Arc<dyn TodoService>,
}

impl Services {
    /// Build the service graph. The connection is injected once here and
    /// shared by every repository.
    pub fn from_database(db: &Database) -> Self {
        let user_repo = Arc::new(UserStore::new(db.get_connection()));
        let todo_repo = Arc::new(TodoStore::new(db.get_connection()));

        Self {
            users: Arc::new(UserDirectory::new(user_repo)),
            todos: Arc::new(TodoManager::new(todo_repo)),
        }
    }
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(config: &HubServiceConfig, action: MigrateAction) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations...");
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Load the seed users (for CLI commands).
pub async fn run_seed(config: &HubServiceConfig) -> AppResult<()> {
    let db = Database::connect(&config.database).await?;
    let repo = UserStore::new(db.get_connection());

    seed::seed_users(&repo).await?;
    Ok(())
}

/// Print every user as `name,email`, one per line.
///
/// Read-only: the schema is left as is, run `migrate up` first.
pub async fn print_users(config: &HubServiceConfig) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config.database).await?;

    for line in user_lines(&db).await? {
        println!("{}", line);
    }

    Ok(())
}

/// Render the user listing as `name,email` lines in store order.
pub async fn user_lines(db: &Database) -> AppResult<Vec<String>> {
    let services = Services::from_database(db);
    let users = services.users.list_users().await?;

    Ok(users
        .into_iter()
        .map(|user| format!("{},{}", user.name, user.email))
        .collect())
}
