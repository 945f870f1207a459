//! Todo repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set,
};

use super::entities::todo::{self, ActiveModel, Entity as TodoEntity};
use common::AppResult;
use domain::Todo;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Todo repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Insert an incomplete todo with the given title
    async fn create(&self, title: String) -> AppResult<Todo>;

    /// List all todos, oldest first
    async fn find_all(&self) -> AppResult<Vec<Todo>>;
}

/// SeaORM-backed implementation of TodoRepository
pub struct TodoStore {
    db: Arc<DatabaseConnection>,
}

impl TodoStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoRepository for TodoStore {
    async fn create(&self, title: String) -> AppResult<Todo> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            title: Set(title),
            completed: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(Todo::from(model))
    }

    async fn find_all(&self) -> AppResult<Vec<Todo>> {
        let models = TodoEntity::find()
            .order_by_asc(todo::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Todo::from).collect())
    }
}
