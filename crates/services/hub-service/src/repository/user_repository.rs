//! User repository: the storage-access capability behind the user directory.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, Set};

use super::entities::user::{ActiveModel, Entity as UserEntity};
use common::AppResult;
use domain::{NewUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Read every user record in the engine's default order
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Insert a user (password already hashed)
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Remove every user record, returning how many were deleted
    async fn delete_all(&self) -> AppResult<u64>;
}

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        // No ORDER BY: callers get whatever order the engine returns
        let models = UserEntity::find().all(self.db.as_ref()).await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            role: Set(user.role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(User::from(model))
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = UserEntity::delete_many().exec(self.db.as_ref()).await?;
        Ok(result.rows_affected)
    }
}
