//! User service - the read path that turns stored users into public DTOs.
//!
//! Stateless: every call issues one read-all query through the injected
//! repository and builds fresh [`UserDto`]s. Nothing is cached, retried or
//! written, and storage errors are returned to the caller as-is.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::UserDto;

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every user as `{id, name, email}`.
    ///
    /// Returns an empty vector when there are no users. Fails with
    /// `PersistenceUnavailable` or `Query` without any partial result.
    async fn list_users(&self) -> AppResult<Vec<UserDto>>;
}

/// Concrete implementation of UserService using repository.
pub struct UserDirectory {
    repo: Arc<dyn UserRepository>,
}

impl UserDirectory {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserDirectory {
    async fn list_users(&self) -> AppResult<Vec<UserDto>> {
        let users = self.repo.find_all().await?;
        tracing::debug!(count = users.len(), "Listed users");

        // No access-control filtering yet; a policy would narrow `users` here.
        Ok(users.into_iter().map(UserDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::AppError;
    use domain::{User, UserRole};

    use crate::repository::MockUserRepository;

    fn create_test_user(id: i32, name: &str, email: &str, password_hash: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            role: UserRole::Guest,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn directory(repo: MockUserRepository) -> UserDirectory {
        UserDirectory::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_list_users_single_admin() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all().times(1).returning(|| {
            let mut alice = create_test_user(1, "Alice", "alice@example.com", "hash1");
            alice.role = UserRole::Admin;
            Ok(vec![alice])
        });

        let users = directory(repo).list_users().await.unwrap();

        assert_eq!(
            users,
            vec![UserDto {
                id: 1,
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_list_users_empty_is_not_an_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all().returning(|| Ok(vec![]));

        let users = directory(repo).list_users().await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_list_users_returns_one_dto_per_record() {
        for n in 0..5 {
            let mut repo = MockUserRepository::new();
            repo.expect_find_all().returning(move || {
                Ok((1..=n)
                    .map(|i| {
                        create_test_user(i, &format!("User {i}"), &format!("u{i}@example.com"), "h")
                    })
                    .collect())
            });

            let users = directory(repo).list_users().await.unwrap();
            assert_eq!(users.len(), n as usize);
        }
    }

    #[tokio::test]
    async fn test_list_users_preserves_engine_order_and_values() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all().returning(|| {
            Ok(vec![
                create_test_user(3, " Charlie ", "CHARLIE@example.com", "h3"),
                create_test_user(1, "Alice", "alice@example.com", "h1"),
            ])
        });

        let users = directory(repo).list_users().await.unwrap();

        assert_eq!(users[0].id, 3);
        assert_eq!(users[0].name, " Charlie ");
        assert_eq!(users[0].email, "CHARLIE@example.com");
        assert_eq!(users[1].id, 1);
    }

    #[tokio::test]
    async fn test_list_users_is_idempotent() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all().times(2).returning(|| {
            Ok(vec![
                create_test_user(1, "Alice", "alice@example.com", "h1"),
                create_test_user(2, "Bob", "bob@example.com", "h2"),
            ])
        });

        let service = directory(repo);
        let first = service.list_users().await.unwrap();
        let second = service.list_users().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_list_users_propagates_unavailable_without_retry() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all()
            .times(1)
            .returning(|| Err(AppError::PersistenceUnavailable("connection refused".into())));

        let result = directory(repo).list_users().await;

        assert!(matches!(result, Err(AppError::PersistenceUnavailable(_))));
    }

    #[tokio::test]
    async fn test_list_users_propagates_query_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all()
            .returning(|| Err(AppError::Query("relation \"users\" does not exist".into())));

        let result = directory(repo).list_users().await;

        assert!(matches!(result, Err(AppError::Query(_))));
    }
}
