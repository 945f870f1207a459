//! Todo service - add and list todos.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{CreateTodo, Todo};

use crate::repository::TodoRepository;

/// Todo service trait for dependency injection.
#[async_trait]
pub trait TodoService: Send + Sync {
    /// Validate and store a new, incomplete todo
    async fn add_todo(&self, input: CreateTodo) -> AppResult<Todo>;

    /// List all todos, oldest first
    async fn list_todos(&self) -> AppResult<Vec<Todo>>;
}

/// Concrete implementation of TodoService using repository.
pub struct TodoManager {
    repo: Arc<dyn TodoRepository>,
}

impl TodoManager {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl TodoService for TodoManager {
    async fn add_todo(&self, input: CreateTodo) -> AppResult<Todo> {
        input.check()?;

        let todo = self.repo.create(input.title).await?;
        tracing::info!(todo_id = todo.id, "Todo created");
        Ok(todo)
    }

    async fn list_todos(&self) -> AppResult<Vec<Todo>> {
        self.repo.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::AppError;
    use mockall::predicate::eq;

    use crate::repository::MockTodoRepository;

    fn create_test_todo(id: i32, title: &str) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            completed: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_add_todo_success() {
        let mut repo = MockTodoRepository::new();
        repo.expect_create()
            .with(eq("Write report".to_string()))
            .times(1)
            .returning(|title| Ok(create_test_todo(7, &title)));

        let service = TodoManager::new(Arc::new(repo));
        let todo = service.add_todo(CreateTodo::new("Write report")).await.unwrap();

        assert_eq!(todo.id, 7);
        assert_eq!(todo.title, "Write report");
        assert!(!todo.completed);
    }

    #[tokio::test]
    async fn test_add_todo_blank_title_never_reaches_storage() {
        let mut repo = MockTodoRepository::new();
        repo.expect_create().never();

        let service = TodoManager::new(Arc::new(repo));
        let result = service.add_todo(CreateTodo::new("   ")).await;

        assert!(matches!(result, Err(AppError::Validation(ref m)) if m == "Title is required"));
    }

    #[tokio::test]
    async fn test_list_todos_passes_through() {
        let mut repo = MockTodoRepository::new();
        repo.expect_find_all().returning(|| {
            Ok(vec![create_test_todo(1, "First"), create_test_todo(2, "Second")])
        });

        let service = TodoManager::new(Arc::new(repo));
        let todos = service.list_todos().await.unwrap();

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].title, "First");
    }
}
