//! Todo entity and its creation input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::constants::MAX_TODO_TITLE_LENGTH;
use crate::error::{DomainError, DomainResult};

/// Todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Todo creation input. New todos always start incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateTodo {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
}

impl CreateTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Run field validation, reporting the first failure as a domain error.
    pub fn check(&self) -> DomainResult<()> {
        self.validate()
            .map_err(|e| DomainError::validation(first_message(&e)))
    }
}

/// Title must contain something other than whitespace and fit the column.
fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("Title is required".into());
        return Err(err);
    }

    if title.chars().count() > MAX_TODO_TITLE_LENGTH {
        let mut err = ValidationError::new("length");
        err.message = Some(
            format!("Title must be at most {} characters", MAX_TODO_TITLE_LENGTH).into(),
        );
        return Err(err);
    }

    Ok(())
}

/// Pick the first human-readable message out of a validation report.
pub fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .next()
        .and_then(|errors| errors.first())
        .and_then(|error| error.message.as_ref())
        .map(|msg| msg.to_string())
        .unwrap_or_else(|| "Validation failed".to_string())
}
