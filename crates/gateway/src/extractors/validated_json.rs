//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use common::AppError;
use domain::todo::first_message;

/// JSON extractor that automatically validates the payload.
pub struct ValidatedJson<T>(pub T);

/// Why a body was refused.
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    /// Transport-level problem (content type, unreadable body), keeps axum's status.
    Transport(JsonRejection),
    /// Malformed JSON, wrong shape or failed field rules.
    Invalid(AppError),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Transport(rejection) => rejection.into_response(),
            Self::Invalid(err) => err.into_response(),
        }
    }
}

impl From<JsonRejection> for ValidatedJsonRejection {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
                Self::Invalid(AppError::validation(rejection.body_text()))
            }
            other => Self::Transport(other),
        }
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        value
            .validate()
            .map_err(|e| ValidatedJsonRejection::Invalid(AppError::validation(first_message(&e))))?;

        Ok(ValidatedJson(value))
    }
}
