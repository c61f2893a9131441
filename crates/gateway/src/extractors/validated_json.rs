//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use common::AppError;

/// JSON extractor that rejects malformed or invalid payloads with a 400.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(first_message(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// First validation message, descending into nested structs and lists.
fn first_message(errors: &ValidationErrors) -> String {
    for kind in errors.errors().values() {
        let found = match kind {
            ValidationErrorsKind::Field(list) => list
                .first()
                .and_then(|error| error.message.as_ref())
                .map(|msg| msg.to_string()),
            ValidationErrorsKind::Struct(nested) => Some(first_message(nested)),
            ValidationErrorsKind::List(items) => items.values().next().map(|n| first_message(n)),
        };
        if let Some(message) = found {
            return message;
        }
    }
    "Validation failed".to_string()
}
