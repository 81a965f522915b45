use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use crate::{
    error::AppError,
    validation::{self, RequestSchema},
};

/// JSON body checked against its declared field table before use
///
/// Bodies that are not JSON at all are rejected with 400; bodies that parse
/// but break the schema are rejected with per-field messages.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: RequestSchema,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(request, state)
            .await
            .map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;

        validation::validate(body).map(ValidatedJson)
    }
}
