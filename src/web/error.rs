//! HTTP mapping for item service failures.
//!
//! Handlers return [`WebResult`]; the [`ResponseError`] implementation picks
//! the status and keeps internal details out of the response body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::item::{domain::ItemId, ports::ItemRepositoryError, services::ItemServiceError};

/// Convenient result alias for HTTP handlers.
pub type WebResult<T> = Result<T, WebError>;

/// Failures surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum WebError {
    /// The addressed item does not exist.
    #[error("item {0} not found")]
    NotFound(ItemId),

    /// The request body could not be read into the expected shape.
    #[error("invalid request body: {0}")]
    BadRequest(String),

    /// The item service failed.
    #[error("item service failure: {0}")]
    Service(#[source] ItemServiceError),

    /// A page template failed to render.
    #[error("template rendering failed: {0}")]
    Render(#[from] minijinja::Error),
}

impl From<ItemServiceError> for WebError {
    fn from(err: ItemServiceError) -> Self {
        match err {
            ItemServiceError::Repository(ItemRepositoryError::NotFound(id)) => Self::NotFound(id),
            other => Self::Service(other),
        }
    }
}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Service(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::NotFound(id) => HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(format!(
                    "<!DOCTYPE html><html><body><h2>Item {id} not found</h2></body></html>"
                )),
            Self::BadRequest(reason) => HttpResponse::BadRequest().json(json!({
                "code": "invalidRequest",
                "message": reason,
            })),
            Self::Service(_) | Self::Render(_) => {
                error!(error = %self, "request failed");
                HttpResponse::InternalServerError().json(json!({
                    "code": "internalError",
                    "message": "Internal server error",
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn missing_item_maps_to_not_found() {
        let err = WebError::from(ItemServiceError::Repository(ItemRepositoryError::NotFound(
            ItemId::new(5),
        )));

        assert!(matches!(err, WebError::NotFound(id) if id == ItemId::new(5)));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    fn persistence_failure_is_internal() {
        let err = WebError::from(ItemServiceError::Repository(
            ItemRepositoryError::persistence(std::io::Error::other("disk gone")),
        ));

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[rstest]
    fn bad_request_keeps_its_status() {
        let err = WebError::BadRequest("expected value at line 1".to_owned());

        assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
    }
}
