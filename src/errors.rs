use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use blog_lib::store::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogWebErrorId {
    ValidationFailed,
    NotFound,
    StorageUnavailable,
    StorageWriteFailed,
}

impl BlogWebErrorId {
    fn status_code(self) -> StatusCode {
        match self {
            BlogWebErrorId::ValidationFailed => StatusCode::BAD_REQUEST,
            BlogWebErrorId::NotFound => StatusCode::NOT_FOUND,
            BlogWebErrorId::StorageUnavailable | BlogWebErrorId::StorageWriteFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Every user-visible failure is a `{ "error": "<message>" }` body; the id
/// only selects the status code and never reaches the caller.
#[derive(Debug)]
pub struct BlogWebError {
    pub id: BlogWebErrorId,
    pub message: String,
}

impl BlogWebError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            id: BlogWebErrorId::ValidationFailed,
            message: message.into(),
        }
    }

    pub fn post_not_found() -> Self {
        Self {
            id: BlogWebErrorId::NotFound,
            message: "Post not found".into(),
        }
    }
}

impl From<StoreError> for BlogWebError {
    fn from(err: StoreError) -> Self {
        // The cause chain stays server-side; callers get the fixed message.
        error!("storage failure: {}", err);

        match err {
            StoreError::Unavailable(_) => Self {
                id: BlogWebErrorId::StorageUnavailable,
                message: "Data store unavailable".into(),
            },
            StoreError::WriteFailed(_) => Self {
                id: BlogWebErrorId::StorageWriteFailed,
                message: "Error writing to data store".into(),
            },
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for BlogWebError {
    fn into_response(self) -> Response {
        let status = self.id.status_code();
        (status, Json(ErrorBody { error: self.message })).into_response()
    }
}
