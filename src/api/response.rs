use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use crate::error::ChoiceError;

/// `{"detail": "..."}` 形式のエラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn no_choices() -> Self {
        Self::new(StatusCode::NOT_FOUND, "No choices available!")
    }
}

#[must_use]
pub(crate) fn choice_error_status(err: &ChoiceError) -> StatusCode {
    match err {
        ChoiceError::EmptyChoice | ChoiceError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
        ChoiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ChoiceError::Storage(_) | ChoiceError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<ChoiceError> for ApiError {
    fn from(err: ChoiceError) -> Self {
        let status = choice_error_status(&err);
        let detail = match &err {
            ChoiceError::EmptyChoice => "Choice cannot be empty!".to_string(),
            ChoiceError::AlreadyExists(_) => "Choice already exists!".to_string(),
            ChoiceError::NotFound(_) => "Choice not found!".to_string(),
            other => {
                error!(error = %other, "unexpected store error");
                "Internal storage error".to_string()
            }
        };
        Self { status, detail }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}
