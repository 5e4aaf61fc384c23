//! Typed API errors, serialized as `{ "error": { "code", "message" } }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::search::SearchError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Search query is required!")]
    SearchQueryRequired,
    #[error("Param {0} must be a number and greater than zero.")]
    ParamMustBeNumber(&'static str),
    #[error("Error trying get DuckDuckGo API data.")]
    UpstreamFailed,
    #[allow(dead_code)] // Fallback for handlers that grow non-mapped failures
    #[error("Internal Server Error")]
    Internal,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::SearchQueryRequired | ApiError::ParamMustBeNumber(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::UpstreamFailed => StatusCode::BAD_GATEWAY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::SearchQueryRequired => "SearchQueryRequiredError",
            ApiError::ParamMustBeNumber(_) => "ParamsMustBeNumberError",
            ApiError::UpstreamFailed => "DuckDuckGoGETApiError",
            ApiError::Internal => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<SearchError> for ApiError {
    fn from(error: SearchError) -> Self {
        match error {
            SearchError::QueryRequired => ApiError::SearchQueryRequired,
            SearchError::Upstream(source) => {
                log::error!("Error trying get DuckDuckGo API data: {}", source);
                ApiError::UpstreamFailed
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code(),
                message: self.to_string(),
            },
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::SearchQueryRequired.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::ParamMustBeNumber("page").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::UpstreamFailed.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_param_error_names_the_param() {
        assert_eq!(
            ApiError::ParamMustBeNumber("limit").to_string(),
            "Param limit must be a number and greater than zero."
        );
    }
}
