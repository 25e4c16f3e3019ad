//! HTTP mapping for core errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use nb_core::Error;

use crate::models::{ApiResult, NewsOutput};

/// Newtype carrying a core error out of a handler.
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::InvalidRequest(_) | Error::Config(_) => StatusCode::BAD_REQUEST,
            Error::Auth(_) => StatusCode::UNAUTHORIZED,
            Error::RateLimit(_) => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        warn!(status = %status, error = %self.0, "Request failed");

        let body: ApiResult<NewsOutput> = ApiResult::fail(self.0.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: Error) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(Error::invalid_request("empty topic")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(Error::config("missing api key")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(Error::auth("bad key")), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(Error::rate_limit("slow down")),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            status_of(Error::network("connection refused")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(Error::api(503, "upstream down")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
