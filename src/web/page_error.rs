use crate::error::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Wrapper used by page handlers to map failures onto HTTP responses.
pub(crate) struct PageError(anyhow::Error);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let any_err = self.0;
        let status = match any_err.downcast_ref::<Error>() {
            Some(Error::Backend(err)) if err.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            Some(Error::Backend(_)) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!("request failed: {any_err}");
        (status, format!("{any_err}")).into_response()
    }
}

impl<E> From<E> for PageError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
