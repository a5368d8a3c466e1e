// responses/json.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use serde::Serialize;

/// Serialize `value` as the JSON response body.
pub fn json_response<T: Serialize>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|e| {
        tracing::error!(error = %e, "failed to serialize JSON response");
        ServerError::InternalError
    })?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Render a ServerError as `{"error": "..."}` with its status.
pub fn json_error_response(err: &ServerError) -> ResultResp {
    json_response(
        err.status(),
        &ErrorBody {
            error: err.to_string(),
        },
    )
}
