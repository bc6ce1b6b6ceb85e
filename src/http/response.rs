use serde::Serialize;
use vercel_runtime::{Body, Error, Response, StatusCode};

use crate::error::AppError;

pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(value)?.into())?)
}

pub fn text_response(status: StatusCode, body: impl Into<String>) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .body(Body::Text(body.into()))?)
}

/// Errors go out as plain text: validation and lookup failures keep their own
/// message, everything else collapses to a `Server Error: ` body.
pub fn error_response(err: &AppError) -> Result<Response<Body>, Error> {
    match err {
        AppError::Validation(msg) => text_response(StatusCode::BAD_REQUEST, msg.clone()),
        AppError::NotFound(msg) => text_response(StatusCode::NOT_FOUND, msg.clone()),
        AppError::External(_) | AppError::Other(_) => text_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Server Error: {err}"),
        ),
    }
}
