//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers turn
//! domain failures into consistent JSON responses and status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Replace server-side failure details with a fixed message.
///
/// Adapter text (pool errors, upstream response bodies) only reaches the log.
fn redact(error: &Error) -> Error {
    let redacted = match error.code() {
        ErrorCode::InternalError => Error::internal("Internal server error"),
        ErrorCode::ServiceUnavailable => {
            Error::service_unavailable("Service temporarily unavailable")
        }
        ErrorCode::InvalidRequest | ErrorCode::NotFound => return error.clone(),
    };
    match error.trace_id() {
        Some(id) => redacted.with_trace_id(id.to_owned()),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        match self.code() {
            ErrorCode::InternalError => {
                error!(trace_id = ?self.trace_id(), message = self.message(), "internal error");
            }
            ErrorCode::ServiceUnavailable => {
                warn!(trace_id = ?self.trace_id(), message = self.message(), "dependency unavailable");
            }
            ErrorCode::InvalidRequest | ErrorCode::NotFound => {}
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact(self))
    }
}
