//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every failure becomes an `invalid_request` domain error whose details name
//! the offending field and a machine-readable code.

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidTimestamp,
    InvalidFlag,
    InvalidQuery,
    InvalidBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidTimestamp => "invalid_timestamp",
            ErrorCode::InvalidFlag => "invalid_flag",
            ErrorCode::InvalidQuery => "invalid_query",
            ErrorCode::InvalidBody => "invalid_body",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

/// Unwrap a required query parameter.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

fn invalid_value_error(field: FieldName, value: &str, code: ErrorCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

/// Parse an RFC 3339 timestamp, or a naive ISO 8601 one interpreted as UTC.
///
/// # Examples
/// ```ignore
/// let at = parse_timestamp("2024-06-01T12:00:00", FieldName::new("datetime"))?;
/// assert_eq!(at.to_rfc3339(), "2024-06-01T12:00:00+00:00");
/// ```
pub(crate) fn parse_timestamp(value: &str, field: FieldName) -> Result<DateTime<Utc>, Error> {
    let trimmed = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            invalid_value_error(
                field,
                value,
                ErrorCode::InvalidTimestamp,
                format!("{} must be an ISO 8601 timestamp", field.as_str()),
            )
        })
}

pub(crate) fn parse_optional_timestamp(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<DateTime<Utc>>, Error> {
    value.map(|raw| parse_timestamp(raw, field)).transpose()
}

/// Parse a boolean query flag, accepting the usual spellings.
pub(crate) fn parse_flag(value: &str, field: FieldName) -> Result<bool, Error> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(invalid_value_error(
            field,
            value,
            ErrorCode::InvalidFlag,
            format!("{} must be a boolean", field.as_str()),
        )),
    }
}

/// Error handler for `web::Query` extraction failures.
pub(crate) fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid query string: {err}"))
        .with_details(json!({ "code": ErrorCode::InvalidQuery.as_str() }))
        .into()
}

/// Error handler for `web::Json` extraction failures.
pub(crate) fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid JSON body: {err}"))
        .with_details(json!({ "code": ErrorCode::InvalidBody.as_str() }))
        .into()
}
