//! Reqwest-backed city validator using the OpenWeatherMap current-weather API.
//!
//! This adapter owns transport details only: request construction, timeout
//! and HTTP status mapping, and decoding the weather snapshot.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::CurrentWeatherDto;
use crate::domain::CityName;
use crate::domain::ports::{CityLookup, CityValidator, CityValidatorError};

const WEATHER_PATH: &str = "data/2.5/weather";
const DEFAULT_USER_AGENT: &str = "picnic-backend/0.1";

/// Errors raised while constructing the adapter.
#[derive(Debug, thiserror::Error)]
pub enum OpenWeatherMapBuildError {
    #[error("invalid weather API base URL: {message}")]
    BaseUrl { message: String },
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// City validator that asks OpenWeatherMap for the current weather.
///
/// A `200` answer means the city exists; `404` means it does not.
pub struct OpenWeatherMapValidator {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl OpenWeatherMapValidator {
    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when `base_url` is not a valid URL or the reqwest
    /// client cannot be constructed.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use picnic_backend::outbound::weather::OpenWeatherMapValidator;
    ///
    /// let validator = OpenWeatherMapValidator::new(
    ///     "https://api.openweathermap.org",
    ///     "secret",
    ///     Duration::from_secs(5),
    /// );
    /// assert!(validator.is_ok());
    /// ```
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, OpenWeatherMapBuildError> {
        let endpoint = weather_endpoint(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
        })
    }
}

fn weather_endpoint(base_url: &str) -> Result<Url, OpenWeatherMapBuildError> {
    let mut base = Url::parse(base_url).map_err(|err| OpenWeatherMapBuildError::BaseUrl {
        message: err.to_string(),
    })?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(WEATHER_PATH)
        .map_err(|err| OpenWeatherMapBuildError::BaseUrl {
            message: err.to_string(),
        })
}

#[async_trait]
impl CityValidator for OpenWeatherMapValidator {
    async fn lookup(&self, name: &CityName) -> Result<CityLookup, CityValidatorError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("q", name.as_ref()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(%name, status = status.as_u16(), "city lookup answered");

        if status == StatusCode::NOT_FOUND {
            return Ok(CityLookup::Unknown);
        }
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_lookup(body.as_ref())
    }
}

fn parse_lookup(body: &[u8]) -> Result<CityLookup, CityValidatorError> {
    let decoded: CurrentWeatherDto = serde_json::from_slice(body).map_err(|error| {
        CityValidatorError::decode(format!("invalid weather JSON payload: {error}"))
    })?;
    Ok(CityLookup::Known {
        weather: decoded.weather_snapshot(),
    })
}

fn map_transport_error(error: reqwest::Error) -> CityValidatorError {
    // The API key travels in the query string; never echo the URL.
    let error = error.without_url();
    if error.is_timeout() {
        CityValidatorError::timeout(error.to_string())
    } else {
        CityValidatorError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> CityValidatorError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            CityValidatorError::credentials(message)
        }
        StatusCode::TOO_MANY_REQUESTS => CityValidatorError::rate_limited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            CityValidatorError::timeout(message)
        }
        _ if status.is_client_error() => CityValidatorError::rejected(message),
        _ => CityValidatorError::upstream(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the non-network mapping helpers.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://api.openweathermap.org", "https://api.openweathermap.org/data/2.5/weather")]
    #[case("https://api.openweathermap.org/", "https://api.openweathermap.org/data/2.5/weather")]
    #[case("http://127.0.0.1:9000/owm", "http://127.0.0.1:9000/owm/data/2.5/weather")]
    fn endpoint_appends_weather_path(#[case] base: &str, #[case] expected: &str) {
        let endpoint = weather_endpoint(base).expect("valid base URL");
        assert_eq!(endpoint.as_str(), expected);
    }

    #[test]
    fn rejects_relative_base_url() {
        let error = weather_endpoint("not a url").expect_err("relative URL rejected");
        assert!(matches!(error, OpenWeatherMapBuildError::BaseUrl { .. }));
    }

    #[rstest]
    #[case::unauthorised(StatusCode::UNAUTHORIZED, CityValidatorError::credentials(""))]
    #[case::forbidden(StatusCode::FORBIDDEN, CityValidatorError::credentials(""))]
    #[case::rate_limited(StatusCode::TOO_MANY_REQUESTS, CityValidatorError::rate_limited(""))]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT, CityValidatorError::timeout(""))]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, CityValidatorError::timeout(""))]
    #[case::bad_request(StatusCode::BAD_REQUEST, CityValidatorError::rejected(""))]
    #[case::server_error(StatusCode::BAD_GATEWAY, CityValidatorError::upstream(""))]
    fn maps_http_statuses_to_port_errors(
        #[case] status: StatusCode,
        #[case] expected: CityValidatorError,
    ) {
        let error = map_status_error(status, b"{\"cod\":\"x\",\"message\":\"nope\"}");
        assert_eq!(
            std::mem::discriminant(&error),
            std::mem::discriminant(&expected)
        );
        assert!(error.message().contains("nope"));
    }

    #[rstest]
    #[case(r#"{"main":{"temp":18.5},"name":"Paris"}"#, Some("18.5"))]
    #[case(r#"{"main":{"temp":-3.0}}"#, Some("-3"))]
    #[case(r#"{"name":"Paris"}"#, None)]
    fn parses_weather_snapshot(#[case] body: &str, #[case] expected: Option<&str>) {
        let lookup = parse_lookup(body.as_bytes()).expect("JSON decodes");
        assert_eq!(
            lookup,
            CityLookup::Known {
                weather: expected.map(str::to_owned)
            }
        );
    }

    #[test]
    fn malformed_payload_is_decode_error() {
        let error = parse_lookup(b"<html>").expect_err("decode should fail");
        assert!(matches!(error, CityValidatorError::Decode { .. }));
    }

    #[test]
    fn body_preview_compacts_and_truncates() {
        let long = "a ".repeat(200);
        let preview = body_preview(long.as_bytes());
        assert!(preview.ends_with("..."));
        assert_eq!(body_preview(b"  spaced \n out "), "spaced out");
    }
}
