//! Driven port for checking that a name denotes a real city.
//!
//! The lookup service doubles as a weather source: a positive answer may
//! carry the current conditions, which are stored with a newly created city.

use async_trait::async_trait;

use crate::domain::CityName;

use super::define_port_error;

/// Answer returned by a [`CityValidator`].
#[derive(Debug, Clone, PartialEq)]
pub enum CityLookup {
    /// The lookup service does not know this city.
    Unknown,
    /// The city exists.
    Known {
        /// Current weather snapshot, when the service reported one.
        weather: Option<String>,
    },
}

define_port_error! {
    /// Errors surfaced while calling the city lookup service.
    pub enum CityValidatorError {
        /// Network transport failed before a response arrived.
        Transport => "city lookup transport failed: {message}",
        /// The call exceeded its timeout.
        Timeout => "city lookup timed out: {message}",
        /// The service throttled the request.
        RateLimited => "city lookup rate limited: {message}",
        /// The service answered with a server-side failure.
        Upstream => "city lookup upstream failure: {message}",
        /// The service rejected our credentials.
        Credentials => "city lookup rejected credentials: {message}",
        /// The service refused the request for another client-side reason.
        Rejected => "city lookup request rejected: {message}",
        /// The response could not be decoded.
        Decode => "city lookup response decode failed: {message}",
    }
}

impl CityValidatorError {
    /// Whether retrying the call may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. }
                | Self::Timeout { .. }
                | Self::RateLimited { .. }
                | Self::Upstream { .. }
        )
    }
}

/// Port for validating city names against an external service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityValidator: Send + Sync {
    /// Look up `name` (already normalised).
    async fn lookup(&self, name: &CityName) -> Result<CityLookup, CityValidatorError>;
}
