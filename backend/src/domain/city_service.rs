//! City resolution service.
//!
//! Implements the city driving ports: names are normalised, confirmed with
//! the external city validator (retrying transient failures with capped
//! exponential backoff), then fetched or created in the city repository.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    CitiesCommand, CitiesQuery, CityLookup, CityRepository, CityValidator, CityValidatorError,
};
use crate::domain::{City, CityName, Error, NewCity};

/// Retry settings for city validator calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupRetryPolicy {
    /// Maximum validator attempts per resolution (including the first call).
    pub max_attempts: u32,
    /// Delay before the second attempt.
    pub initial_backoff: Duration,
    /// Upper bound for any single delay.
    pub max_backoff: Duration,
}

impl Default for LookupRetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(200),
            max_backoff: Duration::from_secs(2),
        }
    }
}

impl LookupRetryPolicy {
    /// Delay to wait after failed attempt number `attempt` (1-based).
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use picnic_backend::domain::LookupRetryPolicy;
    ///
    /// let policy = LookupRetryPolicy::default();
    /// assert_eq!(policy.delay_after(1), Duration::from_millis(200));
    /// assert_eq!(policy.delay_after(2), Duration::from_millis(400));
    /// assert_eq!(policy.delay_after(10), Duration::from_secs(2));
    /// ```
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = 2_u32.saturating_pow(attempt.saturating_sub(1));
        let base_ms = u64::try_from(self.initial_backoff.as_millis()).unwrap_or(u64::MAX);
        let max_ms = u64::try_from(self.max_backoff.as_millis()).unwrap_or(u64::MAX);
        Duration::from_millis(base_ms.saturating_mul(u64::from(exponent)).min(max_ms))
    }
}

/// Async sleeping abstraction used between validator retries.
#[async_trait]
pub trait RetrySleeper: Send + Sync {
    /// Suspend execution for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Tokio-based sleeper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl RetrySleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Domain service implementing [`CitiesCommand`] and [`CitiesQuery`].
#[derive(Clone)]
pub struct CityService {
    cities: Arc<dyn CityRepository>,
    validator: Arc<dyn CityValidator>,
    retry: LookupRetryPolicy,
    sleeper: Arc<dyn RetrySleeper>,
}

impl CityService {
    /// Build a service with the default retry policy and a Tokio sleeper.
    pub fn new(cities: Arc<dyn CityRepository>, validator: Arc<dyn CityValidator>) -> Self {
        Self {
            cities,
            validator,
            retry: LookupRetryPolicy::default(),
            sleeper: Arc::new(TokioSleeper),
        }
    }

    /// Replace the validator retry policy.
    pub fn with_retry_policy(mut self, retry: LookupRetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Replace the sleeper used between retries.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn RetrySleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    async fn lookup_with_retry(&self, name: &CityName) -> Result<CityLookup, Error> {
        let max_attempts = self.retry.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            match self.validator.lookup(name).await {
                Ok(lookup) => return Ok(lookup),
                Err(error) if error.is_retryable() && attempt < max_attempts => {
                    let delay = self.retry.delay_after(attempt);
                    warn!(%name, attempt, ?delay, %error, "city lookup failed; retrying");
                    self.sleeper.sleep(delay).await;
                }
                Err(error) => return Err(map_validator_error(error, attempt)),
            }
        }

        // The loop always returns on its final attempt.
        Err(Error::internal("city lookup made no attempts"))
    }
}

fn map_validator_error(error: CityValidatorError, attempts: u32) -> Error {
    if error.is_retryable() {
        Error::service_unavailable(format!(
            "city lookup unavailable after {attempts} attempt(s): {error}"
        ))
    } else {
        Error::internal(format!("city lookup failed: {error}"))
    }
}

#[async_trait]
impl CitiesCommand for CityService {
    async fn resolve_city(&self, raw: &str) -> Result<City, Error> {
        let name = CityName::parse(raw).map_err(|err| {
            Error::invalid_request(err.to_string())
                .with_details(serde_json::json!({ "field": "city" }))
        })?;

        let weather = match self.lookup_with_retry(&name).await? {
            CityLookup::Known { weather } => weather,
            CityLookup::Unknown => {
                return Err(Error::not_found(format!(
                    "{name} is not a recognised city"
                )));
            }
        };

        if let Some(existing) = self.cities.find_by_name(&name).await? {
            debug!(city_id = %existing.id, %name, "city already stored");
            return Ok(existing);
        }

        let city = self.cities.insert_or_fetch(&NewCity { name, weather }).await?;
        info!(city_id = %city.id, name = %city.name, "city stored");
        Ok(city)
    }
}

#[async_trait]
impl CitiesQuery for CityService {
    async fn list_cities(&self, name: Option<String>) -> Result<Vec<City>, Error> {
        // Blank filters mean "no filter".
        let filter = name.as_deref().and_then(|raw| CityName::parse(raw).ok());
        Ok(self.cities.list(filter.as_ref()).await?)
    }
}

#[cfg(test)]
#[path = "city_service_tests.rs"]
mod tests;
