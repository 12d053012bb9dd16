//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use picnic_backend::domain::LookupRetryPolicy;
use picnic_backend::domain::ports::CityValidator;
use picnic_backend::outbound::persistence::DbPool;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) city_validator: Arc<dyn CityValidator>,
    pub(crate) retry_policy: LookupRetryPolicy,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a server configuration from its required collaborators.
    #[must_use]
    pub fn new(
        bind_addr: SocketAddr,
        db_pool: DbPool,
        city_validator: Arc<dyn CityValidator>,
    ) -> Self {
        Self {
            bind_addr,
            db_pool,
            city_validator,
            retry_policy: LookupRetryPolicy::default(),
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Override the retry policy applied to city lookups.
    #[must_use]
    pub fn with_retry_policy(mut self, retry_policy: LookupRetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
