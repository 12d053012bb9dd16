//! Driving port for city creation.
//!
//! Inbound adapters call this port to turn a raw, user-supplied name into a
//! stored city without knowing how names are validated or persisted.

use async_trait::async_trait;

use crate::domain::{City, Error};

/// Domain use-case port for resolving (get-or-create) cities.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CitiesCommand: Send + Sync {
    /// Normalise `raw`, confirm it names a real city, and return the stored
    /// row, creating it on first sight.
    ///
    /// Fails with `invalid_request` for blank names and `not_found` when the
    /// city lookup rejects the name.
    async fn resolve_city(&self, raw: &str) -> Result<City, Error>;
}
