//! Driving port for city listings.
use async_trait::async_trait;

use crate::domain::{City, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CitiesQuery: Send + Sync {
    /// List stored cities. A non-blank `name` is normalised and matched
    /// exactly; a blank or absent one returns every city.
    async fn list_cities(&self, name: Option<String>) -> Result<Vec<City>, Error>;
}
