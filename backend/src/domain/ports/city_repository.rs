//! Port abstraction for city persistence adapters.

use async_trait::async_trait;

use crate::domain::{City, CityId, CityName, NewCity};

use super::RepositoryError;

/// Storage for [`City`] rows. Names are unique in the store.
#[async_trait]
pub trait CityRepository: Send + Sync {
    /// Fetch the city with exactly this normalised name.
    async fn find_by_name(&self, name: &CityName) -> Result<Option<City>, RepositoryError>;

    /// Insert `city` unless a row with the same name exists, then return the
    /// stored row. Concurrent callers racing on one name observe the same id.
    async fn insert_or_fetch(&self, city: &NewCity) -> Result<City, RepositoryError>;

    /// List cities ordered by id, optionally restricted to one name.
    async fn list(&self, name: Option<&CityName>) -> Result<Vec<City>, RepositoryError>;

    /// Fetch every city whose id is in `ids`; unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[CityId]) -> Result<Vec<City>, RepositoryError>;
}
