//! Port abstraction for picnic registration persistence adapters.
use async_trait::async_trait;

use crate::domain::{NewRegistration, PicnicId, PicnicRegistration};

use super::RepositoryError;

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Insert a registration. Duplicates and dangling ids are accepted.
    async fn insert(
        &self,
        registration: NewRegistration,
    ) -> Result<PicnicRegistration, RepositoryError>;

    /// All registrations for the given picnics, ordered by registration id.
    async fn list_for_picnics(
        &self,
        picnic_ids: &[PicnicId],
    ) -> Result<Vec<PicnicRegistration>, RepositoryError>;
}
