//! Port abstraction for picnic persistence adapters.
use async_trait::async_trait;

use crate::domain::{NewPicnic, Picnic, PicnicListQuery};

use super::RepositoryError;

#[async_trait]
pub trait PicnicRepository: Send + Sync {
    /// Insert a picnic without checking that its city exists.
    async fn insert(&self, picnic: NewPicnic) -> Result<Picnic, RepositoryError>;

    /// List picnics matching `query`, ordered by id.
    async fn list(&self, query: PicnicListQuery) -> Result<Vec<Picnic>, RepositoryError>;
}
