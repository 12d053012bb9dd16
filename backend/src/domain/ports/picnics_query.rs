//! Driving port for picnic listings.
use async_trait::async_trait;

use crate::domain::{Error, PicnicDetails, PicnicFilter};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PicnicsQuery: Send + Sync {
    /// List picnics matching `filter`, each with its city name and attendees.
    async fn list_picnics(&self, filter: PicnicFilter) -> Result<Vec<PicnicDetails>, Error>;
}
