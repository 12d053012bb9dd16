//! Driving port for picnic mutations.
//!
//! Neither operation checks that the referenced rows exist; dangling ids are
//! stored and reported back with a `null` name.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{CityId, Error, PicnicId, PicnicSummary, RegistrationReceipt, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PicnicsCommand: Send + Sync {
    /// Schedule a picnic in `city_id` at `time`.
    async fn create_picnic(
        &self,
        city_id: CityId,
        time: DateTime<Utc>,
    ) -> Result<PicnicSummary, Error>;

    /// Register `user_id` to `picnic_id`. Repeated calls create repeated rows.
    async fn register_user(
        &self,
        user_id: UserId,
        picnic_id: PicnicId,
    ) -> Result<RegistrationReceipt, Error>;
}
