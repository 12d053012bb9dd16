//! Picnics, registrations and their enriched read models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CityId, PicnicId, RegistrationId, User, UserId};

/// Persisted picnic.
///
/// `city_id` is stored as given; nothing guarantees the city exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picnic {
    pub id: PicnicId,
    pub city_id: CityId,
    pub time: DateTime<Utc>,
}

/// Picnic awaiting insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewPicnic {
    pub city_id: CityId,
    pub time: DateTime<Utc>,
}

/// Persisted user-to-picnic link. Duplicates are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PicnicRegistration {
    pub id: RegistrationId,
    pub user_id: UserId,
    pub picnic_id: PicnicId,
}

/// Registration awaiting insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRegistration {
    pub user_id: UserId,
    pub picnic_id: PicnicId,
}

/// Caller-facing picnic listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PicnicFilter {
    /// Only picnics scheduled exactly at this instant.
    pub at: Option<DateTime<Utc>>,
    /// Include picnics scheduled before "now".
    pub include_past: bool,
}

impl Default for PicnicFilter {
    fn default() -> Self {
        Self {
            at: None,
            include_past: true,
        }
    }
}

/// Store-level picnic query, with "now" already resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PicnicListQuery {
    /// Exact time match.
    pub at: Option<DateTime<Utc>>,
    /// Inclusive lower bound on `time`.
    pub not_before: Option<DateTime<Utc>>,
}

/// Picnic as returned by `POST /create-picnic/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PicnicSummary {
    pub id: PicnicId,
    /// City name, or `null` when `city_id` does not match a city.
    #[schema(example = "Paris")]
    pub city: Option<String>,
    pub time: DateTime<Utc>,
}

/// Picnic as returned by `GET /get-picnics/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PicnicDetails {
    pub id: PicnicId,
    /// City name, or `null` when `city_id` does not match a city.
    #[schema(example = "Paris")]
    pub city: Option<String>,
    pub time: DateTime<Utc>,
    /// Registered users in registration order; repeats when registered twice.
    pub users: Vec<User>,
}

/// Registration as returned by `POST /register-user-to-picnic/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RegistrationReceipt {
    pub id: RegistrationId,
    /// Registered user's name, or `null` when `user_id` does not match a user.
    #[schema(example = "Ada")]
    pub user: Option<String>,
    pub picnic_id: PicnicId,
}
