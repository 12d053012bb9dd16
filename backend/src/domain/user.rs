//! User records and the age filter used when listing them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UserId;

/// Persisted user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: UserId,
    #[schema(example = "Ada")]
    pub name: String,
    #[schema(example = "Lovelace")]
    pub surname: String,
    #[schema(example = 36)]
    pub age: i32,
}

/// Request body for `POST /create-user/`.
///
/// Only shape and type are checked; any strings and integer age are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewUser {
    #[schema(example = "Ada")]
    pub name: String,
    #[schema(example = "Lovelace")]
    pub surname: String,
    #[schema(example = 36)]
    pub age: i32,
}

/// Inclusive age bounds; `None` leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl AgeRange {
    /// Build a range from optional bounds.
    pub const fn new(min: Option<i32>, max: Option<i32>) -> Self {
        Self { min, max }
    }

    /// Whether `age` falls inside the range.
    ///
    /// # Examples
    /// ```
    /// use picnic_backend::domain::AgeRange;
    ///
    /// let thirties = AgeRange::new(Some(30), Some(39));
    /// assert!(thirties.contains(30));
    /// assert!(!thirties.contains(40));
    /// ```
    pub fn contains(&self, age: i32) -> bool {
        self.min.is_none_or(|min| age >= min) && self.max.is_none_or(|max| age <= max)
    }
}
