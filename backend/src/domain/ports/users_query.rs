//! Driving port for user-facing queries.
//!
//! Inbound adapters (HTTP handlers) use this port to list users without
//! importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{AgeRange, Error, User};

/// Domain use-case port for listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return users whose age falls inside `ages`, ordered by id.
    async fn list_users(&self, ages: AgeRange) -> Result<Vec<User>, Error>;
}
