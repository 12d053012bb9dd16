//! Port abstraction for user persistence adapters.
use async_trait::async_trait;

use crate::domain::{AgeRange, NewUser, User, UserId};

use super::RepositoryError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return it with its assigned id.
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError>;

    /// List users whose age lies inside `ages`, ordered by id.
    async fn list(&self, ages: AgeRange) -> Result<Vec<User>, RepositoryError>;

    /// Fetch every user whose id is in `ids`; unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, RepositoryError>;
}
