//! Driving port for user creation.
use async_trait::async_trait;

use crate::domain::{Error, NewUser, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store a user as given and return it with its id.
    async fn create_user(&self, user: NewUser) -> Result<User, Error>;
}
