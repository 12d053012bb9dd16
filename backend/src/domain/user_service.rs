//! User domain service implementing the user driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{UserRepository, UsersCommand, UsersQuery};
use crate::domain::{AgeRange, Error, NewUser, User};

/// Pass-through service over a [`UserRepository`].
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UsersCommand for UserService {
    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        let stored = self.users.insert(&user).await?;
        info!(user_id = %stored.id, "user created");
        Ok(stored)
    }
}

#[async_trait]
impl UsersQuery for UserService {
    async fn list_users(&self, ages: AgeRange) -> Result<Vec<User>, Error> {
        Ok(self.users.list(ages).await?)
    }
}
