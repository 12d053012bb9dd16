//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RepositoryError, UserRepository};
use crate::domain::{AgeRange, NewUser, User, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewUserRow {
            name: user.name.as_str(),
            surname: user.surname.as_str(),
            age: user.age,
        };

        let row = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn list(&self, ages: AgeRange) -> Result<Vec<User>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = users::table
            .select(UserRow::as_select())
            .order(users::id.asc())
            .into_boxed();
        if let Some(min) = ages.min {
            query = query.filter(users::age.ge(min));
        }
        if let Some(max) = ages.max {
            query = query.filter(users::age.le(max));
        }

        let rows = query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let raw_ids: Vec<i32> = ids.iter().map(|id| id.get()).collect();

        let rows = users::table
            .filter(users::id.eq_any(raw_ids))
            .select(UserRow::as_select())
            .order(users::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
