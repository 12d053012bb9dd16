//! PostgreSQL-backed picnic and registration repositories using Diesel ORM.
//!
//! Both tables store their reference columns without foreign keys, so these
//! adapters never fail on dangling ids.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PicnicRepository, RegistrationRepository, RepositoryError};
use crate::domain::{
    NewPicnic, NewRegistration, Picnic, PicnicId, PicnicListQuery, PicnicRegistration,
};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPicnicRow, NewRegistrationRow, PicnicRow, RegistrationRow};
use super::pool::DbPool;
use super::schema::{picnic_registrations, picnics};

/// Diesel-backed implementation of the [`PicnicRepository`] port.
#[derive(Clone)]
pub struct DieselPicnicRepository {
    pool: DbPool,
}

impl DieselPicnicRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PicnicRepository for DieselPicnicRepository {
    async fn insert(&self, picnic: NewPicnic) -> Result<Picnic, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewPicnicRow {
            city_id: picnic.city_id.get(),
            time: picnic.time,
        };

        let row = diesel::insert_into(picnics::table)
            .values(&new_row)
            .returning(PicnicRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn list(&self, query: PicnicListQuery) -> Result<Vec<Picnic>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut statement = picnics::table
            .select(PicnicRow::as_select())
            .order(picnics::id.asc())
            .into_boxed();
        if let Some(at) = query.at {
            statement = statement.filter(picnics::time.eq(at));
        }
        if let Some(bound) = query.not_before {
            statement = statement.filter(picnics::time.ge(bound));
        }

        let rows = statement.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Picnic::from).collect())
    }
}

/// Diesel-backed implementation of the [`RegistrationRepository`] port.
#[derive(Clone)]
pub struct DieselRegistrationRepository {
    pool: DbPool,
}

impl DieselRegistrationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for DieselRegistrationRepository {
    async fn insert(
        &self,
        registration: NewRegistration,
    ) -> Result<PicnicRegistration, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewRegistrationRow {
            user_id: registration.user_id.get(),
            picnic_id: registration.picnic_id.get(),
        };

        let row = diesel::insert_into(picnic_registrations::table)
            .values(&new_row)
            .returning(RegistrationRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn list_for_picnics(
        &self,
        picnic_ids: &[PicnicId],
    ) -> Result<Vec<PicnicRegistration>, RepositoryError> {
        if picnic_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let raw_ids: Vec<i32> = picnic_ids.iter().map(|id| id.get()).collect();

        let rows = picnic_registrations::table
            .filter(picnic_registrations::picnic_id.eq_any(raw_ids))
            .select(RegistrationRow::as_select())
            .order(picnic_registrations::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(PicnicRegistration::from).collect())
    }
}
