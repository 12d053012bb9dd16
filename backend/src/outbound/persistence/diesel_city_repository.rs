//! PostgreSQL-backed `CityRepository` implementation using Diesel ORM.
//!
//! `insert_or_fetch` relies on the `UNIQUE (name)` constraint: the insert is
//! `ON CONFLICT (name) DO NOTHING` and the stored row is read back, so racing
//! writers converge on one id.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CityRepository, RepositoryError};
use crate::domain::{City, CityId, CityName, NewCity};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CityRow, NewCityRow};
use super::pool::DbPool;
use super::schema::cities;

/// Diesel-backed implementation of the [`CityRepository`] port.
#[derive(Clone)]
pub struct DieselCityRepository {
    pool: DbPool,
}

impl DieselCityRepository {
    /// Create a new repository with the given connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use picnic_backend::outbound::persistence::{DbPool, DieselCityRepository, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/picnic")).await?;
    /// let repository = DieselCityRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_city(row: CityRow) -> Result<City, RepositoryError> {
    let id = row.id;
    City::try_from(row)
        .map_err(|err| RepositoryError::query(format!("invalid stored city {id}: {err}")))
}

fn rows_to_cities(rows: Vec<CityRow>) -> Result<Vec<City>, RepositoryError> {
    rows.into_iter().map(row_to_city).collect()
}

#[async_trait]
impl CityRepository for DieselCityRepository {
    async fn find_by_name(&self, name: &CityName) -> Result<Option<City>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = cities::table
            .filter(cities::name.eq(name.as_ref()))
            .select(CityRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_city).transpose()
    }

    async fn insert_or_fetch(&self, city: &NewCity) -> Result<City, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewCityRow {
            name: city.name.as_ref(),
            weather: city.weather.as_deref(),
        };

        diesel::insert_into(cities::table)
            .values(&new_row)
            .on_conflict(cities::name)
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let row = cities::table
            .filter(cities::name.eq(city.name.as_ref()))
            .select(CityRow::as_select())
            .first(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_city(row)
    }

    async fn list(&self, name: Option<&CityName>) -> Result<Vec<City>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = cities::table
            .select(CityRow::as_select())
            .order(cities::id.asc())
            .into_boxed();
        if let Some(name) = name {
            query = query.filter(cities::name.eq(name.as_ref().to_owned()));
        }

        let rows = query.load(&mut conn).await.map_err(map_diesel_error)?;
        rows_to_cities(rows)
    }

    async fn find_by_ids(&self, ids: &[CityId]) -> Result<Vec<City>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let raw_ids: Vec<i32> = ids.iter().map(|id| id.get()).collect();

        let rows = cities::table
            .filter(cities::id.eq_any(raw_ids))
            .select(CityRow::as_select())
            .order(cities::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_cities(rows)
    }
}
