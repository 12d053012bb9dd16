//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by
//! PostgreSQL through `diesel-async` and a `bb8` pool.
//!
//! - Repository implementations only translate between Diesel rows and
//!   domain types. No business logic lives here.
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//!   private to this module.
//! - Pool and Diesel failures are mapped to `RepositoryError`.
//!
//! # Example
//!
//! ```ignore
//! use picnic_backend::outbound::persistence::{DbPool, DieselCityRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/picnic")).await?;
//! let cities = DieselCityRepository::new(pool);
//! ```

mod diesel_city_repository;
mod diesel_error_mapping;
mod diesel_picnic_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_city_repository::DieselCityRepository;
pub use diesel_picnic_repository::{DieselPicnicRepository, DieselRegistrationRepository};
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations, run_migrations_blocking};
pub use pool::{DbPool, PoolConfig, PoolError};
