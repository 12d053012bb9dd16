//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Command`, `*Query`) are called by inbound adapters;
//! driven ports (repositories and the city validator) are implemented by
//! outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod cities_command;
mod cities_query;
mod city_repository;
mod city_validator;
mod picnic_repository;
mod picnics_command;
mod picnics_query;
mod registration_repository;
mod repository_error;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use cities_command::MockCitiesCommand;
pub use cities_command::CitiesCommand;
#[cfg(test)]
pub use cities_query::MockCitiesQuery;
pub use cities_query::CitiesQuery;
pub use city_repository::CityRepository;
#[cfg(test)]
pub use city_validator::MockCityValidator;
pub use city_validator::{CityLookup, CityValidator, CityValidatorError};
pub use picnic_repository::PicnicRepository;
#[cfg(test)]
pub use picnics_command::MockPicnicsCommand;
pub use picnics_command::PicnicsCommand;
#[cfg(test)]
pub use picnics_query::MockPicnicsQuery;
pub use picnics_query::PicnicsQuery;
pub use registration_repository::RegistrationRepository;
pub use repository_error::RepositoryError;
pub use user_repository::UserRepository;
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
