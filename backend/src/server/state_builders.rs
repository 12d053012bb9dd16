//! Builders wiring repositories and domain services into HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use picnic_backend::domain::ports::{
    CityRepository, CityValidator, PicnicRepository, RegistrationRepository, UserRepository,
};
use picnic_backend::domain::{
    CityService, LookupRetryPolicy, PicnicService, PicnicServicePorts, UserService,
};
use picnic_backend::inbound::http::state::HttpState;
use picnic_backend::outbound::persistence::{
    DbPool, DieselCityRepository, DieselPicnicRepository, DieselRegistrationRepository,
    DieselUserRepository,
};

use super::ServerConfig;

/// Driven ports backing the HTTP state.
pub(super) struct Repositories {
    pub cities: Arc<dyn CityRepository>,
    pub users: Arc<dyn UserRepository>,
    pub picnics: Arc<dyn PicnicRepository>,
    pub registrations: Arc<dyn RegistrationRepository>,
}

impl Repositories {
    fn diesel(pool: &DbPool) -> Self {
        Self {
            cities: Arc::new(DieselCityRepository::new(pool.clone())),
            users: Arc::new(DieselUserRepository::new(pool.clone())),
            picnics: Arc::new(DieselPicnicRepository::new(pool.clone())),
            registrations: Arc::new(DieselRegistrationRepository::new(pool.clone())),
        }
    }
}

/// Assemble the domain services over `repos` and expose them as driving ports.
pub(super) fn build_state_from(
    repos: Repositories,
    validator: Arc<dyn CityValidator>,
    retry_policy: LookupRetryPolicy,
) -> HttpState {
    let Repositories {
        cities,
        users,
        picnics,
        registrations,
    } = repos;

    let city_service =
        Arc::new(CityService::new(cities.clone(), validator).with_retry_policy(retry_policy));
    let user_service = Arc::new(UserService::new(users.clone()));
    let picnic_service = Arc::new(PicnicService::new(
        PicnicServicePorts {
            picnics,
            registrations,
            cities,
            users,
        },
        Arc::new(DefaultClock),
    ));

    HttpState {
        cities: city_service.clone(),
        cities_query: city_service,
        users: user_service.clone(),
        users_query: user_service,
        picnics: picnic_service.clone(),
        picnics_query: picnic_service,
    }
}

/// Build the shared HTTP state over the Diesel repositories.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(build_state_from(
        Repositories::diesel(&config.db_pool),
        config.city_validator.clone(),
        config.retry_policy,
    ))
}
