//! HTTP inbound adapter exposing REST endpoints.

pub mod cities;
pub mod error;
pub mod health;
pub mod picnics;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

use actix_web::web;

/// Register the picnic API routes and their extractor error handlers.
///
/// Routes are declared without a trailing slash; wrap the app in
/// `NormalizePath::trim()` so `/get-users/` and `/get-users` both match.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(validation::query_error_handler))
        .app_data(web::JsonConfig::default().error_handler(validation::json_error_handler))
        .service(cities::create_city)
        .service(cities::list_cities)
        .service(users::list_users)
        .service(users::create_user)
        .service(picnics::list_picnics)
        .service(picnics::create_picnic)
        .service(picnics::register_user);
}
