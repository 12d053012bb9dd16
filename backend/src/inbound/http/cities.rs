//! City API handlers.
//!
//! ```text
//! POST /create-city/?city=paris
//! GET  /get-cities/?q=Paris
//! ```

use actix_web::{get, post, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{City, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Query parameters for `POST /create-city/`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateCityParams {
    /// City name, matched case-insensitively.
    #[param(example = "paris")]
    pub city: Option<String>,
}

/// Query parameters for `GET /get-cities/`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCitiesParams {
    /// Exact city name filter; normalised before matching.
    pub q: Option<String>,
}

/// Create a city, or return the existing one with the same normalised name.
#[utoipa::path(
    post,
    path = "/create-city/",
    params(CreateCityParams),
    responses(
        (status = 200, description = "Stored city", body = City),
        (status = 400, description = "Missing or blank city name", body = Error),
        (status = 404, description = "Not a recognised city", body = Error),
        (status = 503, description = "City lookup or database unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["city"],
    operation_id = "createCity"
)]
#[post("/create-city")]
pub async fn create_city(
    state: web::Data<HttpState>,
    params: web::Query<CreateCityParams>,
) -> ApiResult<web::Json<City>> {
    let raw = params.into_inner().city.unwrap_or_default();
    let city = state.cities.resolve_city(&raw).await?;
    Ok(web::Json(city))
}

/// List stored cities.
#[utoipa::path(
    get,
    path = "/get-cities/",
    params(ListCitiesParams),
    responses(
        (status = 200, description = "Cities ordered by id", body = [City]),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Database unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["city"],
    operation_id = "listCities"
)]
#[get("/get-cities")]
pub async fn list_cities(
    state: web::Data<HttpState>,
    params: web::Query<ListCitiesParams>,
) -> ApiResult<web::Json<Vec<City>>> {
    let cities = state.cities_query.list_cities(params.into_inner().q).await?;
    Ok(web::Json(cities))
}
