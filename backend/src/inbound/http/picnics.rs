//! Picnic API handlers.
//!
//! ```text
//! GET  /get-picnics/?datetime=2024-06-01T12:00:00&past=false
//! POST /create-picnic/?city_id=1&datetime=2024-06-01T12:00:00
//! POST /register-user-to-picnic/?user_id=3&picnic_id=4
//! ```
//!
//! Timestamps accept RFC 3339 or a naive ISO 8601 form read as UTC.

use actix_web::{get, post, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{
    CityId, Error, PicnicDetails, PicnicFilter, PicnicId, PicnicSummary, RegistrationReceipt,
    UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_flag, parse_optional_timestamp, parse_timestamp, require,
};

const DATETIME: FieldName = FieldName::new("datetime");
const PAST: FieldName = FieldName::new("past");
const CITY_ID: FieldName = FieldName::new("city_id");
const USER_ID: FieldName = FieldName::new("user_id");
const PICNIC_ID: FieldName = FieldName::new("picnic_id");

/// Query parameters for `GET /get-picnics/`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPicnicsParams {
    /// Only picnics scheduled exactly at this time.
    #[param(example = "2024-06-01T12:00:00")]
    pub datetime: Option<String>,
    /// Include picnics scheduled before now. Defaults to `true`.
    #[param(value_type = Option<bool>)]
    pub past: Option<String>,
}

impl ListPicnicsParams {
    fn into_filter(self) -> Result<PicnicFilter, Error> {
        let at = parse_optional_timestamp(self.datetime.as_deref(), DATETIME)?;
        let include_past = match self.past.as_deref() {
            Some(raw) => parse_flag(raw, PAST)?,
            None => true,
        };
        Ok(PicnicFilter { at, include_past })
    }
}

/// Query parameters for `POST /create-picnic/`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreatePicnicParams {
    /// City identifier. Not checked for existence.
    pub city_id: Option<i32>,
    /// Scheduled time.
    #[param(example = "2024-06-01T12:00:00")]
    pub datetime: Option<String>,
}

/// Query parameters for `POST /register-user-to-picnic/`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RegisterParams {
    /// User identifier. Not checked for existence.
    pub user_id: Option<i32>,
    /// Picnic identifier. Not checked for existence.
    pub picnic_id: Option<i32>,
}

/// List picnics with their city name and registered users.
#[utoipa::path(
    get,
    path = "/get-picnics/",
    params(ListPicnicsParams),
    responses(
        (status = 200, description = "Picnics ordered by id", body = [PicnicDetails]),
        (status = 400, description = "Malformed datetime or past flag", body = Error),
        (status = 503, description = "Database unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["picnic"],
    operation_id = "listPicnics"
)]
#[get("/get-picnics")]
pub async fn list_picnics(
    state: web::Data<HttpState>,
    params: web::Query<ListPicnicsParams>,
) -> ApiResult<web::Json<Vec<PicnicDetails>>> {
    let filter = params.into_inner().into_filter()?;
    let picnics = state.picnics_query.list_picnics(filter).await?;
    Ok(web::Json(picnics))
}

/// Schedule a picnic.
#[utoipa::path(
    post,
    path = "/create-picnic/",
    params(CreatePicnicParams),
    responses(
        (status = 200, description = "Stored picnic", body = PicnicSummary),
        (status = 400, description = "Missing or malformed parameter", body = Error),
        (status = 503, description = "Database unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["picnic"],
    operation_id = "createPicnic"
)]
#[post("/create-picnic")]
pub async fn create_picnic(
    state: web::Data<HttpState>,
    params: web::Query<CreatePicnicParams>,
) -> ApiResult<web::Json<PicnicSummary>> {
    let CreatePicnicParams { city_id, datetime } = params.into_inner();
    let city_id = CityId::new(require(city_id, CITY_ID)?);
    let time = parse_timestamp(&require(datetime, DATETIME)?, DATETIME)?;
    let picnic = state.picnics.create_picnic(city_id, time).await?;
    Ok(web::Json(picnic))
}

/// Register a user to a picnic.
#[utoipa::path(
    post,
    path = "/register-user-to-picnic/",
    params(RegisterParams),
    responses(
        (status = 200, description = "Stored registration", body = RegistrationReceipt),
        (status = 400, description = "Missing or malformed parameter", body = Error),
        (status = 503, description = "Database unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["picnic"],
    operation_id = "registerUserToPicnic"
)]
#[post("/register-user-to-picnic")]
pub async fn register_user(
    state: web::Data<HttpState>,
    params: web::Query<RegisterParams>,
) -> ApiResult<web::Json<RegistrationReceipt>> {
    let RegisterParams { user_id, picnic_id } = params.into_inner();
    let user_id = UserId::new(require(user_id, USER_ID)?);
    let picnic_id = PicnicId::new(require(picnic_id, PICNIC_ID)?);
    let receipt = state.picnics.register_user(user_id, picnic_id).await?;
    Ok(web::Json(receipt))
}
