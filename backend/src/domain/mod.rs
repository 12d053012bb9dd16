//! Domain primitives, ports and services.
//!
//! Purpose: define the strongly typed entities used by the API and
//! persistence layers, the ports that separate them, and the services that
//! implement the driving ports.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - City, User, Picnic, PicnicRegistration and their id newtypes.
//! - CityService, UserService, PicnicService: driving port implementations.

pub mod city;
mod city_service;
pub mod error;
mod ids;
pub mod picnic;
mod picnic_service;
pub mod ports;
mod trace_id;
pub mod user;
mod user_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::city::{City, CityName, CityValidationError, NewCity};
pub use self::city_service::{CityService, LookupRetryPolicy, RetrySleeper, TokioSleeper};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::ids::{CityId, PicnicId, RegistrationId, UserId};
pub use self::picnic::{
    NewPicnic, NewRegistration, Picnic, PicnicDetails, PicnicFilter, PicnicListQuery,
    PicnicRegistration, PicnicSummary, RegistrationReceipt,
};
pub use self::picnic_service::{PicnicService, PicnicServicePorts};
pub use self::trace_id::TraceId;
pub use self::user::{AgeRange, NewUser, User};
pub use self::user_service::UserService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use picnic_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
