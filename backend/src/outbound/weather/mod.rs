//! Outbound adapter validating city names against OpenWeatherMap.

mod dto;
mod http_validator;

pub use http_validator::{OpenWeatherMapBuildError, OpenWeatherMapValidator};
