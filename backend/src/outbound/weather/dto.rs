//! Wire shapes for the OpenWeatherMap current-weather response.
//!
//! Only the fields the adapter reads are modelled; everything else is ignored.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct CurrentWeatherDto {
    #[serde(default)]
    main: Option<MainDto>,
}

#[derive(Debug, Deserialize)]
struct MainDto {
    #[serde(default)]
    temp: Option<f64>,
}

impl CurrentWeatherDto {
    /// Current temperature in degrees Celsius rendered as text.
    pub(super) fn weather_snapshot(&self) -> Option<String> {
        self.main
            .as_ref()
            .and_then(|main| main.temp)
            .filter(|temp| temp.is_finite())
            .map(|temp| temp.to_string())
    }
}
