//! City aggregate and name normalisation.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CityId;

/// Validation errors returned by [`CityName::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CityValidationError {
    /// Name was missing or only whitespace.
    #[error("city name must not be empty")]
    EmptyName,
}

/// Canonical city name used for comparison and deduplication.
///
/// Parsing trims surrounding whitespace, upper-cases the first character and
/// lower-cases the remainder, so `"paris"`, `" PARIS "` and `"Paris"` all map
/// to `"Paris"`.
///
/// # Examples
/// ```
/// use picnic_backend::domain::CityName;
///
/// let name = CityName::parse("  new YORK ").expect("non-empty name");
/// assert_eq!(name.as_ref(), "New york");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "Paris")]
pub struct CityName(String);

impl CityName {
    /// Normalise and validate a raw city name.
    pub fn parse(raw: &str) -> Result<Self, CityValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CityValidationError::EmptyName);
        }
        Ok(Self(capitalize(trimmed)))
    }
}

/// Upper-cases the first character and lower-cases the rest.
///
/// Only the leading character of a multi-character upper-case expansion stays
/// upper-case (`"ß"` becomes `"S"` then `"s"`), so parsing a parsed name is a
/// no-op.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let mut upper = first.to_uppercase();
            upper
                .next()
                .into_iter()
                .chain(upper.flat_map(char::to_lowercase))
                .chain(chars.flat_map(char::to_lowercase))
                .collect()
        }
        None => String::new(),
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CityName> for String {
    fn from(value: CityName) -> Self {
        value.0
    }
}

impl TryFrom<String> for CityName {
    type Error = CityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// Persisted city.
///
/// `weather` is the snapshot captured from the city lookup when the row was
/// first created; it is never refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct City {
    pub id: CityId,
    pub name: CityName,
    #[schema(example = "18.4")]
    pub weather: Option<String>,
}

/// City awaiting insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCity {
    pub name: CityName,
    pub weather: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("paris", "Paris")]
    #[case("PARIS", "Paris")]
    #[case("  saint-petersburg ", "Saint-petersburg")]
    #[case("new york", "New york")]
    #[case("élancourt", "Élancourt")]
    #[case("x", "X")]
    #[case("ßtadt", "Sstadt")]
    #[case("ﬁrenze", "Firenze")]
    fn parse_normalises(#[case] raw: &str, #[case] expected: &str) {
        let name = CityName::parse(raw).expect("non-empty name parses");
        assert_eq!(name.as_ref(), expected);
    }

    #[rstest]
    #[case("ßtadt")]
    #[case("ﬁrenze")]
    #[case("ŉagar")]
    #[case("  new YORK ")]
    fn parse_is_idempotent(#[case] raw: &str) {
        let once = CityName::parse(raw).expect("non-empty name parses");
        let twice = CityName::parse(once.as_ref()).expect("parsed name parses");
        assert_eq!(once, twice);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn parse_rejects_blank(#[case] raw: &str) {
        assert_eq!(CityName::parse(raw), Err(CityValidationError::EmptyName));
    }

    #[test]
    fn city_serialises_flat_record() {
        let city = City {
            id: CityId::new(1),
            name: CityName::parse("paris").expect("valid"),
            weather: None,
        };
        let value = serde_json::to_value(&city).expect("city serialises");
        assert_eq!(
            value,
            serde_json::json!({ "id": 1, "name": "Paris", "weather": null })
        );
    }
}
