//! Postal address embedded in customers.

use serde::{Deserialize, Serialize};

use super::country::COUNTRY_CODES;
use crate::rest::validation::{self, Rules};
use crate::rest::ResourceErrors;

/// A postal address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Address {
    /// Checks the address fields.
    #[must_use]
    pub fn validate(&self) -> ResourceErrors {
        Rules::new()
            .check(
                "country",
                validation::one_of(self.country.as_deref(), COUNTRY_CODES),
            )
            .into_errors()
    }
}
