//! Card data sent when a card is created.

use serde::{Deserialize, Serialize};

use crate::rest::validation::{self, Rules};
use crate::rest::ResourceErrors;

/// Raw card data. Accepted on create only and never returned by the API.
#[derive(Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CardInfo {
    /// Primary account number, 12 to 19 digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Expiration month, 1 to 12.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<u32>,
    /// Four-digit expiration year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<u32>,
    /// Card verification value, 3 or 4 digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,
}

impl CardInfo {
    /// Creates card data with every field set.
    #[must_use]
    pub fn new(
        number: impl Into<String>,
        expiration_month: u32,
        expiration_year: u32,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            number: Some(number.into()),
            expiration_month: Some(expiration_month),
            expiration_year: Some(expiration_year),
            cvv: Some(cvv.into()),
        }
    }

    /// Checks that every field is present and well formed.
    #[must_use]
    pub fn validate(&self) -> ResourceErrors {
        Rules::new()
            .check("number", validation::required(self.number.as_deref()))
            .check("number", validation::digits(self.number.as_deref(), 12, 19))
            .check(
                "expiration_month",
                validation::present(self.expiration_month.as_ref()),
            )
            .check(
                "expiration_month",
                validation::in_range(self.expiration_month, 1, 12),
            )
            .check(
                "expiration_year",
                validation::present(self.expiration_year.as_ref()),
            )
            .check(
                "expiration_year",
                validation::in_range(self.expiration_year, 1000, 9999),
            )
            .check("cvv", validation::required(self.cvv.as_deref()))
            .check("cvv", validation::digits(self.cvv.as_deref(), 3, 4))
            .into_errors()
    }
}

// Card numbers and CVVs stay out of logs.
impl std::fmt::Debug for CardInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Numbers of four characters or fewer are masked entirely.
        let masked = self.number.as_deref().map(|n| {
            match n.get(n.len().saturating_sub(4)..) {
                Some(digits) if n.len() > 4 => format!("****{digits}"),
                _ => "****".to_string(),
            }
        });
        f.debug_struct("CardInfo")
            .field("number", &masked)
            .field("expiration_month", &self.expiration_month)
            .field("expiration_year", &self.expiration_year)
            .field("cvv", &self.cvv.as_ref().map(|_| "***"))
            .finish()
    }
}
