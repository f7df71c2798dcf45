//! Card resource implementation.

use serde::{Deserialize, Serialize};

use super::common::CardInfo;
use super::Customer;
use crate::clients::Transport;
use crate::rest::relation::has_one;
use crate::rest::validation::{self, Rules};
use crate::rest::{Record, ResourceBase, ResourceError, ResourceErrors, Scenario, ShastaResource};

/// Card details reported by the server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CardDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_four_digits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<u32>,
}

/// A payment card owned by a customer.
///
/// A card is immutable once created: `customer_id` and `card_info` are sent
/// on create only, and the server answers with `card_details`.
///
/// # Example
///
/// ```rust,ignore
/// use shasta::rest::{Record, resources::{Card, CardInfo}};
///
/// let mut card = Record::new(Card {
///     customer_id: Some("cus_123".to_string()),
///     card_info: Some(CardInfo::new("4321432143214321", 12, 2030, "987")),
///     ..Default::default()
/// });
/// if card.insert(&client).await? {
///     let owner = card.customer(&client).await?;
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Card {
    #[serde(flatten)]
    pub base: ResourceBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_info: Option<CardInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_details: Option<CardDetails>,
}

impl Card {
    /// Fetches the customer referenced by `customer_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport and hydration faults.
    pub async fn customer<T: Transport>(
        &self,
        transport: &T,
    ) -> Result<Option<Record<Customer>>, ResourceError> {
        has_one(transport, self.customer_id.as_deref()).await
    }
}

impl ShastaResource for Card {
    const NAME: &'static str = "Card";
    const PLURAL: &'static str = "cards";
    const ATTRIBUTES: &'static [&'static str] = &[];
    const CREATE_ONLY: &'static [&'static str] = &["customer_id", "card_info"];
    const READ_ONLY: &'static [&'static str] = &["card_details"];

    fn base(&self) -> &ResourceBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ResourceBase {
        &mut self.base
    }

    fn validate(&self, scenario: Scenario) -> ResourceErrors {
        if scenario != Scenario::Create {
            return ResourceErrors::new();
        }
        Rules::new()
            .check("customer_id", validation::required(self.customer_id.as_deref()))
            .check("card_info", validation::present(self.card_info.as_ref()))
            .check(
                "card_info",
                self.card_info
                    .as_ref()
                    .map_or(Ok(()), |info| validation::embedded(&info.validate())),
            )
            .into_errors()
    }

    async fn validate_relations<T: Transport>(
        &self,
        transport: &T,
    ) -> Result<ResourceErrors, ResourceError> {
        let mut errors = ResourceErrors::new();
        validation::exists::<Customer, T>(
            transport,
            "customer_id",
            self.customer_id.as_deref(),
            &mut errors,
        )
        .await?;
        Ok(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_requires_customer_and_card_info() {
        let errors = Card::default().validate(Scenario::Create);
        assert_eq!(errors.len(), 2);
        assert!(errors.contains("customer_id"));
        assert!(errors.contains("card_info"));
    }

    #[test]
    fn test_partial_card_info_is_one_error() {
        let card = Card {
            customer_id: Some("cus_1".into()),
            card_info: Some(CardInfo {
                number: Some("123".into()),
                ..CardInfo::default()
            }),
            ..Card::default()
        };
        let errors = card.validate(Scenario::Create);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("card_info").map(<[String]>::len), Some(1));
    }

    #[test]
    fn test_card_details_load_from_response() {
        let card: Card = serde_json::from_value(json!({
            "id": "card_1",
            "customer_id": "cus_1",
            "card_details": {"brand": "visa", "last_four_digits": "4321",
                             "expiration_month": 12, "expiration_year": 2030}
        }))
        .unwrap();

        assert_eq!(
            card.card_details.and_then(|d| d.last_four_digits),
            Some("4321".to_string())
        );
        assert!(card.card_info.is_none());
    }

    #[test]
    fn test_card_is_immutable_after_create() {
        assert_eq!(Card::safe_attributes(Scenario::Default), vec!["meta"]);
        assert_eq!(
            Card::safe_attributes(Scenario::Create),
            vec!["meta", "customer_id", "card_info"]
        );
    }
}
