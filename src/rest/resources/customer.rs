//! Customer resource implementation.

use serde::{Deserialize, Serialize};

use super::common::{Address, IdentityDocument, COUNTRY_CODES};
use crate::clients::Transport;
use crate::rest::validation::{self, Rules};
use crate::rest::{ResourceBase, ResourceError, ResourceErrors, Scenario, ShastaResource};

/// A customer of the project.
///
/// Every attribute is optional and writable on both create and update.
///
/// # Example
///
/// ```rust,ignore
/// use shasta::rest::{Record, resources::{Customer, IdentityDocument, DocumentType}};
///
/// let mut document = IdentityDocument::default();
/// document.set_kind(DocumentType::Passport);
/// document.front_file_id = Some(front.id().unwrap().to_string());
///
/// let mut customer = Record::new(Customer {
///     first_name: Some("Ada".to_string()),
///     email: Some("ada@example.com".to_string()),
///     nationality: Some("GB".to_string()),
///     identity_document: Some(document),
///     ..Default::default()
/// });
/// customer.insert(&client).await?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Customer {
    #[serde(flatten)]
    pub base: ResourceBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Birth date, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_document: Option<IdentityDocument>,
}

impl ShastaResource for Customer {
    const NAME: &'static str = "Customer";
    const PLURAL: &'static str = "customers";
    const ATTRIBUTES: &'static [&'static str] = &[
        "first_name",
        "last_name",
        "email",
        "phone_number",
        "birth_date",
        "nationality",
        "address",
        "identity_document",
    ];

    fn base(&self) -> &ResourceBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ResourceBase {
        &mut self.base
    }

    fn validate(&self, scenario: Scenario) -> ResourceErrors {
        if scenario == Scenario::Load {
            return ResourceErrors::new();
        }
        Rules::new()
            .check("email", validation::email(self.email.as_deref()))
            .check("birth_date", validation::date(self.birth_date.as_deref()))
            .check(
                "nationality",
                validation::one_of(self.nationality.as_deref(), COUNTRY_CODES),
            )
            .check(
                "address",
                self.address
                    .as_ref()
                    .map_or(Ok(()), |address| validation::embedded(&address.validate())),
            )
            .check(
                "identity_document",
                self.identity_document
                    .as_ref()
                    .map_or(Ok(()), |document| validation::embedded(&document.validate())),
            )
            .into_errors()
    }

    async fn validate_relations<T: Transport>(
        &self,
        transport: &T,
    ) -> Result<ResourceErrors, ResourceError> {
        let mut errors = ResourceErrors::new();
        if let Some(document) = &self.identity_document {
            let mut document_errors = document.validate_relations(transport).await?;
            errors.merge(document_errors.take_api_errors());
            if let Err(message) = validation::embedded(&document_errors) {
                errors.add("identity_document", message);
            }
        }
        Ok(errors)
    }
}
