//! Identity document embedded in customers.
//!
//! The document images are uploaded separately as [`File`] resources and
//! referenced here by id. The `front_file`, `back_file` and `selfie_file`
//! resolvers fetch them on demand.

use serde::{Deserialize, Serialize};

use super::country::COUNTRY_CODES;
use super::document_type::DocumentType;
use crate::clients::Transport;
use crate::rest::relation::has_one;
use crate::rest::resources::File;
use crate::rest::validation::{self, Rules};
use crate::rest::{Record, ResourceError, ResourceErrors};

/// An identity document.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct IdentityDocument {
    /// Document type wire name, see [`DocumentType`].
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    /// Issuing country, ISO 3166-1 alpha-2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Expiration date, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_file_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_file_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selfie_file_id: Option<String>,
}

impl IdentityDocument {
    /// Returns the document type, if set to a known value.
    #[must_use]
    pub fn kind(&self) -> Option<DocumentType> {
        self.document_type.as_deref().and_then(|s| s.parse().ok())
    }

    /// Sets the document type.
    pub fn set_kind(&mut self, kind: DocumentType) {
        self.document_type = Some(kind.as_str().to_string());
    }

    /// Checks the document fields without touching the network.
    #[must_use]
    pub fn validate(&self) -> ResourceErrors {
        Rules::new()
            .check(
                "type",
                validation::one_of(self.document_type.as_deref(), DocumentType::NAMES),
            )
            .check(
                "country",
                validation::one_of(self.country.as_deref(), COUNTRY_CODES),
            )
            .check(
                "expiration_date",
                validation::date(self.expiration_date.as_deref()),
            )
            .into_errors()
    }

    /// Checks that every set file id references an existing file.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport faults.
    pub async fn validate_relations<T: Transport>(
        &self,
        transport: &T,
    ) -> Result<ResourceErrors, ResourceError> {
        let mut errors = ResourceErrors::new();
        for (attribute, value) in [
            ("front_file_id", &self.front_file_id),
            ("back_file_id", &self.back_file_id),
            ("selfie_file_id", &self.selfie_file_id),
        ] {
            validation::exists::<File, T>(transport, attribute, value.as_deref(), &mut errors)
                .await?;
        }
        Ok(errors)
    }

    /// Fetches the file referenced by `front_file_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport and hydration faults.
    pub async fn front_file<T: Transport>(
        &self,
        transport: &T,
    ) -> Result<Option<Record<File>>, ResourceError> {
        has_one(transport, self.front_file_id.as_deref()).await
    }

    /// Fetches the file referenced by `back_file_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport and hydration faults.
    pub async fn back_file<T: Transport>(
        &self,
        transport: &T,
    ) -> Result<Option<Record<File>>, ResourceError> {
        has_one(transport, self.back_file_id.as_deref()).await
    }

    /// Fetches the file referenced by `selfie_file_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport and hydration faults.
    pub async fn selfie_file<T: Transport>(
        &self,
        transport: &T,
    ) -> Result<Option<Record<File>>, ResourceError> {
        has_one(transport, self.selfie_file_id.as_deref()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_serializes_under_wire_name() {
        let mut document = IdentityDocument::default();
        document.set_kind(DocumentType::Passport);

        assert_eq!(
            serde_json::to_value(&document).unwrap(),
            json!({"type": "passport"})
        );
        assert_eq!(document.kind(), Some(DocumentType::Passport));
    }

    #[test]
    fn test_validate_reports_each_bad_field() {
        let document = IdentityDocument {
            document_type: Some("visa".into()),
            country: Some("XX".into()),
            expiration_date: Some("31/12/2030".into()),
            number: Some("X1234567".into()),
            ..IdentityDocument::default()
        };
        let errors = document.validate();

        assert_eq!(errors.len(), 3);
        assert!(errors.contains("type"));
        assert!(errors.contains("country"));
        assert!(errors.contains("expiration_date"));
        assert_eq!(document.kind(), None);
    }
}
