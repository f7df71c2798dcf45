//! Identity document types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of an identity document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// National identity card.
    IdCard,
    /// Passport.
    Passport,
    /// Driving license.
    DrivingLicense,
    /// Residence permit.
    ResidencePermit,
}

impl DocumentType {
    /// Every document type.
    pub const ALL: [Self; 4] = [
        Self::IdCard,
        Self::Passport,
        Self::DrivingLicense,
        Self::ResidencePermit,
    ];

    /// The wire names of every document type.
    pub const NAMES: &'static [&'static str] =
        &["id_card", "passport", "driving_license", "residence_permit"];

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IdCard => "id_card",
            Self::Passport => "passport",
            Self::DrivingLicense => "driving_license",
            Self::ResidencePermit => "residence_permit",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown document type '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_variants() {
        let names: Vec<&str> = DocumentType::ALL.iter().map(DocumentType::as_str).collect();
        assert_eq!(names, DocumentType::NAMES);
    }

    #[test]
    fn test_parse_and_serialize() {
        assert_eq!("passport".parse(), Ok(DocumentType::Passport));
        assert!("visa".parse::<DocumentType>().is_err());
        assert_eq!(
            serde_json::to_value(DocumentType::DrivingLicense).unwrap(),
            serde_json::json!("driving_license")
        );
    }
}
