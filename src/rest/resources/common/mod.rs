//! Embedded objects and enumerations shared by the resources.
//!
//! These types are not resources themselves (they have no endpoint of their
//! own) but travel nested inside `Customer` and `Card` payloads.

mod address;
mod card_info;
mod country;
mod document_type;
mod identity_document;

pub use address::Address;
pub use card_info::CardInfo;
pub use country::{is_country_code, COUNTRY_CODES};
pub use document_type::DocumentType;
pub use identity_document::IdentityDocument;
