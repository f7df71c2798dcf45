//! Shasta REST resources.
//!
//! | Resource | Collection | Writable | Create only |
//! |---|---|---|---|
//! | [`Customer`] | `customers` | names, contact data, address, identity document | |
//! | [`Card`] | `cards` | | `customer_id`, `card_info` |
//! | [`File`] | `files` | | `name`, `content_type`, `content` |
//!
//! Embedded objects ([`Address`], [`IdentityDocument`], [`CardInfo`]) and
//! enumerations live in [`common`] and are re-exported here.
//!
//! # Example
//!
//! ```rust,ignore
//! use shasta::rest::Record;
//! use shasta::rest::resources::{Card, Customer};
//!
//! let customers = Record::<Customer>::find_all(&client, &()).await?;
//! let card = Record::<Card>::find_one(&client, "card_123").await?;
//! ```

pub mod common;

mod card;
mod customer;
mod file;

pub use card::{Card, CardDetails};
pub use common::{
    is_country_code, Address, CardInfo, DocumentType, IdentityDocument, COUNTRY_CODES,
};
pub use customer::Customer;
pub use file::File;
