//! Resource mapping for the Shasta REST API.
//!
//! This module maps in-memory records onto the API's collection endpoints:
//!
//! - **[`ShastaResource`] trait**: declares a resource's collection path,
//!   attribute lists and validation rules
//! - **[`Record<R>`]**: a resource plus its field errors, carrying the CRUD
//!   operations (`save`, `insert`, `update`, `read`, `find_one`, `find_all`)
//! - **[`Scenario`]**: which attributes are writable and which rules apply
//! - **[`relation`]**: lazy foreign-key resolution
//! - **[`validation`]**: validator functions used by the resources
//! - **[`resources`]**: Customer, Card, File and their embedded objects
//!
//! # Example
//!
//! ```rust,ignore
//! use shasta::{HttpClient, ShastaConfig, ApiKey};
//! use shasta::rest::{Record, resources::Customer};
//!
//! let config = ShastaConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123")?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let mut customer = Record::new(Customer {
//!     email: Some("ada@example.com".to_string()),
//!     ..Default::default()
//! });
//! if !customer.save(&client).await? {
//!     for (attribute, messages) in customer.errors().iter() {
//!         eprintln!("{attribute}: {messages:?}");
//!     }
//! }
//!
//! let page = Record::<Customer>::find_all(&client, &serde_json::json!({"email": "ada@example.com"})).await?;
//! ```

mod errors;
mod path;
mod record;
pub mod relation;
mod resource;
pub mod resources;
mod scenario;
pub mod validation;

pub use errors::{ResourceError, ResourceErrors};
pub use path::{build_path, ResourceOperation};
pub use record::Record;
pub use resource::{FindCondition, ResourceBase, ShastaResource};
pub use scenario::Scenario;
