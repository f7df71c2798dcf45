//! # Shasta Rust SDK
//!
//! A Rust SDK for the Shasta payments REST API, providing type-safe
//! configuration, an async HTTP client, and resource models that validate
//! their attributes and map onto the API's CRUD endpoints.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ShastaConfig`] and [`ShastaConfigBuilder`]
//! - Validated newtypes for the API key and base URL
//! - An async HTTP client ([`HttpClient`]) behind the [`Transport`] trait
//! - Resource models ([`rest::resources`]) for customers, cards and files
//! - Record operations (`save`, `insert`, `update`, `read`, `find_one`,
//!   `find_all`) via [`rest::Record`]
//! - Lazy relation resolution (e.g. a card's customer, a document's files)
//!
//! ## Quick Start
//!
//! ```rust
//! use shasta::{ShastaConfig, ApiKey, Environment};
//!
//! let config = ShastaConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .environment(Environment::Sandbox)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Working With Resources
//!
//! Operations take the transport explicitly. Domain failures (invalid input,
//! missing id, an error answer from the API) return `Ok(false)` and leave
//! field-level messages on the record; `Err` is reserved for faults.
//!
//! ```rust,ignore
//! use shasta::HttpClient;
//! use shasta::rest::{Record, resources::{Card, CardInfo, Customer}};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let mut customer = Record::new(Customer {
//!     first_name: Some("Ada".to_string()),
//!     email: Some("ada@example.com".to_string()),
//!     ..Default::default()
//! });
//! customer.save(&client).await?;
//!
//! let mut card = Record::new(Card {
//!     customer_id: customer.id().map(str::to_string),
//!     card_info: Some(CardInfo::new("4321432143214321", 12, 2030, "987")),
//!     ..Default::default()
//! });
//! if !card.insert(&client).await? {
//!     println!("Card refused: {:?}", card.errors());
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration and transport are passed explicitly
//! - **Fail-fast validation**: invalid input never reaches the network
//! - **Thread-safe**: configuration, client and records are `Send + Sync`
//! - **Async-first**: designed for use with Tokio

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, BaseUrl, Environment, ShastaConfig, ShastaConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, Transport, SDK_VERSION,
};

// Re-export resource infrastructure
pub use rest::{Record, ResourceError, ResourceErrors, Scenario, ShastaResource};

