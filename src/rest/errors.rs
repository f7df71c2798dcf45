//! Error types for resource operations.
//!
//! Resource operations separate two kinds of failure:
//!
//! - **Domain failures** (invalid input, missing id, non-2xx API answer) are
//!   recorded in the record's [`ResourceErrors`] and reported by a `false`
//!   return value. They never surface as `Err`.
//! - **Faults** (the transport could not deliver the request, a payload
//!   could not be (de)serialized) are returned as [`ResourceError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shasta::rest::{Record, ResourceError};
//! use shasta::rest::resources::Customer;
//!
//! let mut customer = Record::new(Customer::default());
//! match customer.save(&client).await {
//!     Ok(true) => println!("Saved as {:?}", customer.id()),
//!     Ok(false) => {
//!         for (attribute, messages) in customer.errors().iter() {
//!             println!("{attribute}: {messages:?}");
//!         }
//!     }
//!     Err(ResourceError::Http(e)) => println!("Transport fault: {e}"),
//!     Err(e) => println!("Other fault: {e}"),
//! }
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::clients::HttpError;

/// Faults raised by resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The transport failed to deliver the request.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The resource could not be serialized into a request payload.
    #[error("Failed to serialize {resource}: {source}")]
    Serialization {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying serde error.
        source: serde_json::Error,
    },

    /// A successful response could not be assigned onto the resource.
    #[error("Failed to hydrate {resource} from response: {source}")]
    Hydration {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying serde error.
        source: serde_json::Error,
    },

    /// A listing condition did not serialize to an object of fields.
    #[error("Condition for {resource} must serialize to an object of fields")]
    InvalidCondition {
        /// The type name of the resource.
        resource: &'static str,
    },

    /// A successful list response did not carry a `data` array.
    #[error("List response for {resource} has no 'data' array")]
    MalformedListResponse {
        /// The type name of the resource.
        resource: &'static str,
    },
}

/// Accumulated field-level errors on a record.
///
/// Keys are attribute names (or `Error<status>` for API failures), values are
/// the messages recorded for that key in insertion order.
///
/// # Example
///
/// ```rust
/// use shasta::rest::ResourceErrors;
///
/// let mut errors = ResourceErrors::new();
/// assert!(!errors.has_errors());
///
/// errors.add("email", "is not a valid email address.");
/// errors.add("email", "is too long.");
/// errors.add("birth_date", "must be a date in YYYY-MM-DD format.");
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first("email"), Some("is not a valid email address."));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResourceErrors(BTreeMap<String, Vec<String>>);

impl ResourceErrors {
    /// Creates an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Records a message for an attribute.
    pub fn add(&mut self, attribute: impl Into<String>, message: impl Into<String>) {
        self.0
            .entry(attribute.into())
            .or_default()
            .push(message.into());
    }

    /// Returns `true` if any error has been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    /// Returns `true` if the attribute has at least one error.
    #[must_use]
    pub fn contains(&self, attribute: &str) -> bool {
        self.0.contains_key(attribute)
    }

    /// Returns the number of attributes carrying errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no error has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns all messages for an attribute.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&[String]> {
        self.0.get(attribute).map(Vec::as_slice)
    }

    /// Returns the first message for an attribute.
    #[must_use]
    pub fn first(&self, attribute: &str) -> Option<&str> {
        self.0
            .get(attribute)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// Iterates over attributes and their messages in attribute order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(attribute, messages)| (attribute.as_str(), messages.as_slice()))
    }

    /// Appends every message of `other`.
    pub fn merge(&mut self, other: Self) {
        for (attribute, messages) in other.0 {
            self.0.entry(attribute).or_default().extend(messages);
        }
    }

    /// Removes every recorded error.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Moves the `Error<status>` entries out of this set.
    ///
    /// Attribute errors stay behind.
    #[must_use]
    pub fn take_api_errors(&mut self) -> Self {
        let (api, attributes) = std::mem::take(&mut self.0)
            .into_iter()
            .partition(|(key, _)| is_api_error_key(key));
        self.0 = attributes;
        Self(api)
    }
}

fn is_api_error_key(key: &str) -> bool {
    key.strip_prefix("Error")
        .is_some_and(|code| !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()))
}

impl IntoIterator for ResourceErrors {
    type Item = (String, Vec<String>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
