//! The resource trait and the attributes every resource shares.
//!
//! A resource is a serde struct that flattens [`ResourceBase`] and implements
//! [`ShastaResource`]. The trait is declarative: it names the collection path
//! and the attribute lists per [`Scenario`], and supplies validation rules.
//! The CRUD operations themselves live on [`Record`](crate::rest::Record).
//!
//! # Implementing a Resource
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use shasta::rest::{validation::{self, Rules}, ResourceBase, ResourceErrors, Scenario, ShastaResource};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
//! pub struct Wallet {
//!     #[serde(flatten)]
//!     pub base: ResourceBase,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub currency: Option<String>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub balance: Option<i64>,
//! }
//!
//! impl ShastaResource for Wallet {
//!     const NAME: &'static str = "Wallet";
//!     const PLURAL: &'static str = "wallets";
//!     const ATTRIBUTES: &'static [&'static str] = &[];
//!     const CREATE_ONLY: &'static [&'static str] = &["currency"];
//!     const READ_ONLY: &'static [&'static str] = &["balance"];
//!
//!     fn base(&self) -> &ResourceBase {
//!         &self.base
//!     }
//!
//!     fn base_mut(&mut self) -> &mut ResourceBase {
//!         &mut self.base
//!     }
//!
//!     fn validate(&self, scenario: Scenario) -> ResourceErrors {
//!         let mut rules = Rules::new();
//!         if scenario == Scenario::Create {
//!             rules = rules.check("currency", validation::required(self.currency.as_deref()));
//!         }
//!         rules.into_errors()
//!     }
//! }
//!
//! assert_eq!(Wallet::safe_attributes(Scenario::Create), vec!["meta", "currency"]);
//! ```

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::Transport;
use crate::rest::{ResourceError, ResourceErrors, Scenario};

/// Attributes every record carries besides its own fields.
const BASE_ATTRIBUTES: &[&str] = &["id", "created_at", "project_id", "meta"];

/// Attributes shared by every Shasta resource.
///
/// `id`, `created_at` and `project_id` are assigned by the server and are
/// never sent in a write. `meta` is an open mapping the caller may set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResourceBase {
    /// Primary key; `None` until the record has been persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Server creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Owning project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Free-form metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

/// A Shasta REST resource.
///
/// # Associated Constants
///
/// - `NAME`: The singular resource name, used in messages and logs
/// - `PLURAL`: The collection path (e.g. `"customers"`)
/// - `ATTRIBUTES`: Attributes writable on create and update
/// - `CREATE_ONLY`: Attributes writable on create only
/// - `READ_ONLY`: Attributes only ever assigned by the server
#[allow(async_fn_in_trait)]
pub trait ShastaResource: Serialize + DeserializeOwned + Default + Clone {
    /// The singular name of the resource (e.g. "Customer").
    const NAME: &'static str;

    /// The collection path segment (e.g. "customers").
    const PLURAL: &'static str;

    /// Attributes the caller may send on create and update.
    const ATTRIBUTES: &'static [&'static str];

    /// Attributes the caller may send on create only.
    const CREATE_ONLY: &'static [&'static str] = &[];

    /// Attributes assigned by the server and never sent.
    const READ_ONLY: &'static [&'static str] = &[];

    /// Returns the shared attributes.
    fn base(&self) -> &ResourceBase;

    /// Returns the shared attributes mutably.
    fn base_mut(&mut self) -> &mut ResourceBase;

    /// Runs the local validation rules for `scenario`.
    ///
    /// Must not perform I/O. The default accepts everything.
    fn validate(&self, scenario: Scenario) -> ResourceErrors {
        let _ = scenario;
        ResourceErrors::new()
    }

    /// Checks that foreign keys reference existing records.
    ///
    /// Only called after [`validate`](Self::validate) passed. The default
    /// checks nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport faults.
    async fn validate_relations<T: Transport>(
        &self,
        transport: &T,
    ) -> Result<ResourceErrors, ResourceError> {
        let _ = transport;
        Ok(ResourceErrors::new())
    }

    /// Returns the attributes that are safe to assign in `scenario`.
    ///
    /// For `Create` and `Default` these are the attributes sent to the API.
    /// `Load` covers every declared attribute.
    #[must_use]
    fn safe_attributes(scenario: Scenario) -> Vec<&'static str> {
        let mut attributes = Vec::new();
        match scenario {
            Scenario::Load => {
                attributes.extend_from_slice(BASE_ATTRIBUTES);
                attributes.extend_from_slice(Self::ATTRIBUTES);
                attributes.extend_from_slice(Self::CREATE_ONLY);
                attributes.extend_from_slice(Self::READ_ONLY);
            }
            Scenario::Create => {
                attributes.push("meta");
                attributes.extend_from_slice(Self::ATTRIBUTES);
                attributes.extend_from_slice(Self::CREATE_ONLY);
            }
            Scenario::Default => {
                attributes.push("meta");
                attributes.extend_from_slice(Self::ATTRIBUTES);
            }
        }
        attributes
    }

    /// Returns the primary key attribute names.
    #[must_use]
    fn primary_key() -> &'static [&'static str] {
        &["id"]
    }
}

/// Selects what [`Record::find_one`](crate::rest::Record::find_one) looks up.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FindCondition {
    /// The first record of an unfiltered listing.
    #[default]
    First,
    /// The record with this id.
    Id(String),
    /// A record built from these attributes, then read by its id.
    Attributes(Map<String, Value>),
}

impl From<&str> for FindCondition {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for FindCondition {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl From<Map<String, Value>> for FindCondition {
    fn from(attributes: Map<String, Value>) -> Self {
        Self::Attributes(attributes)
    }
}

impl<T: Into<Self>> From<Option<T>> for FindCondition {
    fn from(condition: Option<T>) -> Self {
        condition.map_or(Self::First, Into::into)
    }
}

/// Serializes the attributes of `resource` that are safe in `scenario` and set.
pub(crate) fn safe_payload<R: ShastaResource>(
    resource: &R,
    scenario: Scenario,
) -> Result<Map<String, Value>, ResourceError> {
    let value = serde_json::to_value(resource).map_err(|source| ResourceError::Serialization {
        resource: R::NAME,
        source,
    })?;

    let safe = R::safe_attributes(scenario);
    let mut payload = Map::new();
    if let Value::Object(map) = value {
        for (key, val) in map {
            if !val.is_null() && safe.contains(&key.as_str()) {
                payload.insert(key, val);
            }
        }
    }
    Ok(payload)
}

/// Serializes a listing condition into a url-encoded body.
///
/// `null` and empty objects mean "no condition". Anything other than an
/// object is rejected so a filter is never dropped.
pub(crate) fn condition_body<P: Serialize + ?Sized>(
    resource: &'static str,
    condition: &P,
) -> Result<Option<Value>, ResourceError> {
    let value = serde_json::to_value(condition)
        .map_err(|source| ResourceError::Serialization { resource, source })?;

    match value {
        Value::Null => Ok(None),
        Value::Object(map) if map.is_empty() => Ok(None),
        Value::Object(map) => Ok(Some(Value::Object(map))),
        _ => Err(ResourceError::InvalidCondition { resource }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
    struct MockTransfer {
        #[serde(flatten)]
        base: ResourceBase,
        #[serde(skip_serializing_if = "Option::is_none")]
        amount: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<String>,
    }

    impl ShastaResource for MockTransfer {
        const NAME: &'static str = "Transfer";
        const PLURAL: &'static str = "transfers";
        const ATTRIBUTES: &'static [&'static str] = &["description"];
        const CREATE_ONLY: &'static [&'static str] = &["amount"];
        const READ_ONLY: &'static [&'static str] = &["status"];

        fn base(&self) -> &ResourceBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut ResourceBase {
            &mut self.base
        }
    }

    fn persisted_transfer() -> MockTransfer {
        MockTransfer {
            base: ResourceBase {
                id: Some("tr_1".into()),
                created_at: Some("2020-01-01T00:00:00Z".into()),
                project_id: Some("prj_1".into()),
                meta: Some(json!({"order": 7}).as_object().unwrap().clone()),
            },
            amount: Some(1500),
            description: Some("rent".into()),
            status: Some("pending".into()),
        }
    }

    #[test]
    fn test_safe_attributes_per_scenario() {
        assert_eq!(
            MockTransfer::safe_attributes(Scenario::Create),
            vec!["meta", "description", "amount"]
        );
        assert_eq!(
            MockTransfer::safe_attributes(Scenario::Default),
            vec!["meta", "description"]
        );
        let load = MockTransfer::safe_attributes(Scenario::Load);
        for attribute in ["id", "created_at", "project_id", "meta", "amount", "status"] {
            assert!(load.contains(&attribute));
        }
    }

    #[test]
    fn test_safe_payload_excludes_server_and_unset_fields() {
        let payload = safe_payload(&persisted_transfer(), Scenario::Create).unwrap();
        assert_eq!(
            Value::Object(payload),
            json!({"meta": {"order": 7}, "description": "rent", "amount": 1500})
        );

        let payload = safe_payload(&persisted_transfer(), Scenario::Default).unwrap();
        assert!(!payload.contains_key("amount"));
        assert!(!payload.contains_key("id"));

        let payload = safe_payload(&MockTransfer::default(), Scenario::Create).unwrap();
        assert!(payload.is_empty());
    }

    #[test]
    fn test_base_fields_flatten_into_resource_json() {
        let parsed: MockTransfer = serde_json::from_value(json!({
            "id": "tr_9",
            "created_at": "2021-05-01T10:00:00Z",
            "project_id": "prj_1",
            "amount": 10,
            "unknown_field": true
        }))
        .unwrap();

        assert_eq!(parsed.base.id.as_deref(), Some("tr_9"));
        assert_eq!(parsed.amount, Some(10));
        assert!(parsed.base.meta.is_none());
    }

    #[test]
    fn test_find_condition_conversions() {
        assert_eq!(FindCondition::from("cus_1"), FindCondition::Id("cus_1".into()));
        assert_eq!(FindCondition::from(None::<&str>), FindCondition::First);
        assert_eq!(FindCondition::default(), FindCondition::First);

        let map = json!({"id": "cus_1"}).as_object().unwrap().clone();
        assert_eq!(
            FindCondition::from(map.clone()),
            FindCondition::Attributes(map)
        );
    }

    #[test]
    fn test_condition_body_keeps_nested_filters() {
        let body = condition_body(
            "Transfer",
            &json!({"created_at": {"gte": "2020-01-01"}, "flags": [true, false]}),
        )
        .unwrap();

        assert_eq!(
            body,
            Some(json!({"created_at": {"gte": "2020-01-01"}, "flags": [true, false]}))
        );
    }

    #[test]
    fn test_condition_body_empty_and_invalid() {
        assert_eq!(condition_body("Transfer", &()).unwrap(), None);
        assert_eq!(condition_body("Transfer", &json!({})).unwrap(), None);
        assert!(matches!(
            condition_body("Transfer", &["a", "b"]),
            Err(ResourceError::InvalidCondition { resource: "Transfer" })
        ));
    }

    #[test]
    fn test_primary_key_is_id() {
        assert_eq!(MockTransfer::primary_key(), &["id"]);
    }
}
