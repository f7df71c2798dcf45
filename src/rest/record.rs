//! Records: resources bound to the CRUD operations of the Shasta API.
//!
//! [`Record<R>`] wraps a resource value together with the field-level errors
//! of the last operation. It derefs to the resource, so attributes are read
//! and assigned directly on the record.
//!
//! Every operation takes the transport explicitly and sends at most one
//! request to the resource endpoint, plus any existence checks a write
//! validation requires.
//!
//! # Example
//!
//! ```rust,ignore
//! use shasta::rest::{Record, resources::Customer};
//!
//! let mut customer = Record::new(Customer::default());
//! customer.email = Some("ada@example.com".to_string());
//!
//! if customer.save(&client).await? {
//!     println!("Created customer {:?}", customer.id());
//! } else {
//!     println!("Refused: {:?}", customer.errors());
//! }
//!
//! let found = Record::<Customer>::find_one(&client, "cus_123").await?;
//! ```

use std::ops::{Deref, DerefMut};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::{DataType, HttpError, HttpRequest, HttpResponse, Transport};
use crate::rest::resource::{condition_body, safe_payload};
use crate::rest::{
    build_path, FindCondition, ResourceError, ResourceErrors, ResourceOperation, Scenario,
    ShastaResource,
};

/// A resource together with the errors of its last operation.
///
/// Operations return `Ok(false)` for domain failures (invalid input, missing
/// id, non-2xx answer) and leave the details in [`errors`](Self::errors).
/// `Err` is reserved for faults. Each operation starts by clearing the
/// errors of the previous one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record<R> {
    resource: R,
    errors: ResourceErrors,
}

impl<R: ShastaResource> Record<R> {
    /// Wraps a resource value.
    #[must_use]
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            errors: ResourceErrors::new(),
        }
    }

    /// Creates an empty record addressing the given id.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        let mut resource = R::default();
        resource.base_mut().id = Some(id.into());
        Self::new(resource)
    }

    /// Returns the errors recorded by the last operation.
    #[must_use]
    pub const fn errors(&self) -> &ResourceErrors {
        &self.errors
    }

    /// Returns `true` if the last operation recorded errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    /// Records an error on an attribute.
    pub fn add_error(&mut self, attribute: impl Into<String>, message: impl Into<String>) {
        self.errors.add(attribute, message);
    }

    /// Returns the wrapped resource.
    #[must_use]
    pub const fn resource(&self) -> &R {
        &self.resource
    }

    /// Consumes the record and returns the resource.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.resource
    }

    /// Returns the record id, `None` until the record has been persisted.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.resource.base().id.as_deref()
    }

    /// Returns the primary key value.
    #[must_use]
    pub fn primary_key(&self) -> Option<&str> {
        self.id()
    }

    /// Returns the primary key as a `{"id": <id>}` map.
    #[must_use]
    pub fn primary_key_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for key in R::primary_key() {
            let value = self.id().map_or(Value::Null, |id| Value::String(id.to_string()));
            map.insert((*key).to_string(), value);
        }
        map
    }

    /// Creates the record when it has no id, updates it otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport and serialization faults.
    pub async fn save<T: Transport>(&mut self, transport: &T) -> Result<bool, ResourceError> {
        if self.id().is_none() {
            self.insert(transport).await
        } else {
            self.update(transport).await
        }
    }

    /// Validates under the `Create` scenario and POSTs the record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport and serialization faults.
    pub async fn insert<T: Transport>(&mut self, transport: &T) -> Result<bool, ResourceError> {
        self.insert_with_validation(transport, true).await
    }

    /// POSTs the create-safe attributes, validating first when `validate`.
    ///
    /// On success the record is hydrated from the response, which assigns
    /// the server-side `id`, `created_at` and `project_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport and serialization faults.
    pub async fn insert_with_validation<T: Transport>(
        &mut self,
        transport: &T,
        validate: bool,
    ) -> Result<bool, ResourceError> {
        self.errors.clear();
        if validate && !self.run_validation(transport, Scenario::Create).await? {
            return Ok(false);
        }
        self.write(transport, ResourceOperation::Create, Scenario::Create)
            .await
    }

    /// Validates under the `Default` scenario and PATCHes the record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport and serialization faults.
    pub async fn update<T: Transport>(&mut self, transport: &T) -> Result<bool, ResourceError> {
        self.update_with_validation(transport, true).await
    }

    /// PATCHes the writable attributes, validating first when `validate`.
    ///
    /// Fails without a request when the record has no id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport and serialization faults.
    pub async fn update_with_validation<T: Transport>(
        &mut self,
        transport: &T,
        validate: bool,
    ) -> Result<bool, ResourceError> {
        self.errors.clear();
        if !self.require_id(ResourceOperation::Update) {
            return Ok(false);
        }
        if validate && !self.run_validation(transport, Scenario::Default).await? {
            return Ok(false);
        }
        self.write(transport, ResourceOperation::Update, Scenario::Default)
            .await
    }

    /// Reloads the record from the API.
    ///
    /// Fails without a request when the record has no id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport and hydration faults.
    pub async fn read<T: Transport>(&mut self, transport: &T) -> Result<bool, ResourceError> {
        self.errors.clear();
        if !self.require_id(ResourceOperation::Read) {
            return Ok(false);
        }
        let request = HttpRequest::builder(
            ResourceOperation::Read.http_method(),
            build_path(R::PLURAL, self.id()),
        )
        .build()
        .map_err(HttpError::from)?;

        let response = transport.send(request).await?;
        self.load_attributes(&response)
    }

    /// Finds a single record.
    ///
    /// Accepts an id (`&str`/`String`), an attribute map, `None`, or a
    /// [`FindCondition`]. Returns `None` when the lookup fails.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport and hydration faults.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let card = Record::<Card>::find_one(&client, "card_123").await?;
    /// let first = Record::<Card>::find_one(&client, FindCondition::First).await?;
    /// ```
    pub async fn find_one<T: Transport>(
        transport: &T,
        condition: impl Into<FindCondition>,
    ) -> Result<Option<Self>, ResourceError> {
        let mut record = match condition.into() {
            FindCondition::First => {
                let first = Self::find_all(transport, &()).await?.into_iter().next();
                return Ok(first.filter(|record| !record.has_errors()));
            }
            FindCondition::Id(id) => Self::with_id(id),
            FindCondition::Attributes(attributes) => {
                let mut record = Self::new(R::default());
                record.assign(&Value::Object(attributes), Scenario::Load)?;
                record
            }
        };

        if record.read(transport).await? {
            Ok(Some(record))
        } else {
            Ok(None)
        }
    }

    /// Lists records matching `condition`.
    ///
    /// The condition must serialize to an object. It is sent url-encoded, with
    /// nested values under bracketed keys (`created_at[gte]=...`).
    ///
    /// A non-2xx answer yields a single empty record carrying the error.
    /// Use [`try_find_all`](Self::try_find_all) to get the failure as a
    /// separate value instead.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport faults, hydration faults,
    /// conditions that are not objects, and successful responses without a
    /// `data` array.
    pub async fn find_all<T, P>(transport: &T, condition: &P) -> Result<Vec<Self>, ResourceError>
    where
        T: Transport,
        P: Serialize + ?Sized,
    {
        match Self::try_find_all(transport, condition).await? {
            Ok(records) => Ok(records),
            Err(errors) => {
                let mut sentinel = Self::new(R::default());
                sentinel.errors = errors;
                Ok(vec![sentinel])
            }
        }
    }

    /// Lists records matching `condition`, returning API failures as `Err`.
    ///
    /// # Errors
    ///
    /// The outer `Result` carries faults as in [`find_all`](Self::find_all).
    /// The inner one carries the errors of a non-2xx answer.
    pub async fn try_find_all<T, P>(
        transport: &T,
        condition: &P,
    ) -> Result<Result<Vec<Self>, ResourceErrors>, ResourceError>
    where
        T: Transport,
        P: Serialize + ?Sized,
    {
        let mut builder =
            HttpRequest::builder(ResourceOperation::FindAll.http_method(), R::PLURAL);
        if let Some(body) = condition_body(R::NAME, condition)? {
            builder = builder.body(body).body_type(DataType::UrlEncoded);
        }
        let request = builder.build().map_err(HttpError::from)?;

        let response = transport.send(request).await?;
        if !response.is_ok() {
            let mut errors = ResourceErrors::new();
            errors.add(api_error_key(&response), response.body.to_string());
            return Ok(Err(errors));
        }

        let items = response
            .body
            .get("data")
            .and_then(Value::as_array)
            .ok_or(ResourceError::MalformedListResponse { resource: R::NAME })?;

        let mut records = Vec::with_capacity(items.len());
        for item in items {
            let mut record = Self::new(R::default());
            record.assign(item, Scenario::Load)?;
            records.push(record);
        }
        Ok(Ok(records))
    }

    /// Hydrates the record from an API response.
    ///
    /// A non-2xx response records its body under `Error<status>` and returns
    /// `false`. A 2xx response assigns every attribute it carries under the
    /// `Load` scenario, without validation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Hydration`] when the payload does not fit the
    /// resource type.
    pub fn load_attributes(&mut self, response: &HttpResponse) -> Result<bool, ResourceError> {
        if !response.is_ok() {
            self.errors
                .add(api_error_key(response), response.body.to_string());
            return Ok(false);
        }
        self.assign(&response.body, Scenario::Load)?;
        Ok(true)
    }

    /// Overlays the attributes safe in `scenario` onto the resource.
    ///
    /// A payload that is not a JSON object is a hydration fault.
    fn assign(&mut self, attributes: &Value, scenario: Scenario) -> Result<(), ResourceError> {
        let incoming: Map<String, Value> = serde_json::from_value(attributes.clone())
            .map_err(|source| ResourceError::Hydration {
                resource: R::NAME,
                source,
            })?;

        let mut current =
            serde_json::to_value(&self.resource).map_err(|source| ResourceError::Serialization {
                resource: R::NAME,
                source,
            })?;

        let safe = R::safe_attributes(scenario);
        if let Value::Object(map) = &mut current {
            for (key, value) in incoming {
                if safe.contains(&key.as_str()) {
                    map.insert(key, value);
                }
            }
        }

        self.resource = serde_json::from_value(current).map_err(|source| {
            ResourceError::Hydration {
                resource: R::NAME,
                source,
            }
        })?;
        Ok(())
    }

    /// Records the missing-id error for `operation` when the id is unset.
    fn require_id(&mut self, operation: ResourceOperation) -> bool {
        if self.id().is_some() {
            return true;
        }
        self.errors.add(
            "id",
            format!("Id is required for {} operation.", operation.as_str()),
        );
        false
    }

    /// Runs local rules, then existence checks when the local rules passed.
    async fn run_validation<T: Transport>(
        &mut self,
        transport: &T,
        scenario: Scenario,
    ) -> Result<bool, ResourceError> {
        let mut errors = self.resource.validate(scenario);
        if !errors.has_errors() {
            errors = self.resource.validate_relations(transport).await?;
        }
        if errors.has_errors() {
            tracing::info!(
                resource = R::NAME,
                scenario = %scenario,
                errors = ?errors,
                "Validation failed, request not sent"
            );
            self.errors.merge(errors);
            return Ok(false);
        }
        Ok(true)
    }

    /// Sends the scenario-safe payload for a create or update and hydrates.
    async fn write<T: Transport>(
        &mut self,
        transport: &T,
        operation: ResourceOperation,
        scenario: Scenario,
    ) -> Result<bool, ResourceError> {
        let payload = safe_payload(&self.resource, scenario)?;
        let id = if operation.requires_id() {
            self.id()
        } else {
            None
        };
        let request = HttpRequest::builder(operation.http_method(), build_path(R::PLURAL, id))
            .body(Value::Object(payload))
            .body_type(DataType::Json)
            .build()
            .map_err(HttpError::from)?;

        let response = transport.send(request).await?;
        self.load_attributes(&response)
    }
}

fn api_error_key(response: &HttpResponse) -> String {
    format!("Error{}", response.code)
}

/// Provides transparent read access to the resource.
impl<R> Deref for Record<R> {
    type Target = R;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

/// Provides transparent mutable access to the resource.
impl<R> DerefMut for Record<R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.resource
    }
}

impl<R: ShastaResource> From<R> for Record<R> {
    fn from(resource: R) -> Self {
        Self::new(resource)
    }
}

// Verify Record is Send + Sync when R is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Record<crate::rest::resources::Customer>>();
};
