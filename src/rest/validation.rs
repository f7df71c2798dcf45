//! Attribute validators.
//!
//! Validators are plain functions returning `Result<(), String>`. An unset
//! value always passes; presence is the job of [`required`]. [`Rules`]
//! collects outcomes per attribute and keeps only the first failure for each
//! attribute, so a record reports at most one error per invalid field.
//!
//! # Example
//!
//! ```rust
//! use shasta::rest::validation::{self, Rules};
//!
//! let email = Some("not-an-email");
//! let birth_date: Option<&str> = None;
//!
//! let errors = Rules::new()
//!     .check("email", validation::required(email))
//!     .check("email", validation::email(email))
//!     .check("birth_date", validation::date(birth_date))
//!     .into_errors();
//!
//! assert_eq!(errors.len(), 1);
//! assert!(errors.contains("email"));
//! ```

use base64::Engine;
use chrono::NaiveDate;

use crate::clients::Transport;
use crate::rest::{Record, ResourceError, ResourceErrors, ShastaResource};

/// Error key recorded when the API answers 404.
const NOT_FOUND_KEY: &str = "Error404";

/// Collects validator outcomes per attribute.
#[derive(Debug, Default)]
pub struct Rules {
    errors: ResourceErrors,
}

impl Rules {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one validator for `attribute`.
    ///
    /// Ignored when the attribute already failed an earlier check.
    #[must_use]
    pub fn check(mut self, attribute: &str, outcome: Result<(), String>) -> Self {
        if let Err(message) = outcome {
            if !self.errors.contains(attribute) {
                self.errors.add(attribute, message);
            }
        }
        self
    }

    /// Returns the collected errors.
    #[must_use]
    pub fn into_errors(self) -> ResourceErrors {
        self.errors
    }
}

/// Fails when the value is unset or an empty string.
///
/// # Errors
///
/// Returns `"cannot be blank."`.
pub fn required<T: AsRef<str> + ?Sized>(value: Option<&T>) -> Result<(), String> {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() => Ok(()),
        _ => Err("cannot be blank.".to_string()),
    }
}

/// Fails when a structured value is unset.
///
/// # Errors
///
/// Returns `"cannot be blank."`.
pub fn present<T>(value: Option<&T>) -> Result<(), String> {
    value
        .map(|_| ())
        .ok_or_else(|| "cannot be blank.".to_string())
}

/// Checks an email address shape: one `@`, non-empty local part, dotted domain.
///
/// # Errors
///
/// Returns `"is not a valid email address."`.
pub fn email(value: Option<&str>) -> Result<(), String> {
    let Some(value) = value else {
        return Ok(());
    };
    let invalid = || Err("is not a valid email address.".to_string());

    if value.chars().any(char::is_whitespace) {
        return invalid();
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return invalid();
    };
    if local.is_empty()
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || domain.contains("..")
    {
        return invalid();
    }
    Ok(())
}

/// Checks a calendar date in `YYYY-MM-DD` format.
///
/// # Errors
///
/// Returns `"must be a date in YYYY-MM-DD format."`.
pub fn date(value: Option<&str>) -> Result<(), String> {
    let Some(value) = value else {
        return Ok(());
    };
    if value.len() != 10 || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("must be a date in YYYY-MM-DD format.".to_string());
    }
    Ok(())
}

/// Checks membership in a fixed list of values.
///
/// # Errors
///
/// Returns `"is invalid."`.
pub fn one_of(value: Option<&str>, allowed: &[&str]) -> Result<(), String> {
    match value {
        Some(v) if !allowed.contains(&v) => Err("is invalid.".to_string()),
        _ => Ok(()),
    }
}

/// Checks a string of ASCII digits with a length in `min..=max`.
///
/// # Errors
///
/// Returns a message naming the accepted length.
pub fn digits(value: Option<&str>, min: usize, max: usize) -> Result<(), String> {
    let Some(value) = value else {
        return Ok(());
    };
    if value.len() < min || value.len() > max || !value.bytes().all(|b| b.is_ascii_digit()) {
        if min == max {
            return Err(format!("must be {min} digits."));
        }
        return Err(format!("must be {min} to {max} digits."));
    }
    Ok(())
}

/// Checks an integer within `min..=max`.
///
/// # Errors
///
/// Returns a message naming the accepted range.
pub fn in_range(value: Option<u32>, min: u32, max: u32) -> Result<(), String> {
    match value {
        Some(v) if v < min || v > max => Err(format!("must be between {min} and {max}.")),
        _ => Ok(()),
    }
}

/// Checks standard (padded) base64 content.
///
/// # Errors
///
/// Returns `"must be base64 encoded."`.
pub fn base64_content(value: Option<&str>) -> Result<(), String> {
    let Some(value) = value else {
        return Ok(());
    };
    base64::engine::general_purpose::STANDARD
        .decode(value)
        .map(|_| ())
        .map_err(|_| "must be base64 encoded.".to_string())
}

/// Folds the errors of an embedded object into one message.
///
/// Reports the alphabetically first failing inner attribute as
/// `"<attribute> <message>"`; [`ResourceErrors`] keeps attributes sorted.
///
/// # Errors
///
/// Returns the folded message when `errors` is not empty.
pub fn embedded(errors: &ResourceErrors) -> Result<(), String> {
    match errors.iter().next() {
        Some((attribute, messages)) => {
            let message = messages.first().map_or("is invalid.", String::as_str);
            Err(format!("{attribute} {message}"))
        }
        None => Ok(()),
    }
}

/// Checks that a foreign key references an existing `R` on the server.
///
/// Issues one read of the referenced record when `value` is set. A 404
/// answer (or an empty key) records "does not reference" on `attribute`.
/// Any other error answer is kept as-is under its `Error<status>` key, so a
/// remote failure is never reported as invalid input.
///
/// # Errors
///
/// Returns [`ResourceError`] only for transport and hydration faults.
pub async fn exists<R, T>(
    transport: &T,
    attribute: &str,
    value: Option<&str>,
    errors: &mut ResourceErrors,
) -> Result<(), ResourceError>
where
    R: ShastaResource,
    T: Transport,
{
    let Some(id) = value else {
        return Ok(());
    };
    let missing = || format!("does not reference an existing {}.", R::NAME);
    if id.is_empty() {
        errors.add(attribute, missing());
        return Ok(());
    }

    let mut referenced = Record::<R>::with_id(id);
    if referenced.read(transport).await? {
        return Ok(());
    }
    let mut lookup_errors = referenced.errors().clone();
    if lookup_errors.contains(NOT_FOUND_KEY) {
        errors.add(attribute, missing());
    } else {
        errors.merge(lookup_errors.take_api_errors());
    }
    Ok(())
}
