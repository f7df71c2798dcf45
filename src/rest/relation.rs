//! Lazy resolution of foreign keys.
//!
//! Resources reference each other by storing an id (e.g. a card's
//! `customer_id`). The reference is resolved on demand with one read of the
//! referenced resource. Nothing is cached: every call goes back to the API,
//! so a changed key always resolves to the record it currently names.

use crate::clients::Transport;
use crate::rest::{Record, ResourceError, ShastaResource};

/// Resolves a foreign key to the record it references.
///
/// Returns `Ok(None)` without a request when the key is unset or empty, and
/// `Ok(None)` when the API does not return the record.
///
/// # Errors
///
/// Returns [`ResourceError`] for transport and hydration faults.
///
/// # Example
///
/// ```rust,ignore
/// use shasta::rest::{relation::has_one, resources::Customer};
///
/// let owner = has_one::<Customer, _>(&client, card.customer_id.as_deref()).await?;
/// ```
pub async fn has_one<R, T>(
    transport: &T,
    foreign_key: Option<&str>,
) -> Result<Option<Record<R>>, ResourceError>
where
    R: ShastaResource,
    T: Transport,
{
    match foreign_key {
        Some(id) if !id.is_empty() => Record::find_one(transport, id).await,
        _ => Ok(None),
    }
}
