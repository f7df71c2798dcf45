//! Operation-to-endpoint mapping for resources.
//!
//! Every Shasta resource lives under one collection path (e.g. `customers`)
//! and exposes the same four operations:
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | [`ResourceOperation::Create`] | POST | `<collection>` |
//! | [`ResourceOperation::FindAll`] | GET | `<collection>` |
//! | [`ResourceOperation::Read`] | GET | `<collection>/<id>` |
//! | [`ResourceOperation::Update`] | PATCH | `<collection>/<id>` |
//!
//! # Example
//!
//! ```rust
//! use shasta::rest::{build_path, ResourceOperation};
//! use shasta::HttpMethod;
//!
//! assert_eq!(ResourceOperation::Update.http_method(), HttpMethod::Patch);
//! assert_eq!(build_path("cards", Some("card 1")), "cards/card%201");
//! assert_eq!(build_path("cards", None), "cards");
//! ```

use crate::clients::HttpMethod;

/// Operations that can be performed on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Create a record (POST /resources).
    Create,
    /// Read a single record by id (GET /resources/{id}).
    Read,
    /// Partially update a record (PATCH /resources/{id}).
    Update,
    /// List records matching a condition (GET /resources).
    FindAll,
}

impl ResourceOperation {
    /// Returns the HTTP method for this operation.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::Read | Self::FindAll => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Patch,
        }
    }

    /// Returns `true` if the operation addresses a single record by id.
    #[must_use]
    pub const fn requires_id(&self) -> bool {
        matches!(self, Self::Read | Self::Update)
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::FindAll => "find_all",
        }
    }
}

/// Builds a collection path, or an item path when an id is given.
///
/// The id is percent-encoded so that it always forms exactly one path segment.
#[must_use]
pub fn build_path(collection: &str, id: Option<&str>) -> String {
    id.map_or_else(
        || collection.to_string(),
        |id| format!("{collection}/{}", urlencoding::encode(id)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_http_methods() {
        assert_eq!(ResourceOperation::Create.http_method(), HttpMethod::Post);
        assert_eq!(ResourceOperation::Read.http_method(), HttpMethod::Get);
        assert_eq!(ResourceOperation::Update.http_method(), HttpMethod::Patch);
        assert_eq!(ResourceOperation::FindAll.http_method(), HttpMethod::Get);
    }

    #[test]
    fn test_operations_requiring_id() {
        assert!(ResourceOperation::Read.requires_id());
        assert!(ResourceOperation::Update.requires_id());
        assert!(!ResourceOperation::Create.requires_id());
        assert!(!ResourceOperation::FindAll.requires_id());
    }

    #[test]
    fn test_build_path_for_collection_and_item() {
        assert_eq!(build_path("customers", None), "customers");
        assert_eq!(
            build_path("customers", Some("0b5c3e8a-1f2d")),
            "customers/0b5c3e8a-1f2d"
        );
    }

    #[test]
    fn test_build_path_encodes_separators_in_id() {
        assert_eq!(build_path("files", Some("a/b?c")), "files/a%2Fb%3Fc");
    }
}
