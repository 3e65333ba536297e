//! Compiled wire parameters and their reserved names.

use crate::error::FilterError;

/// Reserved request-parameter names.
///
/// These names are part of the wire contract with the backend and are shared
/// between the filter compiler and the request layer, ensuring a single
/// source of truth. They must not be altered.
pub mod wire {
    /// The where-clause predicate text.
    pub const WHERE: &str = "where";

    /// One bound where-clause argument. Repeated, order-preserving.
    pub const PARAMS: &str = "params";

    /// The sort expression (`orderBy` on the wire).
    pub const ORDER_BY: &str = "orderBy";

    /// The page number.
    pub const PAGE: &str = "page";

    /// The page size (`recordsPerPage` on the wire).
    pub const RECORDS_PER_PAGE: &str = "recordsPerPage";
}

/// One compiled key/value request parameter.
///
/// Keys are always drawn from the reserved names in [`wire`]; values are the
/// stringified filter state. The request layer appends these pairs as query
/// parameters in exactly the order they were emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryParam {
    key: &'static str,
    value: String,
}

impl QueryParam {
    /// Create a parameter pair.
    #[must_use]
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    /// The reserved parameter name.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// The stringified parameter value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Encode compiled parameters as an `application/x-www-form-urlencoded`
/// query string, preserving emission order.
///
/// # Errors
///
/// Returns [`FilterError::Encode`] if the serializer rejects a value.
pub fn to_query_string(params: &[QueryParam]) -> Result<String, FilterError> {
    let pairs: Vec<(&str, &str)> = params.iter().map(|p| (p.key(), p.value())).collect();
    Ok(serde_urlencoded::to_string(pairs)?)
}
