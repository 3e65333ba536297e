//! Public error types for `basalt-query`.

use thiserror::Error;

/// Errors produced while compiling or encoding a [`Filter`](crate::Filter).
///
/// Both variants are caller errors: nothing is retried internally, the
/// caller repairs the filter (or its parameters) and compiles again.
#[derive(Error, Debug)]
pub enum FilterError {
    /// Paging was configured without a sort order.
    ///
    /// The backend requires a deterministic ordering for stable pagination,
    /// so a filter with a page/records pair but no `orderBy` expression is
    /// rejected at compile time.
    #[error("paging requires order by")]
    PagingWithoutOrder,

    /// Compiled parameters could not be encoded as a query string.
    #[error("failed to encode query parameters: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}
