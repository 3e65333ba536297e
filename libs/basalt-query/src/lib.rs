#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Query filter builder for the Basalt client SDK.
//!
//! This crate provides the client-side representation of a server query:
//!
//! - [`Filter`] - Fluent builder for where/order/paging restrictions
//! - [`WhereArg`] - Typed bound-parameter values
//! - [`Paging`] - Page number / page size value object
//! - [`QueryParam`] / [`wire`] - Compiled wire parameters and reserved names
//! - [`FilterError`] - Compile-time validation failures
//!
//! ## Usage
//!
//! ```
//! use basalt_query::{Filter, WhereArg};
//!
//! let filter = Filter::where_clause("name = ?", [WhereArg::from("bob")])
//!     .set_order_by("age ASC")
//!     .set_paging(1, 20);
//!
//! // The request layer appends the compiled pairs in emission order.
//! let params = filter.to_params()?.unwrap_or_default();
//! assert_eq!(params.first().map(basalt_query::QueryParam::key), Some("where"));
//! # Ok::<(), basalt_query::FilterError>(())
//! ```

pub mod error;
pub mod filter;
pub mod paging;
pub mod param;

pub use error::FilterError;
pub use filter::{Filter, SortDirection, WhereArg};
pub use paging::Paging;
pub use param::{QueryParam, to_query_string, wire};
