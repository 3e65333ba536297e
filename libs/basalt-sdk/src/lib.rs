#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Basalt client SDK core.
//!
//! This crate provides the data model the SDK's request layer consumes:
//!
//! - [`Profile`] - User-like record partitioned into four visibility scopes
//! - [`Visibility`] - The closed scope enumeration with its reserved wire keys
//! - [`ProfileError`] - Scope lookup/decoding failures
//! - [`Filter`] and friends - Re-exported query builder from `basalt-query`
//!
//! ## Usage
//!
//! ```
//! use basalt_sdk::{Filter, Profile, Visibility, WhereArg};
//!
//! let mut profile = Profile::new("bob");
//! profile
//!     .scope_mut(Visibility::Friends)
//!     .insert("nickname".to_owned(), serde_json::json!("bobby"));
//!
//! // Query profiles on the server side.
//! let filter = Filter::where_clause("visibleByFriends.nickname = ?",
//!     [WhereArg::from("bobby")]);
//! assert!(filter.to_params().is_ok());
//! ```

pub mod errors;
pub mod models;

// Re-export main types at crate root
pub use errors::ProfileError;
pub use models::{Profile, ScopeDoc, USERNAME_KEY, Visibility};

// The query builder travels with the SDK as one import surface.
pub use basalt_query::{
    Filter, FilterError, Paging, QueryParam, SortDirection, WhereArg, to_query_string, wire,
};
