//! The query filter builder.
//!
//! A [`Filter`] accumulates the optional restrictions of a list request
//! (where clause + bound parameters, sort order, pagination) and compiles
//! them into the flat ordered parameter list the backend expects. The
//! builder never validates on write; the single invariant (paging requires
//! an order) is checked by [`Filter::to_params`] only.

use std::fmt;

use uuid::Uuid;

use crate::error::FilterError;
use crate::paging::Paging;
use crate::param::{QueryParam, wire};

/// A typed value bound to a where-clause placeholder.
///
/// Arguments are stringified in call order when the clause is set; `Null`
/// renders as the literal string `"null"`, matching what the backend's
/// query engine expects for absent values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum WhereArg {
    /// UUID value (resource IDs, owner IDs, etc.)
    Uuid(Uuid),
    /// String value.
    String(String),
    /// Integer value.
    Int(i64),
    /// Boolean value.
    Bool(bool),
    /// Explicit null.
    Null,
}

impl fmt::Display for WhereArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uuid(u) => write!(f, "{u}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<Uuid> for WhereArg {
    #[inline]
    fn from(u: Uuid) -> Self {
        Self::Uuid(u)
    }
}

impl From<&Uuid> for WhereArg {
    #[inline]
    fn from(u: &Uuid) -> Self {
        Self::Uuid(*u)
    }
}

impl From<String> for WhereArg {
    #[inline]
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for WhereArg {
    #[inline]
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<i64> for WhereArg {
    #[inline]
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for WhereArg {
    #[inline]
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<V: Into<WhereArg>> From<Option<V>> for WhereArg {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Sort direction token for order expressions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Ascending (`ASC`).
    Ascending,
    /// Descending (`DESC`).
    Descending,
}

impl SortDirection {
    /// The wire token appended to the sorted field name.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A query filter describing the server-side restrictions of a list request
/// on collections, users, and files.
///
/// Filters are built through the static factories ([`Filter::where_clause`],
/// [`Filter::sort`], [`Filter::paging`]) or chained setters, then compiled
/// once with [`Filter::to_params`] and handed to the request layer. One
/// owner builds and compiles a filter on one logical thread of control;
/// there is no internal synchronization.
///
/// # Examples
///
/// ```
/// use basalt_query::{Filter, SortDirection};
///
/// let filter = Filter::sort("age", SortDirection::Descending).set_paging(1, 20);
/// let params = filter.to_params()?;
/// assert!(params.is_some());
/// # Ok::<(), basalt_query::FilterError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Filter {
    repr: Repr,
}

/// The unrestricted/configured split is a tagged representation so that the
/// "always compiles to nothing" rule for [`Filter::any`] holds by
/// construction rather than by overridden behavior.
#[derive(Clone, Debug)]
enum Repr {
    Unrestricted,
    Configured(State),
}

#[derive(Clone, Debug, Default)]
struct State {
    where_clause: Option<String>,
    /// Stringified bound arguments, aligned 1:1 with the clause's `?`
    /// placeholders. Replaced together with the clause, never appended.
    params: Vec<String>,
    order_by: Option<String>,
    paging: Option<Paging>,
}

impl State {
    fn param_count(&self) -> usize {
        let mut count = 0;
        if self.where_clause.is_some() {
            count += 1 + self.params.len();
        }
        if self.order_by.is_some() {
            count += 1;
        }
        if self.paging.is_some() {
            count += 2;
        }
        count
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter {
    // ── Factories ───────────────────────────────────────────────────

    /// Create an empty filter with no restrictions configured yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            repr: Repr::Configured(State::default()),
        }
    }

    /// The filter that does not apply any restriction to the request.
    ///
    /// Used as an explicit "fetch everything" marker: it always compiles to
    /// no parameters, and building calls on it are no-ops.
    #[must_use]
    pub fn any() -> Self {
        Self {
            repr: Repr::Unrestricted,
        }
    }

    /// Create a filter that applies the given where condition to the
    /// request.
    ///
    /// The condition may be parameterized with `?` placeholders, filled in
    /// order from `args`. The clause text is passed through to the
    /// backend's query engine verbatim.
    #[must_use]
    pub fn where_clause(
        clause: impl Into<String>,
        args: impl IntoIterator<Item = WhereArg>,
    ) -> Self {
        Self::new().set_where(clause, args)
    }

    /// Create a filter that applies the given sort order to the request.
    #[must_use]
    pub fn sort(field: &str, direction: SortDirection) -> Self {
        Self::new().set_order_by(format!("{field} {direction}"))
    }

    /// Create a filter that applies pagination to the request using the
    /// given order, page number and records per page.
    #[must_use]
    pub fn paging(field: &str, direction: SortDirection, page: u32, records: u32) -> Self {
        Self::sort(field, direction).set_paging(page, records)
    }

    // ── Builders ────────────────────────────────────────────────────

    /// Set the where condition for this filter.
    ///
    /// Replaces any previous clause **and** its bound arguments wholly:
    /// repeated calls never append parameters across calls. Each argument
    /// is stringified in call order.
    #[must_use]
    pub fn set_where(
        mut self,
        clause: impl Into<String>,
        args: impl IntoIterator<Item = WhereArg>,
    ) -> Self {
        if let Repr::Configured(state) = &mut self.repr {
            state.where_clause = Some(clause.into());
            state.params = args.into_iter().map(|a| a.to_string()).collect();
        }
        self
    }

    /// Remove the where condition and its bound arguments entirely.
    #[must_use]
    pub fn clear_where(mut self) -> Self {
        if let Repr::Configured(state) = &mut self.repr {
            state.where_clause = None;
            state.params.clear();
        }
        self
    }

    /// Set the sort expression, overwriting any previous one.
    #[must_use]
    pub fn set_order_by(mut self, name: impl Into<String>) -> Self {
        if let Repr::Configured(state) = &mut self.repr {
            state.order_by = Some(name.into());
        }
        self
    }

    /// Configure pagination for this filter.
    ///
    /// Create-once: the first call wins, and later calls leave an existing
    /// paging descriptor untouched until [`Filter::clear_paging`]. Use
    /// [`Filter::set_paging_with_order`] to refresh the counters.
    #[must_use]
    pub fn set_paging(mut self, page: u32, records: u32) -> Self {
        if let Repr::Configured(state) = &mut self.repr
            && state.paging.is_none()
        {
            state.paging = Some(Paging::new(page, records));
        }
        self
    }

    /// Configure pagination together with its sort expression.
    ///
    /// Unlike [`Filter::set_paging`], this overwrites the order
    /// unconditionally and always refreshes the page/records counters.
    #[must_use]
    pub fn set_paging_with_order(
        mut self,
        order: impl Into<String>,
        page: u32,
        records: u32,
    ) -> Self {
        if let Repr::Configured(state) = &mut self.repr {
            state.order_by = Some(order.into());
            state.paging = Some(Paging::new(page, records));
        }
        self
    }

    /// Remove pagination from this filter.
    #[must_use]
    pub fn clear_paging(mut self) -> Self {
        if let Repr::Configured(state) = &mut self.repr {
            state.paging = None;
        }
        self
    }

    // ── Compilation ─────────────────────────────────────────────────

    /// Returns `true` for the unrestricted filter created by
    /// [`Filter::any`].
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        matches!(self.repr, Repr::Unrestricted)
    }

    /// Compile this filter into its wire parameters.
    ///
    /// Emission order is fixed: `where`, one `params` pair per bound
    /// argument in order, `orderBy`, `page`, `recordsPerPage`. Returns
    /// `Ok(None)` when no restriction is configured, and always for the
    /// unrestricted filter.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::PagingWithoutOrder`] if paging is configured
    /// without a sort expression. The check runs only here, so paging may
    /// legally be set before the order as long as both are present when
    /// compiling.
    pub fn to_params(&self) -> Result<Option<Vec<QueryParam>>, FilterError> {
        let state = match &self.repr {
            Repr::Unrestricted => return Ok(None),
            Repr::Configured(state) => state,
        };
        if state.paging.is_some() && state.order_by.is_none() {
            return Err(FilterError::PagingWithoutOrder);
        }

        let mut out = Vec::with_capacity(state.param_count());
        if let Some(clause) = &state.where_clause {
            out.push(QueryParam::new(wire::WHERE, clause.clone()));
            for arg in &state.params {
                out.push(QueryParam::new(wire::PARAMS, arg.clone()));
            }
        }
        if let Some(order) = &state.order_by {
            out.push(QueryParam::new(wire::ORDER_BY, order.clone()));
        }
        if let Some(paging) = state.paging {
            out.push(QueryParam::new(wire::PAGE, paging.page().to_string()));
            out.push(QueryParam::new(
                wire::RECORDS_PER_PAGE,
                paging.records().to_string(),
            ));
        }

        if out.is_empty() {
            return Ok(None);
        }
        tracing::debug!(params = out.len(), "compiled filter");
        Ok(Some(out))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn pairs(filter: &Filter) -> Vec<(String, String)> {
        filter
            .to_params()
            .unwrap()
            .unwrap_or_default()
            .into_iter()
            .map(|p| (p.key().to_owned(), p.value().to_owned()))
            .collect()
    }

    #[test]
    fn where_args_stringify_in_call_order() {
        let filter = Filter::where_clause(
            "name = ? and age > ? and active = ?",
            [
                WhereArg::from("bob"),
                WhereArg::from(18i64),
                WhereArg::from(true),
            ],
        );
        assert_eq!(
            pairs(&filter),
            [
                ("where".to_owned(), "name = ? and age > ? and active = ?".to_owned()),
                ("params".to_owned(), "bob".to_owned()),
                ("params".to_owned(), "18".to_owned()),
                ("params".to_owned(), "true".to_owned()),
            ]
        );
    }

    #[test]
    fn null_arg_renders_as_literal_null() {
        assert_eq!(WhereArg::Null.to_string(), "null");
        assert_eq!(WhereArg::from(Option::<&str>::None).to_string(), "null");
    }

    #[test]
    fn set_where_replaces_clause_and_params() {
        let filter = Filter::where_clause("name = ?", [WhereArg::from("bob")])
            .set_where("age > ?", [WhereArg::from(21i64)]);
        assert_eq!(
            pairs(&filter),
            [
                ("where".to_owned(), "age > ?".to_owned()),
                ("params".to_owned(), "21".to_owned()),
            ]
        );
    }

    #[test]
    fn clear_where_drops_clause_and_params() {
        let filter = Filter::where_clause("name = ?", [WhereArg::from("bob")]).clear_where();
        assert_eq!(filter.to_params().unwrap(), None);
    }

    #[test]
    fn set_paging_is_create_once() {
        let filter = Filter::sort("age", SortDirection::Ascending)
            .set_paging(1, 20)
            .set_paging(5, 50);
        assert_eq!(
            pairs(&filter),
            [
                ("orderBy".to_owned(), "age ASC".to_owned()),
                ("page".to_owned(), "1".to_owned()),
                ("recordsPerPage".to_owned(), "20".to_owned()),
            ]
        );
    }

    #[test]
    fn set_paging_with_order_always_overwrites() {
        let filter = Filter::new()
            .set_paging_with_order("age ASC", 1, 20)
            .set_paging_with_order("name DESC", 5, 50);
        assert_eq!(
            pairs(&filter),
            [
                ("orderBy".to_owned(), "name DESC".to_owned()),
                ("page".to_owned(), "5".to_owned()),
                ("recordsPerPage".to_owned(), "50".to_owned()),
            ]
        );
    }

    #[test]
    fn clear_paging_discards_the_descriptor() {
        let filter = Filter::sort("age", SortDirection::Ascending)
            .set_paging(1, 20)
            .clear_paging()
            .set_paging(5, 50);
        // After a clear, the next two-argument call creates afresh.
        assert_eq!(
            pairs(&filter),
            [
                ("orderBy".to_owned(), "age ASC".to_owned()),
                ("page".to_owned(), "5".to_owned()),
                ("recordsPerPage".to_owned(), "50".to_owned()),
            ]
        );
    }

    #[test]
    fn unrestricted_filter_ignores_building_calls() {
        let filter = Filter::any()
            .set_where("name = ?", [WhereArg::from("bob")])
            .set_order_by("age ASC")
            .set_paging(1, 20);
        assert!(filter.is_unrestricted());
        assert_eq!(filter.to_params().unwrap(), None);
    }

    #[test]
    fn sort_direction_tokens() {
        assert_eq!(SortDirection::Ascending.token(), "ASC");
        assert_eq!(SortDirection::Descending.token(), "DESC");
    }
}
