//! # Route Declarations
//!
//! Types for declaring the route table the matchers are compiled from.
//!
//! A [`Route`] is an HTTP method plus a path pattern. Patterns are written in
//! regular-expression syntax where parenthesized capturing groups stand in
//! for path parameters, optionally using the placeholder shorthand expanded
//! by the pattern compiler:
//!
//! - `/api/widgets/([^/]+)` - raw capture group, positional parameter
//! - `/api/widgets/{widget_id}` - named segment, any run of non-slash chars
//! - `/api/widgets/{widget_id}/parts/{part:[0-9]+}/update` - constrained
//!   segment
//!
//! A [`RouteTable`] is a fixed, ordered sequence of routes. Declaration
//! order is match precedence: when two patterns could both match a request,
//! the earlier route wins, under every matching strategy.

use http::Method;

/// A declared route: an HTTP method plus a path pattern.
///
/// Immutable once constructed. See the module docs for the pattern syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    method: Method,
    pattern: String,
}

impl Route {
    /// Declare a route.
    ///
    /// The pattern is validated when the table is compiled, not here;
    /// compilation rejects the whole table if any pattern is invalid.
    #[must_use]
    pub fn new(method: Method, pattern: impl Into<String>) -> Self {
        Self {
            method,
            pattern: pattern.into(),
        }
    }

    /// The HTTP method this route answers to.
    #[inline]
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The declared path pattern, exactly as written.
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// An ordered, immutable table of declared routes.
///
/// The table itself performs no validation; it is the input handed to the
/// matchers, which compile it once at startup. Compiled artifacts are
/// read-only afterwards and safe to share across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table from routes in declaration order.
    #[must_use]
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// All routes, in declaration order.
    #[inline]
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of declared routes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table declares no routes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate over routes in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }
}

impl From<Vec<Route>> for RouteTable {
    fn from(routes: Vec<Route>) -> Self {
        Self::new(routes)
    }
}

impl FromIterator<Route> for RouteTable {
    fn from_iter<I: IntoIterator<Item = Route>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
