//! Linear-scan matching.
//!
//! One compiled regex per route, tried in table order; the first route whose
//! anchored pattern matches the request line wins. Cost is
//! O(routes × pattern cost) per request in the worst case (no match, or a
//! match near the end of the table) - the baseline the combined matcher has
//! to beat.

use std::sync::Arc;
use tracing::info;

use super::compile::{compile_table, CompiledRoute};
use super::core::RouteMatch;
use super::error::RouteCompileError;
use crate::route::RouteTable;

/// Linear-scan matcher: per-route compiled patterns tried in table order.
#[derive(Debug, Clone)]
pub struct LinearRouter {
    routes: Vec<Arc<CompiledRoute>>,
}

impl LinearRouter {
    /// Compile a route table for linear matching.
    ///
    /// Fail-fast: any invalid pattern rejects the whole table.
    pub fn compile(table: &RouteTable) -> Result<Self, RouteCompileError> {
        let routes = compile_table(table)?;
        info!(
            route_count = routes.len(),
            strategy = "linear",
            "route table compiled"
        );
        Ok(Self::from_compiled(routes))
    }

    pub(crate) fn from_compiled(routes: Vec<Arc<CompiledRoute>>) -> Self {
        Self { routes }
    }

    /// Match a normalized request line (`METHOD PATH`).
    ///
    /// Returns the first route in table order whose pattern matches, with
    /// its captured path parameters, or `None` after exhausting the table.
    #[must_use]
    pub fn match_request(&self, request: &str) -> Option<RouteMatch> {
        for (index, route) in self.routes.iter().enumerate() {
            if let Some(caps) = route.regex().captures(request) {
                return Some(RouteMatch {
                    route_index: index,
                    params: route.extract_params(&caps, 1),
                    route: Arc::clone(route),
                });
            }
        }
        None
    }

    /// The compiled routes, in table order.
    #[must_use]
    pub fn routes(&self) -> &[Arc<CompiledRoute>] {
        &self.routes
    }

    /// Number of routes in the compiled table.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the compiled table is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
