//! Combined single-pattern matching.
//!
//! All routes are compiled into one alternation regex that is run once per
//! request, so a no-match costs one pass over the input instead of one pass
//! per route. The subtlety is recovering *which* alternative fired: regex
//! engines do not report the matching branch of an alternation, so every
//! route's request pattern is wrapped in its own top-level capturing group
//! and an **offset table** maps route indexes to capture slots.
//!
//! ## Offset table
//!
//! With `groupCount(i)` = 1 (the wrapper) + route *i*'s inner parameter
//! groups, the table is the exclusive prefix sum:
//!
//! ```text
//! offset[0] = 0
//! offset[i + 1] = offset[i] + groupCount(i)          // length: routes + 1
//! ```
//!
//! After a successful match, slot `offset[i] + 1` is route *i*'s wrapper
//! group. The first route in table order whose wrapper participated is the
//! matched route; its parameters are the participating slots
//! `offset[i] + 2 ..= offset[i + 1]`, in declaration order.
//!
//! ## Anchoring
//!
//! The combined source is `^(?:(M0 P0)|(M1 P1)|...)$`. The outer group is
//! non-capturing, so it binds the anchors to every alternative without
//! shifting capture indexes. Alternation in the regex crate is
//! leftmost-first, so alternative precedence equals table order and the
//! combined matcher agrees with the linear scan on every input.

use regex::Regex;
use std::sync::Arc;
use tracing::info;

use super::compile::{compile_table, CompiledRoute};
use super::core::RouteMatch;
use super::error::RouteCompileError;
use crate::route::RouteTable;

/// Combined-pattern matcher: one alternation regex over the whole table.
#[derive(Debug, Clone)]
pub struct CombinedRouter {
    routes: Vec<Arc<CompiledRoute>>,
    regex: Regex,
    offsets: Vec<usize>,
}

impl CombinedRouter {
    /// Compile a route table into a single combined pattern.
    ///
    /// Fail-fast: any invalid pattern rejects the whole table, as does an
    /// alternation that fails to assemble (duplicate named groups across
    /// routes).
    pub fn compile(table: &RouteTable) -> Result<Self, RouteCompileError> {
        Self::from_compiled(compile_table(table)?)
    }

    pub(crate) fn from_compiled(
        routes: Vec<Arc<CompiledRoute>>,
    ) -> Result<Self, RouteCompileError> {
        let mut offsets = Vec::with_capacity(routes.len() + 1);
        offsets.push(0usize);
        let mut alternatives = Vec::with_capacity(routes.len());
        for route in &routes {
            let prev = offsets[offsets.len() - 1];
            offsets.push(prev + 1 + route.capture_groups());
            alternatives.push(route.request_alternative());
        }

        let combined_src = format!("^(?:{})$", alternatives.join("|"));
        let regex = Regex::new(&combined_src)
            .map_err(|source| RouteCompileError::CombinedAssembly { source })?;

        info!(
            route_count = routes.len(),
            capture_slots = offsets[offsets.len() - 1],
            strategy = "combined",
            "route table compiled"
        );

        Ok(Self {
            routes,
            regex,
            offsets,
        })
    }

    /// Match a normalized request line (`METHOD PATH`).
    ///
    /// Runs the combined pattern once; on success, resolves the matched
    /// route and its parameters through the offset table. A failed match is
    /// decided in one pass rather than one per route.
    #[must_use]
    pub fn match_request(&self, request: &str) -> Option<RouteMatch> {
        if self.routes.is_empty() {
            return None;
        }
        let caps = self.regex.captures(request)?;
        for (index, route) in self.routes.iter().enumerate() {
            let wrapper = self.offsets[index] + 1;
            if caps.get(wrapper).is_some() {
                return Some(RouteMatch {
                    route_index: index,
                    params: route.extract_params(&caps, wrapper + 1),
                    route: Arc::clone(route),
                });
            }
        }
        debug_assert!(
            false,
            "combined pattern matched but no wrapper group participated"
        );
        None
    }

    /// The capture-group offset table.
    ///
    /// `offsets()[i]` is the cumulative capture-group count of routes
    /// `0..i`; the final entry is the total. Exposed for diagnostics and
    /// invariant checks.
    #[must_use]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
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
