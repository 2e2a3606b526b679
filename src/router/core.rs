//! Router facade - hot path for request matching.
//!
//! Ties the two matching strategies together behind one type and makes the
//! choice between them an explicit, tunable policy instead of a hardcoded
//! branch. The facade adds tracing around the match path; the strategies
//! themselves are pure computations over immutable compiled state.

use http::Method;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::combined::CombinedRouter;
use super::compile::{CompiledRoute, ParamVec};
use super::error::RouteCompileError;
use super::linear::LinearRouter;
use crate::route::RouteTable;

/// Route count at or above which [`MatchPolicy::Auto`] picks the combined
/// pattern. Below it, per-route scanning tends to win: the combined pattern
/// costs more to compile and its alternation overhead only pays off once the
/// scan has enough routes to walk.
pub const DEFAULT_COMBINED_THRESHOLD: usize = 16;

/// Result of successfully matching a request against a compiled table.
///
/// Constructed fresh per matching call and not retained by the router.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// Index of the matched route in the declared table
    pub route_index: usize,
    /// The matched compiled route (Arc to avoid expensive clones)
    pub route: Arc<CompiledRoute>,
    /// Path parameters in capture-group declaration order.
    /// Stack-allocated for ≤8 params.
    pub params: ParamVec,
}

impl RouteMatch {
    /// Get a path parameter by name.
    ///
    /// Uses "last write wins" semantics: if duplicate parameter names exist
    /// at different path depths (e.g., `/org/{id}/team/{id}`), returns the
    /// last occurrence. Parameters captured by unnamed groups are only
    /// reachable positionally via [`RouteMatch::param_values`].
    #[inline]
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .rfind(|(n, _)| n.as_deref() == Some(name))
            .map(|(_, v)| v.as_str())
    }

    /// Parameter values in declaration order.
    #[must_use]
    pub fn param_values(&self) -> Vec<&str> {
        self.params.iter().map(|(_, v)| v.as_str()).collect()
    }
}

/// Which matching strategy a [`Router`] should run.
///
/// The two strategies return identical results on any well-formed table;
/// the policy is purely a throughput trade-off, so it is exposed as
/// configuration rather than decided inside the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Always scan per-route patterns in table order.
    Linear,
    /// Always run the single combined alternation.
    Combined,
    /// Combined when the table has at least `threshold` routes, else linear.
    Auto {
        /// Route count at which the combined pattern takes over
        threshold: usize,
    },
}

impl Default for MatchPolicy {
    fn default() -> Self {
        MatchPolicy::Auto {
            threshold: DEFAULT_COMBINED_THRESHOLD,
        }
    }
}

/// The strategy a policy resolved to for a concrete table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Per-route linear scan
    Linear,
    /// Combined single pattern
    Combined,
}

#[derive(Debug, Clone)]
enum Engine {
    Linear(LinearRouter),
    Combined(CombinedRouter),
}

/// Request matcher over a compiled route table.
///
/// Compiles once at construction; matching afterwards is a pure, read-only
/// computation safe to invoke from any number of threads concurrently.
///
/// # Example
///
/// ```rust
/// use http::Method;
/// use routeset::{Route, RouteTable, Router};
///
/// # fn main() -> Result<(), routeset::RouteCompileError> {
/// let table = RouteTable::new(vec![
///     Route::new(Method::GET, "/"),
///     Route::new(Method::GET, "/widgets/{id}"),
/// ]);
/// let router = Router::new(&table)?;
///
/// let m = router.route(&Method::GET, "/widgets/42").unwrap();
/// assert_eq!(m.route_index, 1);
/// assert_eq!(m.get_param("id"), Some("42"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Router {
    engine: Engine,
}

impl Router {
    /// Compile a router with the default policy.
    pub fn new(table: &RouteTable) -> Result<Self, RouteCompileError> {
        Self::with_policy(table, MatchPolicy::default())
    }

    /// Compile a router, selecting the strategy per `policy`.
    ///
    /// Fail-fast: any invalid pattern rejects the whole table.
    pub fn with_policy(
        table: &RouteTable,
        policy: MatchPolicy,
    ) -> Result<Self, RouteCompileError> {
        let use_combined = match policy {
            MatchPolicy::Linear => false,
            MatchPolicy::Combined => true,
            MatchPolicy::Auto { threshold } => table.len() >= threshold,
        };
        let engine = if use_combined {
            Engine::Combined(CombinedRouter::compile(table)?)
        } else {
            Engine::Linear(LinearRouter::compile(table)?)
        };
        let strategy = if use_combined {
            Strategy::Combined
        } else {
            Strategy::Linear
        };
        info!(
            route_count = table.len(),
            policy = ?policy,
            strategy = ?strategy,
            "router ready"
        );
        Ok(Self { engine })
    }

    /// The strategy the policy resolved to at construction.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        match &self.engine {
            Engine::Linear(_) => Strategy::Linear,
            Engine::Combined(_) => Strategy::Combined,
        }
    }

    /// Match a normalized request line (`METHOD PATH`).
    ///
    /// The caller supplies the line exactly as the matchers expect it:
    /// method uppercase, a single space, path beginning with `/`, no query
    /// string. Use [`Router::route`] to have the line formatted.
    #[must_use]
    pub fn match_request(&self, request: &str) -> Option<RouteMatch> {
        let match_start = Instant::now();
        let result = match &self.engine {
            Engine::Linear(router) => router.match_request(request),
            Engine::Combined(router) => router.match_request(request),
        };
        let match_duration = match_start.elapsed();

        if match_duration > Duration::from_millis(1) {
            warn!(
                request,
                duration_us = match_duration.as_micros(),
                "slow route matching detected"
            );
        }
        match &result {
            Some(m) => debug!(
                request,
                route_index = m.route_index,
                pattern = m.route.pattern(),
                "route matched"
            ),
            None => debug!(request, "no route matched"),
        }
        result
    }

    /// Match an HTTP request given as method and path.
    ///
    /// Formats the `METHOD PATH` request line and delegates to
    /// [`Router::match_request`].
    #[must_use]
    pub fn route(&self, method: &Method, path: &str) -> Option<RouteMatch> {
        self.match_request(&format!("{} {}", method, path))
    }

    /// Number of routes in the compiled table.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.engine {
            Engine::Linear(router) => router.len(),
            Engine::Combined(router) => router.len(),
        }
    }

    /// Whether the compiled table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
