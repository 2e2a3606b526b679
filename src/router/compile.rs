//! Route-table compilation.
//!
//! Turns declared routes into the compiled, immutable artifacts both
//! matching strategies run against. Compilation happens once, at table
//! initialization; everything it produces is read-only afterwards and safe
//! to share across concurrent matching calls without locking.

use http::Method;
use regex::{Captures, Regex};
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::debug;

use super::error::RouteCompileError;
use super::pattern::{self, PlaceholderError};
use crate::route::{Route, RouteTable};

/// Maximum number of path parameters before heap allocation.
/// Most REST APIs have ≤4 path params (e.g., /users/{id}/posts/{post_id}).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the hot path.
///
/// Each entry is `(name, value)` in capture-group declaration order. Names
/// are `Arc<str>` because they come from the static compiled table and are
/// cloned per match; values are per-request data extracted from the path.
/// Groups declared without a name (raw `(...)`) carry `None`.
pub type ParamVec = SmallVec<[(Option<Arc<str>>, String); MAX_INLINE_PARAMS]>;

/// One route compiled for matching.
///
/// Owns the anchored request regex (`^METHOD PATH$`) used by the linear
/// matcher, the expanded pattern source the combined matcher is assembled
/// from, and the ordered parameter-name list shared by both.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
    method: Method,
    pattern: String,
    expanded: String,
    regex: Regex,
    param_names: Vec<Option<Arc<str>>>,
}

impl CompiledRoute {
    /// Compile one declared route.
    ///
    /// `index` is the route's position in the declared table, reported in
    /// errors so a failing route can be located.
    pub(crate) fn compile(index: usize, route: &Route) -> Result<Self, RouteCompileError> {
        let expanded = pattern::expand(route.pattern()).map_err(|err| match err {
            PlaceholderError::Unclosed => RouteCompileError::UnclosedPlaceholder {
                index,
                pattern: route.pattern().to_string(),
            },
            PlaceholderError::EmptyName => RouteCompileError::EmptyPlaceholderName {
                index,
                pattern: route.pattern().to_string(),
            },
        })?;

        let request_src = format!("^{} {}$", route.method(), expanded.source);
        let regex = Regex::new(&request_src).map_err(|source| RouteCompileError::InvalidRegex {
            index,
            method: route.method().clone(),
            pattern: route.pattern().to_string(),
            source,
        })?;

        // captures_len() counts the implicit whole-match group 0.
        let compiled_groups = regex.captures_len() - 1;
        if compiled_groups != expanded.param_names.len() {
            return Err(RouteCompileError::GroupCountMismatch {
                index,
                pattern: route.pattern().to_string(),
                scanned: expanded.param_names.len(),
                compiled: compiled_groups,
            });
        }

        debug!(
            index,
            method = %route.method(),
            pattern = route.pattern(),
            groups = compiled_groups,
            "route compiled"
        );

        Ok(Self {
            method: route.method().clone(),
            pattern: route.pattern().to_string(),
            expanded: expanded.source,
            regex,
            param_names: expanded.param_names,
        })
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

    /// Number of path-parameter capture groups this route declares.
    #[inline]
    #[must_use]
    pub fn capture_groups(&self) -> usize {
        self.param_names.len()
    }

    /// Parameter names in capture-group order; `None` for unnamed groups.
    #[must_use]
    pub fn param_names(&self) -> &[Option<Arc<str>>] {
        &self.param_names
    }

    /// The anchored per-route regex the linear matcher runs.
    #[inline]
    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }

    /// This route's alternative for the combined pattern: the request
    /// pattern wrapped in one top-level capturing group, so the combined
    /// matcher can tell which alternative fired.
    pub(crate) fn request_alternative(&self) -> String {
        format!("({} {})", self.method, self.expanded)
    }

    /// Extract this route's parameters from a successful match.
    ///
    /// `first_group` is the capture index of the route's first inner group:
    /// 1 for the per-route regex, `offset + 2` within the combined pattern
    /// (skipping the wrapper group). Only groups that participated in the
    /// match are yielded, in declaration order - the same rule under both
    /// strategies, which is what keeps them interchangeable.
    pub(crate) fn extract_params(&self, caps: &Captures<'_>, first_group: usize) -> ParamVec {
        let mut params = ParamVec::new();
        for (offset, name) in self.param_names.iter().enumerate() {
            if let Some(m) = caps.get(first_group + offset) {
                params.push((name.clone(), m.as_str().to_string()));
            }
        }
        params
    }
}

/// Compile every route in the table, in declaration order.
///
/// Fail-fast: the first invalid pattern rejects the whole table.
pub(crate) fn compile_table(
    table: &RouteTable,
) -> Result<Vec<Arc<CompiledRoute>>, RouteCompileError> {
    let mut compiled = Vec::with_capacity(table.len());
    for (index, route) in table.iter().enumerate() {
        compiled.push(Arc::new(CompiledRoute::compile(index, route)?));
    }
    Ok(compiled)
}
