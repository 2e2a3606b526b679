//! Route-table loading.
//!
//! Declaring routes in code is the primary interface; this module is the
//! thin convenience for embedders that keep their table in configuration.
//! The document format is a YAML list of method/path pairs:
//!
//! ```yaml
//! routes:
//!   - method: GET
//!     path: /
//!   - method: GET
//!     path: /widgets/{id}
//!   - method: POST
//!     path: /api/widgets/{widget_id}/parts/{part:[0-9]+}/update
//! ```
//!
//! Loading only builds the declared [`RouteTable`]; pattern validation
//! happens when the table is compiled into a matcher.

use anyhow::Context;
use http::Method;
use serde::Deserialize;
use std::path::Path;

use crate::route::{Route, RouteTable};

#[derive(Debug, Deserialize)]
struct RouteDoc {
    routes: Vec<RouteEntry>,
}

#[derive(Debug, Deserialize)]
struct RouteEntry {
    method: String,
    path: String,
}

/// Parse a route table from a YAML document.
///
/// Methods are uppercased before parsing, so `get` and `GET` are
/// equivalent. Entry order in the document is table order.
pub fn routes_from_yaml(yaml: &str) -> anyhow::Result<RouteTable> {
    let doc: RouteDoc =
        serde_yaml::from_str(yaml).context("failed to parse route table YAML")?;
    let mut routes = Vec::with_capacity(doc.routes.len());
    for entry in doc.routes {
        let method = Method::try_from(entry.method.to_ascii_uppercase().as_str())
            .with_context(|| {
                format!(
                    "invalid HTTP method '{}' for path '{}'",
                    entry.method, entry.path
                )
            })?;
        routes.push(Route::new(method, entry.path));
    }
    Ok(RouteTable::new(routes))
}

/// Load a route table from a YAML file.
pub fn load_routes(path: impl AsRef<Path>) -> anyhow::Result<RouteTable> {
    let path = path.as_ref();
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read route table file: {}", path.display()))?;
    routes_from_yaml(&yaml)
}
