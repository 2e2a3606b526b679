use http::Method;
use std::fmt;

/// Route-table compilation error
///
/// Returned when a route table is compiled into a matcher. Compilation is
/// fail-fast: the first offending route rejects the whole table, and no
/// partial or degraded table is ever served.
#[derive(Debug)]
pub enum RouteCompileError {
    /// A `{` opened in the pattern was never closed.
    UnclosedPlaceholder {
        /// Index of the offending route in the declared table
        index: usize,
        /// The declared pattern
        pattern: String,
    },
    /// A placeholder carried a constraint but no name, e.g. `{:[0-9]+}`.
    EmptyPlaceholderName {
        /// Index of the offending route in the declared table
        index: usize,
        /// The declared pattern
        pattern: String,
    },
    /// The route's pattern is not a valid regular expression.
    InvalidRegex {
        /// Index of the offending route in the declared table
        index: usize,
        /// The route's method
        method: Method,
        /// The declared pattern
        pattern: String,
        /// The underlying regex compilation error
        source: regex::Error,
    },
    /// The pattern contains grouping constructs the capture scanner cannot
    /// account for, which would corrupt the combined matcher's offset table.
    GroupCountMismatch {
        /// Index of the offending route in the declared table
        index: usize,
        /// The declared pattern
        pattern: String,
        /// Capturing groups the scanner observed
        scanned: usize,
        /// Capturing groups the compiled regex reports
        compiled: usize,
    },
    /// The assembled alternation over all routes failed to compile even
    /// though every route compiled individually. The usual cause is the same
    /// `(?P<name>...)` group appearing in more than one route.
    CombinedAssembly {
        /// The underlying regex compilation error
        source: regex::Error,
    },
}

impl fmt::Display for RouteCompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteCompileError::UnclosedPlaceholder { index, pattern } => {
                write!(
                    f,
                    "route {}: unclosed '{{' in pattern '{}'",
                    index, pattern
                )
            }
            RouteCompileError::EmptyPlaceholderName { index, pattern } => {
                write!(
                    f,
                    "route {}: placeholder with empty name in pattern '{}'. \
                    Write '{{name}}' or '{{name:regex}}'",
                    index, pattern
                )
            }
            RouteCompileError::InvalidRegex {
                index,
                method,
                pattern,
                source,
            } => {
                write!(
                    f,
                    "route {} ({} {}): pattern is not a valid regular expression: {}",
                    index, method, pattern, source
                )
            }
            RouteCompileError::GroupCountMismatch {
                index,
                pattern,
                scanned,
                compiled,
            } => {
                write!(
                    f,
                    "route {}: pattern '{}' compiled to {} capture group(s) but the \
                    scanner accounted for {}. Grouping the scanner cannot track would \
                    corrupt combined-pattern offset bookkeeping; simplify the pattern \
                    or use '{{name:regex}}' placeholders",
                    index, pattern, compiled, scanned
                )
            }
            RouteCompileError::CombinedAssembly { source } => {
                write!(
                    f,
                    "combined route pattern failed to compile: {}. \
                    This usually means the same (?P<name>...) group appears in more \
                    than one route; prefer '{{name}}' placeholders, which stay local \
                    to their route",
                    source
                )
            }
        }
    }
}

impl std::error::Error for RouteCompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteCompileError::InvalidRegex { source, .. }
            | RouteCompileError::CombinedAssembly { source } => Some(source),
            _ => None,
        }
    }
}
