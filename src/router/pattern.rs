//! Path-pattern expansion.
//!
//! Turns a declared path pattern into plain regex source, expanding the
//! placeholder shorthand and recording one entry per capturing group so the
//! matchers can map capture slots back to parameters:
//!
//! - `{name}` becomes `([^/]+)` - one path segment, parameter `name`
//! - `{name:[0-9]+}` becomes `([0-9]+)` - constrained segment
//! - raw `(...)` groups pass through and contribute an unnamed parameter
//! - raw `(?P<name>...)` groups pass through and contribute `name`
//! - brace groups that are not `identifier[:regex]` (repetitions such as
//!   `{2,4}`) pass through untouched
//!
//! The scanner also counts capturing groups while it walks the pattern.
//! Compilation cross-checks that count against the compiled regex; a
//! mismatch means the pattern contains grouping the scanner cannot account
//! for, which would corrupt the combined matcher's offset table, so the
//! table is rejected instead.

use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

/// Default constraint for a bare `{name}` placeholder: one path segment.
pub(crate) const SEGMENT_PATTERN: &str = "[^/]+";

static IDENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex is valid")
});

/// A pattern with placeholders expanded to capturing groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExpandedPattern {
    /// Regex source for the path part, ready to be anchored and compiled.
    pub(crate) source: String,
    /// One entry per capturing group, in group order. `Some` for
    /// placeholder and named groups, `None` for anonymous groups.
    pub(crate) param_names: Vec<Option<Arc<str>>>,
}

/// Placeholder syntax error, reported before regex compilation is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlaceholderError {
    /// A `{` opened outside a character class was never closed.
    Unclosed,
    /// A placeholder with a constraint but no name, e.g. `{:[0-9]+}`.
    EmptyName,
}

/// Expand placeholders and scan capturing groups in one pass.
pub(crate) fn expand(pattern: &str) -> Result<ExpandedPattern, PlaceholderError> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut source = String::with_capacity(pattern.len() + 8);
    let mut param_names: Vec<Option<Arc<str>>> = Vec::new();

    let mut i = 0;
    let mut in_class = false;
    // Position within the current character class; `]` at position 0 (or
    // right after a leading `^`) is a literal member, not the class end.
    let mut class_pos = 0usize;

    while i < chars.len() {
        let c = chars[i];

        if c == '\\' {
            source.push('\\');
            if i + 1 < chars.len() {
                source.push(chars[i + 1]);
                i += 2;
            } else {
                i += 1;
            }
            if in_class {
                class_pos += 1;
            }
            continue;
        }

        if in_class {
            if c == ']' {
                if class_pos == 0 {
                    class_pos = 1;
                } else {
                    in_class = false;
                }
            } else if c == '^' && class_pos == 0 {
                // negation marker, keeps a following `]` literal
            } else {
                class_pos += 1;
            }
            source.push(c);
            i += 1;
            continue;
        }

        match c {
            '[' => {
                in_class = true;
                class_pos = 0;
                source.push('[');
                i += 1;
            }
            '{' => {
                let close = find_closing_brace(&chars, i)?;
                let content: String = chars[i + 1..close].iter().collect();
                match parse_placeholder(&content)? {
                    Some((name, constraint)) => {
                        source.push('(');
                        source.push_str(constraint);
                        source.push(')');
                        param_names.push(Some(Arc::from(name)));
                    }
                    None => {
                        // Not a placeholder (e.g. a repetition count);
                        // pass the brace group through as regex syntax.
                        source.push('{');
                        source.push_str(&content);
                        source.push('}');
                    }
                }
                i = close + 1;
            }
            '(' => {
                param_names.extend(scan_group_open(&chars, i));
                source.push('(');
                i += 1;
            }
            _ => {
                source.push(c);
                i += 1;
            }
        }
    }

    Ok(ExpandedPattern {
        source,
        param_names,
    })
}

/// Locate the `}` matching the `{` at `open`, honoring nesting and escapes.
fn find_closing_brace(chars: &[char], open: usize) -> Result<usize, PlaceholderError> {
    let mut depth = 1usize;
    let mut i = open + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 1,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    Err(PlaceholderError::Unclosed)
}

/// Decide whether a brace group is a placeholder.
///
/// Returns `Some((name, constraint))` for `identifier` or
/// `identifier:regex` content, `None` when the braces are ordinary regex
/// syntax, and an error for a constraint with an empty name.
fn parse_placeholder(content: &str) -> Result<Option<(&str, &str)>, PlaceholderError> {
    let (name, constraint) = match content.split_once(':') {
        Some((name, constraint)) => (name, constraint),
        None => (content, SEGMENT_PATTERN),
    };
    if IDENT_REGEX.is_match(name) {
        return Ok(Some((name, constraint)));
    }
    if name.is_empty() && content.contains(':') {
        return Err(PlaceholderError::EmptyName);
    }
    Ok(None)
}

/// Classify the group opened by the `(` at `open`.
///
/// Returns the parameter entry the group contributes: one `None` for a
/// plain capturing group, one `Some(name)` for `(?P<name>` / `(?<name>`,
/// and nothing for non-capturing forms such as `(?:` and inline flags.
fn scan_group_open(chars: &[char], open: usize) -> Option<Option<Arc<str>>> {
    if chars.get(open + 1) != Some(&'?') {
        return Some(None);
    }
    // `(?P<name>` or `(?<name>` are the capturing forms of `(?`.
    let name_start = match (chars.get(open + 2), chars.get(open + 3)) {
        (Some('P'), Some('<')) => open + 4,
        (Some('<'), next) if next != Some(&'=') && next != Some(&'!') => open + 3,
        _ => return None,
    };
    let mut end = name_start;
    while end < chars.len() && chars[end] != '>' {
        end += 1;
    }
    let name: String = chars[name_start..end].iter().collect();
    Some(Some(Arc::from(name.as_str())))
}
