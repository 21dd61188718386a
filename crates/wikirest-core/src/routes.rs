//! Route resolution: kind + parameters to a concrete URI path

use crate::error::RouteError;
use crate::kind::ResourceKind;

/// Resolve a resource kind and parameter set to a URI path
///
/// Every supplied value is percent-encoded and substituted for its
/// `:name` placeholder. Matching is scoped to whole path segments, so a
/// short placeholder name can never match inside a longer one.
/// Substitution is deterministic: each placeholder is distinct and the
/// order of `params` does not affect the result. Parameters without a
/// matching placeholder are ignored.
///
/// # Errors
///
/// Returns [`RouteError::MissingParameter`] if any placeholder remains
/// unfilled after all parameters are applied. Callers that depend on the
/// legacy pass-through behavior can use [`resolve_partial`].
///
/// # Examples
///
/// ```rust
/// use wikirest_core::{resolve, ResourceKind};
///
/// let path = resolve(
///     ResourceKind::PageTag,
///     &[("ws", "admin"), ("pname", "start here"), ("tag", "a/b")],
/// )
/// .unwrap();
/// assert_eq!(path, "/data/workspaces/admin/pages/start%20here/tags/a%2Fb");
///
/// assert!(resolve(ResourceKind::Page, &[("ws", "admin")]).is_err());
/// ```
pub fn resolve(kind: ResourceKind, params: &[(&str, &str)]) -> Result<String, RouteError> {
    let path = resolve_partial(kind, params);

    if let Some(name) = first_placeholder(&path) {
        return Err(RouteError::MissingParameter {
            kind: kind.name(),
            name: name.to_string(),
        });
    }

    Ok(path)
}

/// Resolve a route, leaving unsupplied placeholders literally intact
///
/// Compatibility form of [`resolve`]: a missing parameter produces a path
/// still containing the `:placeholder` text rather than an error.
pub fn resolve_partial(kind: ResourceKind, params: &[(&str, &str)]) -> String {
    let segments: Vec<String> = kind
        .template()
        .split('/')
        .map(|segment| substitute_segment(segment, params))
        .collect();

    segments.join("/")
}

/// Substitute one template segment, percent-encoding the supplied value
///
/// A segment participates only when it is exactly `:name` for a supplied
/// parameter; literal segments and unmatched placeholders pass through.
fn substitute_segment(segment: &str, params: &[(&str, &str)]) -> String {
    if let Some(placeholder) = segment.strip_prefix(':') {
        for (name, value) in params {
            if *name == placeholder {
                return urlencoding::encode(value).into_owned();
            }
        }
    }
    segment.to_string()
}

/// The first remaining `:placeholder` segment in a resolved path, if any
fn first_placeholder(path: &str) -> Option<&str> {
    path.split('/')
        .find_map(|segment| segment.strip_prefix(':'))
}
