//! Property-based tests for route resolution
//!
//! These tests verify that resolution either fully substitutes every
//! placeholder or fails with a typed error, and that percent-encoding
//! never introduces new path segments.

use proptest::prelude::*;
use wikirest_core::{resolve, resolve_partial, ResourceKind};

/// Generate an arbitrary resource kind
fn arb_kind() -> impl Strategy<Value = ResourceKind> {
    prop::sample::select(ResourceKind::ALL.to_vec())
}

/// Generate an arbitrary parameter value, including separators, spaces,
/// and non-ASCII text
fn arb_value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9 /:?&=%#\u{e9}\u{4e16}]{0,24}").unwrap()
}

/// The placeholder names a template needs, in template order
fn placeholders(kind: ResourceKind) -> Vec<&'static str> {
    kind.template()
        .split('/')
        .filter_map(|segment| segment.strip_prefix(':'))
        .collect()
}

proptest! {
    /// A complete parameter map always resolves, with no placeholder left
    /// and no new path segments introduced
    #[test]
    fn complete_params_always_resolve(kind in arb_kind(), values in prop::collection::vec(arb_value(), 3)) {
        let names = placeholders(kind);
        let params: Vec<(&str, &str)> = names
            .iter()
            .zip(values.iter())
            .map(|(name, value)| (*name, value.as_str()))
            .collect();

        let path = resolve(kind, &params).unwrap();

        prop_assert!(!path.split('/').any(|segment| segment.starts_with(':')));
        prop_assert_eq!(
            path.matches('/').count(),
            kind.template().matches('/').count()
        );
    }

    /// Dropping any parameter turns resolution into a typed failure
    #[test]
    fn incomplete_params_always_fail(kind in arb_kind(), value in arb_value()) {
        let names = placeholders(kind);
        prop_assume!(!names.is_empty());

        // Supply all but the first placeholder.
        let params: Vec<(&str, &str)> = names[1..]
            .iter()
            .map(|name| (*name, value.as_str()))
            .collect();

        prop_assert!(resolve(kind, &params).is_err());

        // The compatibility form keeps the literal placeholder instead.
        let partial = resolve_partial(kind, &params);
        let expected = format!(":{}", names[0]);
        prop_assert!(partial.contains(&expected));
    }

    /// Resolution is deterministic under parameter reordering
    #[test]
    fn resolution_is_order_independent(kind in arb_kind(), values in prop::collection::vec(arb_value(), 3)) {
        let names = placeholders(kind);
        let mut params: Vec<(&str, &str)> = names
            .iter()
            .zip(values.iter())
            .map(|(name, value)| (*name, value.as_str()))
            .collect();

        let forward = resolve(kind, &params).unwrap();
        params.reverse();
        let reversed = resolve(kind, &params).unwrap();

        prop_assert_eq!(forward, reversed);
    }
}
