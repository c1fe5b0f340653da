//! Property-based tests for the converters' output shape.

use case_style::{to_camel_case, to_dot_case, to_kebab_case, Case};
use proptest::prelude::*;

// Identifier-ish text: words, separators, mixed case, the odd non-ASCII char.
fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.\\-é]{0,40}"
}

proptest! {
    #[test]
    fn prop_camel_has_no_separators(s in any::<String>()) {
        let out = to_camel_case(&s);
        prop_assert!(!out.contains([' ', '_', '-']));
        prop_assert!(out.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn prop_camel_starts_lowercase(s in identifier()) {
        let out = to_camel_case(&s);
        prop_assert!(!out.starts_with(|c: char| c.is_ascii_uppercase()));
    }

    #[test]
    fn prop_dot_shape(s in any::<String>()) {
        let out = to_dot_case(&s);
        prop_assert!(!out.contains(".."));
        prop_assert!(!out.starts_with('.'));
        prop_assert!(!out.ends_with('.'));
        prop_assert!(out.chars().all(|c| c == '.' || c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn prop_dot_idempotent(s in identifier()) {
        let once = to_dot_case(&s);
        prop_assert_eq!(to_dot_case(&once), once);
    }

    #[test]
    fn prop_kebab_has_no_whitespace_or_underscore(s in identifier()) {
        let out = to_kebab_case(&s);
        prop_assert!(!out.contains([' ', '_']));
        prop_assert!(!out.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn prop_kebab_ignores_surrounding_whitespace(s in identifier(), pad in " {0,3}") {
        let padded = format!("{pad}{s}{pad}");
        prop_assert_eq!(to_kebab_case(&padded), to_kebab_case(&s));
    }

    #[test]
    fn prop_apply_matches_functions(s in identifier()) {
        prop_assert_eq!(Case::Camel.apply(&s), to_camel_case(&s));
        prop_assert_eq!(Case::Kebab.apply(&s), to_kebab_case(&s));
        prop_assert_eq!(Case::Dot.apply(&s), to_dot_case(&s));
    }
}
