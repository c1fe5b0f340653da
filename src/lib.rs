//! # case_style
//!
//! Deterministic string case conversion: camelCase, kebab-case and dot.case.
//!
//! ## Key Features
//!
//! - **Pure Functions**: No state, no I/O, safe to call from any thread
//! - **Total**: Every converter accepts any value and never panics; values that
//!   are not strings convert to `""`
//! - **ASCII Word Model**: ASCII letters and digits form words, everything else
//!   separates them (see [`words`])
//! - **Runtime Selection**: [`Case`] parses from common style names and works with serde
//! - **No Unsafe Code**: Written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! case_style = "0.1"
//! ```
//!
//! ```rust
//! use case_style::{to_camel_case, to_dot_case, to_kebab_case};
//!
//! assert_eq!(to_camel_case("first name"), "firstName");
//! assert_eq!(to_camel_case("SCREEN_NAME"), "screenName");
//!
//! assert_eq!(to_kebab_case("myVariableName"), "my-variable-name");
//! assert_eq!(to_kebab_case("  some_input  "), "some-input");
//!
//! assert_eq!(to_dot_case("someCamelCase"), "some.camel.case");
//! assert_eq!(to_dot_case("mobile-number"), "mobile.number");
//! ```
//!
//! ### Missing and Non-String Values
//!
//! ```rust
//! use case_style::{to_camel_case, Value};
//!
//! let missing: Option<&str> = None;
//! assert_eq!(to_camel_case(&missing), "");
//! assert_eq!(to_camel_case(&Value::Null), "");
//! assert_eq!(to_camel_case(&Value::from(3)), "");
//! ```
//!
//! ### Choosing a Style at Runtime
//!
//! ```rust
//! use case_style::{convert, Case};
//!
//! let case: Case = "dot.case".parse().unwrap();
//! assert_eq!(convert("user_id", case), "user.id");
//! ```
//!
//! ## How Each Style Treats Words
//!
//! | style | word breaks | humps (`aB`) | untouched |
//! |-------|-------------|--------------|-----------|
//! | camel | any non-alphanumeric run | not a break | nothing, separators are dropped |
//! | kebab | whitespace and `_` runs | break | other punctuation |
//! | dot   | any non-alphanumeric run | break | nothing, separators are dropped |

pub mod case;
pub mod convert;
pub mod error;
pub mod input;
pub mod value;
pub mod words;

pub use case::Case;
pub use convert::{to_camel_case, to_dot_case, to_kebab_case};
pub use error::{Error, Result};
pub use input::CaseInput;
pub use value::{Number, Value};

/// Converts `input` to the given case.
///
/// Shorthand for [`Case::apply`].
///
/// # Examples
///
/// ```rust
/// use case_style::{convert, Case};
///
/// assert_eq!(convert("user_id", Case::Camel), "userId");
/// assert_eq!(convert("user_id", Case::Kebab), "user-id");
/// ```
#[must_use]
pub fn convert<T>(input: &T, case: Case) -> String
where
    T: ?Sized + CaseInput,
{
    case.apply(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_matches_functions() {
        let inputs = ["first name", "user_id", "SCREEN_NAME", "someCamelCase", ""];
        for input in inputs {
            assert_eq!(convert(input, Case::Camel), to_camel_case(input));
            assert_eq!(convert(input, Case::Kebab), to_kebab_case(input));
            assert_eq!(convert(input, Case::Dot), to_dot_case(input));
        }
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Case>();
        assert_send_sync::<Value>();
        assert_send_sync::<Error>();
    }
}
