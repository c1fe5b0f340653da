//! The case converters.
//!
//! All three functions take anything implementing [`CaseInput`] and never
//! fail: input that is not a string converts to an empty string.

use crate::input::CaseInput;
use crate::words::{is_hump, Split, Words};

/// Converts `input` to camelCase.
///
/// Runs of characters other than ASCII letters and digits separate words.
/// The first word is lowercased; every following word is lowercased and then
/// has its first character uppercased. Humps inside a word are not word
/// boundaries, so `someCamelCase` becomes `somecamelcase`.
///
/// # Examples
///
/// ```rust
/// use case_style::to_camel_case;
///
/// assert_eq!(to_camel_case("first name"), "firstName");
/// assert_eq!(to_camel_case("SCREEN_NAME"), "screenName");
/// assert_eq!(to_camel_case(&None::<&str>), "");
/// ```
#[must_use]
pub fn to_camel_case<T>(input: &T) -> String
where
    T: ?Sized + CaseInput,
{
    let Some(text) = input.as_text() else {
        return String::new();
    };

    let mut out = String::with_capacity(text.len());
    for (i, word) in Words::new(text, Split::Separators).enumerate() {
        let mut chars = word.chars();
        if i > 0 {
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
            }
        }
        out.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
    out
}

/// Converts `input` to kebab-case.
///
/// Trims surrounding whitespace, splits humps, replaces every run of
/// whitespace or underscores with a single `-` and lowercases the result.
/// Other punctuation, existing dashes included, is kept as is.
///
/// # Examples
///
/// ```rust
/// use case_style::to_kebab_case;
///
/// assert_eq!(to_kebab_case("myVariableName"), "my-variable-name");
/// assert_eq!(to_kebab_case("  some_input  "), "some-input");
/// ```
#[must_use]
pub fn to_kebab_case<T>(input: &T) -> String
where
    T: ?Sized + CaseInput,
{
    let Some(text) = input.as_text() else {
        return String::new();
    };

    let text = text.trim();
    let mut out = String::with_capacity(text.len() + 4);
    let mut in_gap = false;
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if c.is_whitespace() || c == '_' {
            if !in_gap {
                out.push('-');
                in_gap = true;
            }
        } else {
            if prev.is_some_and(|p| is_hump(p, c)) {
                out.push('-');
            }
            out.push(c);
            in_gap = false;
        }
        prev = Some(c);
    }
    out.to_lowercase()
}

/// Converts `input` to dot.case.
///
/// Words are separated by runs of non-alphanumeric characters and by humps,
/// lowercased and joined with single dots. The output never starts or ends
/// with a dot, and converting it again returns it unchanged.
///
/// # Examples
///
/// ```rust
/// use case_style::to_dot_case;
///
/// assert_eq!(to_dot_case("someCamelCase"), "some.camel.case");
/// assert_eq!(to_dot_case("mobile-number"), "mobile.number");
/// assert_eq!(to_dot_case("..a..b.."), "a.b");
/// ```
#[must_use]
pub fn to_dot_case<T>(input: &T) -> String
where
    T: ?Sized + CaseInput,
{
    let Some(text) = input.as_text() else {
        return String::new();
    };

    let mut out = String::with_capacity(text.len());
    for word in Words::new(text, Split::SeparatorsAndHumps) {
        if !out.is_empty() {
            out.push('.');
        }
        out.extend(word.chars().map(|c| c.to_ascii_lowercase()));
    }
    out
}
