//! Selecting a case style at runtime.
//!
//! [`Case`] names one of the three converters. It parses from the usual
//! spellings of each style and (de)serializes with serde, so a host
//! application can keep it in its own configuration.
//!
//! ## Examples
//!
//! ```rust
//! use case_style::Case;
//!
//! let case: Case = "kebab-case".parse().unwrap();
//! assert_eq!(case, Case::Kebab);
//! assert_eq!(case.apply("userId"), "user-id");
//! assert_eq!(case.to_string(), "kebab");
//! ```

use crate::convert::{to_camel_case, to_dot_case, to_kebab_case};
use crate::error::{Error, Result};
use crate::input::CaseInput;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A case style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Case {
    /// `camelCase`, see [`to_camel_case`].
    Camel,
    /// `kebab-case`, see [`to_kebab_case`].
    Kebab,
    /// `dot.case`, see [`to_dot_case`].
    Dot,
}

// Accepted spellings, compared after normalization (see `normalize`).
const ALIASES: &[(&str, Case)] = &[
    ("camel", Case::Camel),
    ("camelcase", Case::Camel),
    ("lowercamel", Case::Camel),
    ("lowercamelcase", Case::Camel),
    ("kebab", Case::Kebab),
    ("kebabcase", Case::Kebab),
    ("dash", Case::Kebab),
    ("dashcase", Case::Kebab),
    ("dot", Case::Dot),
    ("dotcase", Case::Dot),
];

impl Case {
    /// Every case style.
    pub const ALL: [Case; 3] = [Case::Camel, Case::Kebab, Case::Dot];

    /// Canonical name, as produced by `Display` and serialization.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Case::Camel => "camel",
            Case::Kebab => "kebab",
            Case::Dot => "dot",
        }
    }

    /// Converts `input` to this case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use case_style::Case;
    ///
    /// assert_eq!(Case::Camel.apply("user_id"), "userId");
    /// assert_eq!(Case::Dot.apply("user_id"), "user.id");
    /// assert_eq!(Case::Kebab.apply(&None::<&str>), "");
    /// ```
    #[must_use]
    pub fn apply<T>(&self, input: &T) -> String
    where
        T: ?Sized + CaseInput,
    {
        match self {
            Case::Camel => to_camel_case(input),
            Case::Kebab => to_kebab_case(input),
            Case::Dot => to_dot_case(input),
        }
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | '.' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// A near miss shares the first three letters with a canonical name.
fn suggestion(normalized: &str) -> Option<Case> {
    let prefix = normalized.get(..3)?;
    Case::ALL
        .into_iter()
        .find(|case| case.name().get(..3) == Some(prefix))
}

impl FromStr for Case {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = normalize(s.trim());
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == normalized)
            .map(|&(_, case)| case)
            .ok_or_else(|| Error::unknown_case(s, suggestion(&normalized).map(|c| c.name())))
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Case {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Case {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct CaseVisitor;

        impl Visitor<'_> for CaseVisitor {
            type Value = Case;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a case style name such as \"camel\", \"kebab\" or \"dot\"")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(CaseVisitor)
    }
}
