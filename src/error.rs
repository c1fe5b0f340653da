//! Error types.
//!
//! Conversions themselves never fail; errors only come from parsing a
//! [`Case`](crate::Case) name or from extracting a string out of a
//! [`Value`](crate::Value).
//!
//! ## Examples
//!
//! ```rust
//! use case_style::{Case, Error};
//!
//! let err = "camle".parse::<Case>().unwrap_err();
//! assert!(matches!(err, Error::UnknownCase { .. }));
//! assert!(err.to_string().contains("Help: did you mean 'camel'?"));
//! ```

use std::fmt;
use thiserror::Error;

/// All errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A case style name that is not recognized
    #[error("Unknown case style '{name}'{suggestion}")]
    UnknownCase { name: String, suggestion: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unknown-case error, with an optional suggested name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use case_style::Error;
    ///
    /// let err = Error::unknown_case("snake", None);
    /// assert_eq!(err.to_string(), "Unknown case style 'snake'");
    ///
    /// let err = Error::unknown_case("kebap", Some("kebab"));
    /// assert!(err.to_string().ends_with("Help: did you mean 'kebab'?"));
    /// ```
    pub fn unknown_case(name: &str, suggestion: Option<&str>) -> Self {
        Error::UnknownCase {
            name: name.to_string(),
            suggestion: suggestion
                .map(|s| format!("\nHelp: did you mean '{}'?", s))
                .unwrap_or_default(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
