//! Inputs accepted by the converters.
//!
//! The converters are total over any value: string-typed values are
//! converted, everything else converts to an empty string. [`CaseInput`]
//! is the seam that decides which values count as strings.
//!
//! ## Examples
//!
//! ```rust
//! use case_style::{to_dot_case, CaseInput, Value};
//!
//! assert_eq!("user_id".as_text(), Some("user_id"));
//! assert_eq!(None::<String>.as_text(), None);
//!
//! // Dynamic values: only strings convert.
//! assert_eq!(to_dot_case(&Value::from("userId")), "user.id");
//! assert_eq!(to_dot_case(&Value::Null), "");
//! ```

use crate::value::Value;
use std::borrow::Cow;

/// A value the case converters can be called with.
///
/// Implement this for your own types to make them convertible. Returning
/// `None` marks the value as "not a string", which makes every converter
/// return `""`.
///
/// # Examples
///
/// ```rust
/// use case_style::{to_camel_case, CaseInput};
///
/// struct ColumnName(String);
///
/// impl CaseInput for ColumnName {
///     fn as_text(&self) -> Option<&str> {
///         Some(&self.0)
///     }
/// }
///
/// assert_eq!(to_camel_case(&ColumnName("created_at".into())), "createdAt");
/// ```
pub trait CaseInput {
    /// Returns the text to convert, or `None` if this value is not a string.
    fn as_text(&self) -> Option<&str>;
}

impl CaseInput for str {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl CaseInput for String {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl CaseInput for Cow<'_, str> {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T> CaseInput for &T
where
    T: ?Sized + CaseInput,
{
    #[inline]
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T> CaseInput for Box<T>
where
    T: ?Sized + CaseInput,
{
    #[inline]
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

// `None` plays the part of a missing (null/undefined) value.
impl<T> CaseInput for Option<T>
where
    T: CaseInput,
{
    #[inline]
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(CaseInput::as_text)
    }
}

impl CaseInput for Value {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }
}
