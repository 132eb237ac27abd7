//! Error types for collection operations.

/// Represents a failure to invoke a named method on an element.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::InvokeError;
///
/// let error = InvokeError::UnknownMethod { method: "shout".to_string(), position: 2 };
/// assert_eq!(format!("{error}"), "invoke: element 2 has no method named `shout`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeError {
    /// The element at `position` (in traversal order) does not know `method`.
    UnknownMethod {
        /// The requested method name.
        method: String,
        /// The traversal position of the offending element.
        position: usize,
    },
}

impl std::fmt::Display for InvokeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMethod { method, position } => write!(
                formatter,
                "invoke: element {position} has no method named `{method}`"
            ),
        }
    }
}

impl std::error::Error for InvokeError {}
