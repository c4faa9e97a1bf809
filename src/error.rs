use std::fmt;

/// Route compilation error
///
/// Returned by every declaration operation on a [`Scope`](crate::scope::Scope).
/// All variants are programmer errors in the route definitions; none are
/// recoverable mid-pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// A shorthand target that is not exactly `controller#action`
    MalformedTarget {
        /// The target string as written
        target: String,
    },
    /// An empty or otherwise unusable namespace segment or resource name
    InvalidName {
        /// The declaration that received the name (`namespace`, `resources`, ...)
        call: &'static str,
        /// The offending name
        name: String,
    },
    /// `member` or `collection` declared outside a resource block
    InvalidNesting {
        /// The declaration that was misplaced
        call: &'static str,
    },
    /// An `only`/`except` entry that is not one of the RESTful actions
    UnknownAction {
        /// The unrecognised action name
        name: String,
    },
    /// A verb name outside get/put/post/patch/delete/del
    UnknownVerb {
        /// The unrecognised verb name
        name: String,
    },
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::MalformedTarget { target } => {
                write!(
                    f,
                    "route definition error: malformed target '{}'. \
                    Expected exactly one '#' separating controller and action (e.g. users#show)",
                    target
                )
            }
            DrawError::InvalidName { call, name } => {
                write!(
                    f,
                    "route definition error: {}() received invalid name '{}'. \
                    Names must be non-empty path segments without '/' or whitespace",
                    call, name
                )
            }
            DrawError::InvalidNesting { call } => {
                write!(
                    f,
                    "route definition error: {}() is only valid inside a resources block",
                    call
                )
            }
            DrawError::UnknownAction { name } => {
                write!(
                    f,
                    "route definition error: unknown RESTful action '{}'. \
                    Expected one of index, show, new, create, edit, update, destroy",
                    name
                )
            }
            DrawError::UnknownVerb { name } => {
                write!(
                    f,
                    "route definition error: unknown verb '{}'. \
                    Expected one of get, put, post, patch, delete, del",
                    name
                )
            }
        }
    }
}

impl std::error::Error for DrawError {}

/// Result type returned by declaration operations
pub type DrawResult<T = ()> = Result<T, DrawError>;
