//! Error types for widget operations.
//!
//! The policy for every kind is the same: abort the operation, surface the
//! error to the hosting layer, never retry, never silently continue.

/// Error produced by expand, save, or completion handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// No asynchronous transport is available in the hosting environment.
    TransportUnavailable,
    /// The completion callback received a null/absent response.
    NullResponse,
    /// A referenced element or control could not be located.
    ElementNotFound(String),
    /// The transport failed while sending the request.
    SendFailure(String),
}

impl std::fmt::Display for WidgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TransportUnavailable => {
                write!(f, "no asynchronous transport available; save aborted")
            }
            Self::NullResponse => write!(f, "save request completed with no response"),
            Self::ElementNotFound(id) => write!(f, "element '{id}' not found"),
            Self::SendFailure(reason) => write!(f, "failed to send save request: {reason}"),
        }
    }
}

impl std::error::Error for WidgetError {}
