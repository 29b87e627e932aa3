//! Asynchronous save transport.
//!
//! One fire-and-forget POST per save. The transport signals completion
//! through a one-shot callback carrying the response text, or `None` when
//! the response is absent. No timeout, no retry, no cancellation.

use crate::error::WidgetError;
use serde::{Deserialize, Serialize};

/// Default relative endpoint path for comment saves.
pub const DEFAULT_ENDPOINT: &str = "update-comment";

/// Content type header value for the save request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// One save request: which record, which field, what content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRequest {
    /// Relative endpoint path the POST goes to
    pub endpoint: String,
    /// Identifier of the record the comment belongs to
    pub owner_record_id: String,
    /// Identifier of the edited field
    pub field_id: String,
    /// Current text content of the field
    pub content: String,
}

impl SaveRequest {
    /// Create a request for the default endpoint.
    #[must_use]
    pub fn new(
        owner_record_id: impl Into<String>,
        field_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            owner_record_id: owner_record_id.into(),
            field_id: field_id.into(),
            content: content.into(),
        }
    }

    /// Set the endpoint path.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Url-encoded request body:
    /// `ownerRecordId=<id>&fieldId=<id>&content=<urlencoded text>`.
    #[must_use]
    pub fn to_form_body(&self) -> String {
        format!(
            "ownerRecordId={}&fieldId={}&content={}",
            form_encode(&self.owner_record_id),
            form_encode(&self.field_id),
            form_encode(&self.content)
        )
    }
}

/// Percent-encode a string for an `application/x-www-form-urlencoded` body.
///
/// Spaces become `+`; alphanumerics and `-`, `.`, `_`, `*` pass through;
/// everything else is `%XX` per utf-8 byte, uppercase.
#[must_use]
pub fn form_encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// One-shot completion callback. `None` means a null/absent response.
pub type Completion = Box<dyn FnOnce(Option<String>)>;

/// Asynchronous POST transport.
pub trait Transport {
    /// Single capability check: can this environment send at all?
    fn is_available(&self) -> bool;

    /// Send the request, invoking `on_complete` when it finishes.
    ///
    /// # Errors
    ///
    /// [`WidgetError::SendFailure`] if the transport throws while sending.
    fn send(&mut self, request: SaveRequest, on_complete: Completion)
        -> Result<(), WidgetError>;
}
