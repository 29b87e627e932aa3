//! `XMLHttpRequest` save transport.

use anotar_core::{transport::FORM_CONTENT_TYPE, Completion, SaveRequest, Transport, WidgetError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::XmlHttpRequest;

/// [`Transport`] that POSTs saves over `XMLHttpRequest`.
///
/// Fire-and-forget: no timeout and no abort once sent. The completion
/// callback receives the response text, or `None` when the request
/// finished without one.
#[derive(Debug, Default)]
pub struct XhrTransport;

impl XhrTransport {
    /// Create the transport.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Transport for XhrTransport {
    fn is_available(&self) -> bool {
        XmlHttpRequest::new().is_ok()
    }

    fn send(
        &mut self,
        request: SaveRequest,
        on_complete: Completion,
    ) -> Result<(), WidgetError> {
        let xhr = XmlHttpRequest::new().map_err(|_| WidgetError::TransportUnavailable)?;

        xhr.open("POST", &request.endpoint)
            .map_err(|e| WidgetError::SendFailure(format!("{e:?}")))?;
        xhr.set_request_header("Content-Type", FORM_CONTENT_TYPE)
            .map_err(|e| WidgetError::SendFailure(format!("{e:?}")))?;

        // readyState fires repeatedly; deliver the one-shot completion on
        // the first DONE and absorb the rest here.
        let mut pending = Some(on_complete);
        let xhr_for_cb = xhr.clone();
        let onreadystatechange = Closure::<dyn FnMut()>::new(move || {
            if xhr_for_cb.ready_state() == XmlHttpRequest::DONE {
                if let Some(cb) = pending.take() {
                    cb(xhr_for_cb.response_text().ok().flatten());
                }
            }
        });
        xhr.set_onreadystatechange(Some(onreadystatechange.as_ref().unchecked_ref()));
        // The request outlives this call; the closure must too.
        onreadystatechange.forget();

        xhr.send_with_opt_str(Some(&request.to_form_body()))
            .map_err(|e| WidgetError::SendFailure(format!("{e:?}")))
    }
}
