//! Scripted transport for tests.

use anotar_core::{Completion, SaveRequest, Transport, WidgetError};
use std::collections::VecDeque;

/// Transport double that records requests and fires completions on demand.
#[derive(Default)]
pub struct MockTransport {
    available: bool,
    fail_send: Option<String>,
    sent: Vec<SaveRequest>,
    pending: VecDeque<Completion>,
}

impl MockTransport {
    /// An available transport.
    #[must_use]
    pub fn new() -> Self {
        Self {
            available: true,
            ..Self::default()
        }
    }

    /// A transport whose capability check fails.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Make every send fail with the given reason.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            available: true,
            fail_send: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Requests sent so far, oldest first.
    #[must_use]
    pub fn sent(&self) -> &[SaveRequest] {
        &self.sent
    }

    /// Fire the oldest pending completion with the given response.
    ///
    /// Returns false when nothing was pending.
    pub fn fire_next(&mut self, response: Option<&str>) -> bool {
        match self.pending.pop_front() {
            Some(on_complete) => {
                on_complete(response.map(ToString::to_string));
                true
            }
            None => false,
        }
    }

    /// Number of sends whose completion has not fired yet.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Transport for MockTransport {
    fn is_available(&self) -> bool {
        self.available
    }

    fn send(
        &mut self,
        request: SaveRequest,
        on_complete: Completion,
    ) -> Result<(), WidgetError> {
        if let Some(reason) = &self.fail_send {
            return Err(WidgetError::SendFailure(reason.clone()));
        }
        self.sent.push(request);
        self.pending.push_back(on_complete);
        Ok(())
    }
}
