//! `CommentEditor` widget: expand to edit, save asynchronously, collapse.
//!
//! One editor manages one editable text region tied to a record. The
//! lifecycle is a three-state machine:
//!
//! - Collapsed → Expanded on an expand request (inserts the save control,
//!   grows the row extent)
//! - Expanded → Saving on save (POSTs the content and kicks off a
//!   highlight fade on the same element; the two are uncoordinated)
//! - Saving → Collapsed when the save's completion fires (recomputes the
//!   row extent from the line count, removes the save control)
//!
//! Errors abort the operation in progress and are returned for the hosting
//! layer to surface; nothing retries and nothing is silently dropped.

use anotar_core::{
    save_control_id, Completion, FadeHandle, FadeParams, Fader, SaveRequest, Transport,
    VisualTree, WidgetError,
};
use serde::{Deserialize, Serialize};

/// Row extent applied to an expanded field.
pub const EXPANDED_ROWS: u32 = 8;

/// Label on the inserted save control.
pub const SAVE_LABEL: &str = "Save";

/// Lifecycle state of one comment field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldState {
    /// At its content-sized row extent, no save control present
    #[default]
    Collapsed,
    /// Grown to the expanded row extent with a save control attached
    Expanded,
    /// A save is in flight; completion has not fired
    Saving,
}

/// Comment-editing widget for one field of one record.
#[derive(Serialize, Deserialize)]
pub struct CommentEditor {
    /// Identifier of the record the comment belongs to
    owner_record_id: String,
    /// Identifier of the editable text region
    field_id: String,
    state: FieldState,
    /// Completion guard: true once the in-flight save has been handled
    #[serde(skip, default = "completed_default")]
    completed: bool,
    expanded_rows: u32,
    fade_params: FadeParams,
    endpoint: Option<String>,
}

fn completed_default() -> bool {
    true
}

impl CommentEditor {
    /// Create an editor for a field of a record.
    #[must_use]
    pub fn new(owner_record_id: impl Into<String>, field_id: impl Into<String>) -> Self {
        Self {
            owner_record_id: owner_record_id.into(),
            field_id: field_id.into(),
            state: FieldState::Collapsed,
            completed: true,
            expanded_rows: EXPANDED_ROWS,
            fade_params: FadeParams::default(),
            endpoint: None,
        }
    }

    /// Set the expanded row extent.
    #[must_use]
    pub const fn expanded_rows(mut self, rows: u32) -> Self {
        self.expanded_rows = rows;
        self
    }

    /// Set the highlight fade parameters.
    #[must_use]
    pub const fn fade_params(mut self, params: FadeParams) -> Self {
        self.fade_params = params;
        self
    }

    /// Set the save endpoint path.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> FieldState {
        self.state
    }

    /// The field this editor manages.
    #[must_use]
    pub fn field_id(&self) -> &str {
        &self.field_id
    }

    /// The record the comment belongs to.
    #[must_use]
    pub fn owner_record_id(&self) -> &str {
        &self.owner_record_id
    }

    /// Expand the field for editing.
    ///
    /// Grows the row extent and inserts the save control. Idempotent: a
    /// field already at the expanded row extent is left alone, so repeated
    /// requests never insert a second control.
    ///
    /// # Errors
    ///
    /// [`WidgetError::ElementNotFound`] if the field element is missing.
    pub fn expand(&mut self, tree: &mut dyn VisualTree) -> Result<(), WidgetError> {
        if tree.rows(&self.field_id)? == self.expanded_rows {
            return Ok(());
        }

        tree.insert_save_control(&self.field_id, &save_control_id(&self.field_id), SAVE_LABEL)?;
        tree.set_rows(&self.field_id, self.expanded_rows)?;
        self.state = FieldState::Expanded;
        Ok(())
    }

    /// Save the field's content.
    ///
    /// Reads the current text, issues one asynchronous POST, and -
    /// independently, without waiting - registers a highlight fade on the
    /// field element as feedback that a save was initiated (not that it
    /// completed). The returned handle is for the embedding driver to run.
    ///
    /// `on_complete` is forwarded to the transport; the embedder routes it
    /// back into [`Self::complete`].
    ///
    /// # Errors
    ///
    /// - [`WidgetError::TransportUnavailable`]: nothing sent, field stays
    ///   as it was.
    /// - [`WidgetError::ElementNotFound`]: the field element is missing.
    /// - [`WidgetError::SendFailure`]: the transport threw while sending.
    pub fn save(
        &mut self,
        tree: &mut dyn VisualTree,
        transport: &mut dyn Transport,
        fader: &mut Fader,
        on_complete: Completion,
    ) -> Result<FadeHandle, WidgetError> {
        if !transport.is_available() {
            return Err(WidgetError::TransportUnavailable);
        }

        let content = tree.text(&self.field_id)?;
        let mut request = SaveRequest::new(&self.owner_record_id, &self.field_id, content);
        if let Some(endpoint) = &self.endpoint {
            request = request.endpoint(endpoint.clone());
        }

        transport.send(request, on_complete)?;

        self.completed = false;
        self.state = FieldState::Saving;
        Ok(fader.create_with_params(self.field_id.clone(), self.fade_params))
    }

    /// Handle the save's completion.
    ///
    /// Runs at most once per save: a second delivery returns `Ok(false)`
    /// and touches nothing. On a real response the row extent is recomputed
    /// from the current line count and the save control is removed.
    ///
    /// # Errors
    ///
    /// - [`WidgetError::NullResponse`]: the response was absent; the field
    ///   stays in Saving.
    /// - [`WidgetError::ElementNotFound`]: the field or its save control
    ///   could not be located.
    pub fn complete(
        &mut self,
        tree: &mut dyn VisualTree,
        response: Option<String>,
    ) -> Result<bool, WidgetError> {
        if self.completed {
            return Ok(false);
        }
        self.completed = true;

        if response.is_none() {
            return Err(WidgetError::NullResponse);
        }

        let content = tree.text(&self.field_id)?;
        tree.set_rows(&self.field_id, collapsed_rows(&content))?;
        tree.remove_control(&save_control_id(&self.field_id))?;
        self.state = FieldState::Collapsed;
        Ok(true)
    }
}

/// Collapsed row extent for text content: the number of line boundaries,
/// including the final implicit one. `"a\nb\nc"` is three rows; empty
/// content is one.
#[must_use]
pub fn collapsed_rows(content: &str) -> u32 {
    content.split('\n').count() as u32
}
