//! Visual-tree collaborator trait.
//!
//! This is a minimal abstraction over the page's element tree. The widget
//! layer drives it; hosts implement it (a DOM bridge in the browser, an
//! in-memory tree in tests). Click-handler wiring stays on the host side.

use crate::color::Rgb;
use crate::error::WidgetError;

/// Identifier prefix for save controls derived from a field id.
pub const SAVE_CONTROL_PREFIX: &str = "save-";

/// Derive the save-control identifier for a field.
#[must_use]
pub fn save_control_id(field_id: &str) -> String {
    format!("{SAVE_CONTROL_PREFIX}{field_id}")
}

/// Capability set the widget layer consumes from its host.
///
/// Every accessor that names an element returns
/// [`WidgetError::ElementNotFound`] when the identifier does not resolve.
pub trait VisualTree {
    /// Whether an element with this identifier exists.
    fn contains(&self, id: &str) -> bool;

    /// Read an element's text content.
    fn text(&self, id: &str) -> Result<String, WidgetError>;

    /// Replace an element's text content.
    fn set_text(&mut self, id: &str, text: &str) -> Result<(), WidgetError>;

    /// Read an element's visible row extent.
    fn rows(&self, id: &str) -> Result<u32, WidgetError>;

    /// Set an element's visible row extent.
    fn set_rows(&mut self, id: &str, rows: u32) -> Result<(), WidgetError>;

    /// Set an element's background color.
    fn set_background(&mut self, id: &str, color: Rgb) -> Result<(), WidgetError>;

    /// Insert a save control attached to the field's element. Placement
    /// is up to the host; the control must be addressable by `control_id`.
    fn insert_save_control(
        &mut self,
        field_id: &str,
        control_id: &str,
        label: &str,
    ) -> Result<(), WidgetError>;

    /// Remove a previously inserted control.
    fn remove_control(&mut self, control_id: &str) -> Result<(), WidgetError>;
}
