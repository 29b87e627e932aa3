//! In-memory visual tree for tests.

use anotar_core::{Rgb, VisualTree, WidgetError};
use std::collections::HashMap;

/// One element in the mock tree.
#[derive(Debug, Clone, Default)]
struct MockElement {
    text: String,
    rows: u32,
    /// Every background color ever applied, in order
    backgrounds: Vec<Rgb>,
    /// Child control ids, in insertion order
    controls: Vec<String>,
}

/// In-memory [`VisualTree`] that records every mutation for assertions.
#[derive(Debug, Default)]
pub struct MockTree {
    elements: HashMap<String, MockElement>,
}

impl MockTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text-area element with initial content and row extent.
    #[must_use]
    pub fn with_textarea(mut self, id: impl Into<String>, text: impl Into<String>, rows: u32) -> Self {
        self.elements.insert(
            id.into(),
            MockElement {
                text: text.into(),
                rows,
                ..MockElement::default()
            },
        );
        self
    }

    /// Every background color applied to an element, oldest first.
    #[must_use]
    pub fn background_history(&self, id: &str) -> &[Rgb] {
        match self.elements.get(id) {
            Some(el) => &el.backgrounds,
            None => &[],
        }
    }

    /// Number of controls currently attached to a field.
    #[must_use]
    pub fn control_count(&self, field_id: &str) -> usize {
        self.elements.get(field_id).map_or(0, |el| el.controls.len())
    }

    fn get(&self, id: &str) -> Result<&MockElement, WidgetError> {
        self.elements
            .get(id)
            .ok_or_else(|| WidgetError::ElementNotFound(id.to_string()))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut MockElement, WidgetError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| WidgetError::ElementNotFound(id.to_string()))
    }
}

impl VisualTree for MockTree {
    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn text(&self, id: &str) -> Result<String, WidgetError> {
        Ok(self.get(id)?.text.clone())
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), WidgetError> {
        self.get_mut(id)?.text = text.to_string();
        Ok(())
    }

    fn rows(&self, id: &str) -> Result<u32, WidgetError> {
        Ok(self.get(id)?.rows)
    }

    fn set_rows(&mut self, id: &str, rows: u32) -> Result<(), WidgetError> {
        self.get_mut(id)?.rows = rows;
        Ok(())
    }

    fn set_background(&mut self, id: &str, color: Rgb) -> Result<(), WidgetError> {
        self.get_mut(id)?.backgrounds.push(color);
        Ok(())
    }

    fn insert_save_control(
        &mut self,
        field_id: &str,
        control_id: &str,
        _label: &str,
    ) -> Result<(), WidgetError> {
        self.get_mut(field_id)?.controls.push(control_id.to_string());
        self.elements
            .insert(control_id.to_string(), MockElement::default());
        Ok(())
    }

    fn remove_control(&mut self, control_id: &str) -> Result<(), WidgetError> {
        if self.elements.remove(control_id).is_none() {
            return Err(WidgetError::ElementNotFound(control_id.to_string()));
        }
        for el in self.elements.values_mut() {
            el.controls.retain(|c| c != control_id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_is_an_error() {
        let tree = MockTree::new();
        assert_eq!(
            tree.text("nope"),
            Err(WidgetError::ElementNotFound("nope".to_string()))
        );
    }

    #[test]
    fn test_insert_and_remove_control() {
        let mut tree = MockTree::new().with_textarea("field", "", 3);
        tree.insert_save_control("field", "save-field", "Save").unwrap();
        assert_eq!(tree.control_count("field"), 1);
        assert!(tree.contains("save-field"));

        tree.remove_control("save-field").unwrap();
        assert_eq!(tree.control_count("field"), 0);
        assert!(!tree.contains("save-field"));
        assert!(tree.remove_control("save-field").is_err());
    }

    #[test]
    fn test_background_history_records_in_order() {
        let mut tree = MockTree::new().with_textarea("field", "", 3);
        tree.set_background("field", Rgb::PALE_YELLOW).unwrap();
        tree.set_background("field", Rgb::WHITE).unwrap();
        assert_eq!(
            tree.background_history("field"),
            &[Rgb::PALE_YELLOW, Rgb::WHITE]
        );
    }
}
