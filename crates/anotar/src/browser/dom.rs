//! DOM implementation of the visual tree.

use anotar_core::{Rgb, VisualTree, WidgetError};
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlTextAreaElement, MouseEvent};

/// [`VisualTree`] over the page's document.
///
/// Fields are expected to be `<textarea>` elements; save controls are
/// inserted as `<button>` siblings directly after their field. Click
/// closures for inserted controls are kept alive here and dropped when
/// the control is removed.
pub struct DomTree {
    document: Document,
    /// Invoked with the field id when a save control is clicked
    on_save_click: Option<Rc<dyn Fn(String)>>,
    click_callbacks: HashMap<String, Closure<dyn FnMut(MouseEvent)>>,
}

impl DomTree {
    /// Create a tree over the current window's document.
    ///
    /// # Errors
    ///
    /// Returns an error when no window or document is present.
    pub fn new() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;
        Ok(Self {
            document,
            on_save_click: None,
            click_callbacks: HashMap::new(),
        })
    }

    /// Register the handler save-control clicks are routed to.
    pub fn set_save_click_handler(&mut self, handler: Rc<dyn Fn(String)>) {
        self.on_save_click = Some(handler);
    }

    fn element(&self, id: &str) -> Result<Element, WidgetError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| WidgetError::ElementNotFound(id.to_string()))
    }

    fn textarea(&self, id: &str) -> Result<HtmlTextAreaElement, WidgetError> {
        // An element of the wrong kind is as unusable as a missing one.
        self.element(id)?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| WidgetError::ElementNotFound(id.to_string()))
    }
}

impl VisualTree for DomTree {
    fn contains(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn text(&self, id: &str) -> Result<String, WidgetError> {
        match self.element(id)?.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => Ok(area.value()),
            Err(el) => Ok(el.text_content().unwrap_or_default()),
        }
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), WidgetError> {
        match self.element(id)?.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => area.set_value(text),
            Err(el) => el.set_text_content(Some(text)),
        }
        Ok(())
    }

    fn rows(&self, id: &str) -> Result<u32, WidgetError> {
        Ok(self.textarea(id)?.rows())
    }

    fn set_rows(&mut self, id: &str, rows: u32) -> Result<(), WidgetError> {
        self.textarea(id)?.set_rows(rows);
        Ok(())
    }

    fn set_background(&mut self, id: &str, color: Rgb) -> Result<(), WidgetError> {
        let el = self
            .element(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| WidgetError::ElementNotFound(id.to_string()))?;
        // An element that rejects the style write is as unusable as a
        // missing one.
        el.style()
            .set_property("background-color", &color.to_hex())
            .map_err(|_| WidgetError::ElementNotFound(id.to_string()))?;
        Ok(())
    }

    fn insert_save_control(
        &mut self,
        field_id: &str,
        control_id: &str,
        label: &str,
    ) -> Result<(), WidgetError> {
        let field = self.element(field_id)?;
        let button = self
            .document
            .create_element("button")
            .map_err(|_| WidgetError::ElementNotFound(field_id.to_string()))?;
        button.set_id(control_id);
        button.set_text_content(Some(label));

        if let Some(handler) = &self.on_save_click {
            let handler = Rc::clone(handler);
            let field_id = field_id.to_string();
            let cb = Closure::<dyn FnMut(MouseEvent)>::new(move |_e: MouseEvent| {
                handler(field_id.clone());
            });
            // A control whose click never fires is worse than no control.
            button
                .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
                .map_err(|_| WidgetError::ElementNotFound(control_id.to_string()))?;
            self.click_callbacks.insert(control_id.to_string(), cb);
        }

        field
            .insert_adjacent_element("afterend", &button)
            .map_err(|_| WidgetError::ElementNotFound(field_id.to_string()))?;
        Ok(())
    }

    fn remove_control(&mut self, control_id: &str) -> Result<(), WidgetError> {
        let control = self.element(control_id)?;
        control.remove();
        self.click_callbacks.remove(control_id);
        Ok(())
    }
}
