//! WASM application entry point.

use super::dom::DomTree;
use super::timer::run_fade;
use super::xhr::XhrTransport;
use anotar_core::{Completion, Fader, WidgetError};
use anotar_widgets::CommentEditor;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;

/// Comment-editing runner for a page of records.
///
/// One instance manages every comment field on the page: editors are
/// created on first touch, keyed by field id, and the save control the
/// expand step inserts is wired back into [`CommentApp::save`].
#[wasm_bindgen]
pub struct CommentApp {
    state: Rc<AppState>,
}

struct AppState {
    tree: Rc<RefCell<DomTree>>,
    fader: Rc<RefCell<Fader>>,
    transport: RefCell<XhrTransport>,
    editors: RefCell<HashMap<String, CommentEditor>>,
    endpoint: String,
}

#[wasm_bindgen]
impl CommentApp {
    /// Create an app saving to the given relative endpoint path.
    #[wasm_bindgen(constructor)]
    pub fn new(endpoint: &str) -> Result<CommentApp, JsValue> {
        console_error_panic_hook::set_once();

        let tree = DomTree::new()?;
        let state = Rc::new(AppState {
            tree: Rc::new(RefCell::new(tree)),
            fader: Rc::new(RefCell::new(Fader::new())),
            transport: RefCell::new(XhrTransport::new()),
            editors: RefCell::new(HashMap::new()),
            endpoint: endpoint.to_string(),
        });

        // Route save-control clicks back into the save flow.
        let weak = Rc::downgrade(&state);
        state
            .tree
            .borrow_mut()
            .set_save_click_handler(Rc::new(move |field_id| {
                if let Some(state) = weak.upgrade() {
                    if let Err(err) = AppState::save_field(&state, &field_id) {
                        report(&err);
                    }
                }
            }));

        Ok(Self { state })
    }

    /// Expand a comment field for editing.
    pub fn expand(&self, owner_record_id: &str, field_id: &str) -> Result<(), JsValue> {
        self.state
            .expand(owner_record_id, field_id)
            .map_err(|err| to_js(&err))
    }

    /// Save a comment field's content.
    pub fn save(&self, owner_record_id: &str, field_id: &str) -> Result<(), JsValue> {
        self.state.ensure_editor(owner_record_id, field_id);
        AppState::save_field(&self.state, field_id).map_err(|err| to_js(&err))
    }
}

impl AppState {
    fn ensure_editor(&self, owner_record_id: &str, field_id: &str) {
        self.editors
            .borrow_mut()
            .entry(field_id.to_string())
            .or_insert_with(|| {
                CommentEditor::new(owner_record_id, field_id).endpoint(self.endpoint.clone())
            });
    }

    fn expand(&self, owner_record_id: &str, field_id: &str) -> Result<(), WidgetError> {
        self.ensure_editor(owner_record_id, field_id);
        let mut editors = self.editors.borrow_mut();
        let editor = editors
            .get_mut(field_id)
            .ok_or_else(|| WidgetError::ElementNotFound(field_id.to_string()))?;
        editor.expand(&mut *self.tree.borrow_mut())
    }

    fn save_field(state: &Rc<Self>, field_id: &str) -> Result<(), WidgetError> {
        let handle = {
            let mut editors = state.editors.borrow_mut();
            let editor = editors
                .get_mut(field_id)
                .ok_or_else(|| WidgetError::ElementNotFound(field_id.to_string()))?;

            let on_complete = completion_for(Rc::downgrade(state), field_id.to_string());
            editor.save(
                &mut *state.tree.borrow_mut(),
                &mut *state.transport.borrow_mut(),
                &mut state.fader.borrow_mut(),
                on_complete,
            )?
        };

        run_fade(Rc::clone(&state.fader), Rc::clone(&state.tree), handle);
        Ok(())
    }
}

/// Completion callback that re-enters the owning editor.
fn completion_for(state: Weak<AppState>, field_id: String) -> Completion {
    Box::new(move |response| {
        let Some(state) = state.upgrade() else {
            return;
        };
        let mut editors = state.editors.borrow_mut();
        if let Some(editor) = editors.get_mut(&field_id) {
            if let Err(err) = editor.complete(&mut *state.tree.borrow_mut(), response) {
                report(&err);
            }
        }
    })
}

fn to_js(err: &WidgetError) -> JsValue {
    let payload = serde_json::json!({ "error": err.to_string() });
    JsValue::from_str(&payload.to_string())
}

fn report(err: &WidgetError) {
    web_sys::console::error_1(&to_js(err));
}

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Log to browser console.
#[wasm_bindgen]
pub fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}
