//! `setTimeout` fade driver.

use super::dom::DomTree;
use anotar_core::{FadeHandle, Fader, TickOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Run a registered fade to completion on the browser's timer.
///
/// The first tick happens immediately; each continuation captures the
/// shared fader and tree directly, so there is no global registry lookup.
/// There is no cancellation: a started fade runs until the engine reports
/// it done.
pub fn run_fade(fader: Rc<RefCell<Fader>>, tree: Rc<RefCell<DomTree>>, handle: FadeHandle) {
    step(fader, tree, handle);
}

fn step(fader: Rc<RefCell<Fader>>, tree: Rc<RefCell<DomTree>>, handle: FadeHandle) {
    let outcome = fader.borrow_mut().tick(handle, &mut *tree.borrow_mut());

    if let TickOutcome::Continue { delay_ms } = outcome {
        let Some(window) = web_sys::window() else {
            return;
        };
        let next: js_sys::Function =
            Closure::once_into_js(move || step(fader, tree, handle)).unchecked_into();
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&next, delay_ms as i32)
            .ok();
    }
}
