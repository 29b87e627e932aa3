//! Browser host for anotar widgets.
//!
//! This module bridges the widget layer's collaborator traits to the real
//! page: [`DomTree`] implements the visual tree over web-sys, `XhrTransport`
//! POSTs saves over `XMLHttpRequest`, and the timer driver runs fades on
//! `setTimeout`.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod timer;
#[cfg(target_arch = "wasm32")]
pub mod xhr;

#[cfg(target_arch = "wasm32")]
pub use app::CommentApp;
#[cfg(target_arch = "wasm32")]
pub use dom::DomTree;
#[cfg(target_arch = "wasm32")]
pub use timer::run_fade;
#[cfg(target_arch = "wasm32")]
pub use xhr::XhrTransport;
