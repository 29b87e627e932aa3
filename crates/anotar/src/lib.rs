//! Browser runtime for the anotar comment-highlight toolkit.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { CommentApp } from './anotar.js';
//!
//! async function main() {
//!     await init();
//!     const app = new CommentApp('log/comments');
//!     app.expand('obs-204', 'comment-3');
//!     // the inserted save control calls app.save on click
//! }
//! ```

pub mod browser;

pub use anotar_core::{
    FadeHandle, FadeParams, Fader, Rgb, SaveRequest, TickOutcome, Transport, VisualTree,
    WidgetError,
};
pub use anotar_widgets::{collapsed_rows, CommentEditor, FieldState, EXPANDED_ROWS};
