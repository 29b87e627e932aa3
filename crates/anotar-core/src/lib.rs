//! Core types and traits for the anotar comment-highlight toolkit.
//!
//! This crate provides the foundations used throughout anotar:
//! - Color representation: [`Rgb`] with hex parsing and percent blending
//! - The fade engine: [`Fader`], [`FadeParams`], [`TickOutcome`]
//! - Collaborator seams: [`VisualTree`] and [`Transport`]
//! - Error types: [`WidgetError`], [`ColorParseError`]

mod color;
mod error;
pub mod fade;
pub mod transport;
pub mod tree;

pub use color::{ColorParseError, Rgb};
pub use error::WidgetError;
pub use fade::{FadeHandle, FadeParams, Fader, TickOutcome};
pub use transport::{form_encode, Completion, SaveRequest, Transport};
pub use tree::{save_control_id, VisualTree, SAVE_CONTROL_PREFIX};
