//! Widget implementations for the anotar toolkit.

pub mod comment;

pub use comment::{collapsed_rows, CommentEditor, FieldState, EXPANDED_ROWS, SAVE_LABEL};
