//! Testing harness for anotar widgets.
//!
//! Zero external dependencies - pure Rust testing. Provides an in-memory
//! [`MockTree`], a scripted [`MockTransport`], and a synchronous fade
//! driver so widget behavior can be exercised without a browser.

mod driver;
mod transport;
mod tree;

pub use driver::run_fade_to_completion;
pub use transport::MockTransport;
pub use tree::MockTree;
