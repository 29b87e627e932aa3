//! Synchronous fade driver for tests.

use anotar_core::{FadeHandle, Fader, TickOutcome, VisualTree};

/// Tick a fade until it reports [`TickOutcome::Done`].
///
/// Returns the number of ticks that applied a color. Panics after
/// `max_ticks` to keep a broken fade from hanging the test run.
pub fn run_fade_to_completion(
    fader: &mut Fader,
    handle: FadeHandle,
    tree: &mut dyn VisualTree,
    max_ticks: usize,
) -> usize {
    let mut ticks = 0;
    while let TickOutcome::Continue { .. } = fader.tick(handle, tree) {
        ticks += 1;
        assert!(ticks <= max_ticks, "fade exceeded {max_ticks} ticks");
    }
    ticks
}
