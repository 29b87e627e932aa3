//! Timed background-color fades.
//!
//! A [`Fader`] owns every fade instance and hands out stable handles in
//! registration order. It performs no scheduling itself: a driver calls
//! [`Fader::tick`] and honors the returned [`TickOutcome`], so the same
//! engine runs under a browser timer or a synchronous test loop.

use crate::color::Rgb;
use crate::tree::VisualTree;
use serde::{Deserialize, Serialize};

/// Default delay between ticks, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 15;
/// Default percent advanced per tick.
pub const DEFAULT_STEP: u32 = 1;

/// Parameters for one fade run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FadeParams {
    /// Color applied at percent 0
    pub start: Rgb,
    /// Color approached as percent nears 100
    pub end: Rgb,
    /// Delay between ticks in milliseconds
    pub tick_interval_ms: u32,
    /// Percent advanced per tick; zero is treated as one
    pub step: u32,
}

impl Default for FadeParams {
    fn default() -> Self {
        Self {
            start: Rgb::PALE_YELLOW,
            end: Rgb::WHITE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            step: DEFAULT_STEP,
        }
    }
}

impl FadeParams {
    /// Create parameters for a start/end color pair.
    #[must_use]
    pub fn new(start: Rgb, end: Rgb) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }

    /// Set the tick interval in milliseconds.
    #[must_use]
    pub const fn tick_interval_ms(mut self, ms: u32) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Set the percent step per tick (clamped to at least 1).
    #[must_use]
    pub fn step(mut self, step: u32) -> Self {
        self.step = step.max(1);
        self
    }
}

/// One registered fade instance.
#[derive(Debug, Clone)]
struct Fade {
    /// Target element identifier
    target: String,
    params: FadeParams,
    /// Current percent, advanced by `step` each tick
    percent: u32,
    /// Inert instances tick without visible effect
    inert: bool,
}

/// Stable handle to a registered fade, by registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FadeHandle(pub usize);

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A color was applied; tick again after `delay_ms`.
    Continue {
        /// Delay before the next tick, in milliseconds
        delay_ms: u32,
    },
    /// The run is over; the instance is idle but stays registered.
    Done,
}

/// Owned registry of fade instances.
///
/// Append-only; handles index registration order and are never reused.
/// Pass the fader explicitly to whoever drives it — there is no global.
#[derive(Debug, Default)]
pub struct Fader {
    fades: Vec<Fade>,
}

impl Fader {
    /// Create an empty fader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fade from a typed color pair with default timing.
    pub fn create(&mut self, target: impl Into<String>, start: Rgb, end: Rgb) -> FadeHandle {
        self.create_with_params(target, FadeParams::new(start, end))
    }

    /// Register a fade with explicit parameters.
    ///
    /// An empty target id yields an inert instance: ticking it has no
    /// visible effect and completes immediately.
    pub fn create_with_params(
        &mut self,
        target: impl Into<String>,
        params: FadeParams,
    ) -> FadeHandle {
        let target = target.into();
        let inert = target.is_empty();
        self.fades.push(Fade {
            target,
            params,
            percent: 0,
            inert,
        });
        FadeHandle(self.fades.len() - 1)
    }

    /// Register a fade from hex color strings (leading `#` accepted).
    ///
    /// An empty target or an unparsable color degrades to an inert
    /// instance rather than failing.
    pub fn create_from_hex(
        &mut self,
        target: impl Into<String>,
        start: &str,
        end: &str,
    ) -> FadeHandle {
        match (Rgb::from_hex(start), Rgb::from_hex(end)) {
            (Ok(start), Ok(end)) => self.create(target, start, end),
            _ => {
                // Missing or bad colors: construct inert, never apply.
                self.create_with_params(String::new(), FadeParams::default())
            }
        }
    }

    /// Advance one fade by a single tick.
    ///
    /// At entry with percent >= 100 the instance resets to 0 and the run
    /// ends without a final color application. Otherwise the blend at the
    /// current percent is applied to the target's background and percent
    /// advances by the configured step.
    pub fn tick(&mut self, handle: FadeHandle, tree: &mut dyn VisualTree) -> TickOutcome {
        let Some(fade) = self.fades.get_mut(handle.0) else {
            return TickOutcome::Done;
        };

        if fade.inert {
            return TickOutcome::Done;
        }

        if fade.percent >= 100 {
            fade.percent = 0;
            return TickOutcome::Done;
        }

        let color = Rgb::blend(fade.params.start, fade.params.end, fade.percent);
        if tree.set_background(&fade.target, color).is_err() {
            // Target vanished mid-run; end the run quietly.
            return TickOutcome::Done;
        }

        // The field is public; a zero step must not stall the run.
        fade.percent += fade.params.step.max(1);
        TickOutcome::Continue {
            delay_ms: fade.params.tick_interval_ms,
        }
    }

    /// Current percent of a registered fade.
    #[must_use]
    pub fn percent(&self, handle: FadeHandle) -> Option<u32> {
        self.fades.get(handle.0).map(|f| f.percent)
    }

    /// Whether a fade is idle (at percent 0, not mid-run).
    #[must_use]
    pub fn is_idle(&self, handle: FadeHandle) -> bool {
        self.fades.get(handle.0).map_or(true, |f| f.percent == 0)
    }

    /// Number of registered fades.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fades.len()
    }

    /// Whether no fades are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fades.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WidgetError;
    use std::collections::HashMap;

    /// Minimal tree that records every background write.
    #[derive(Default)]
    struct RecordingTree {
        backgrounds: HashMap<String, Vec<Rgb>>,
        missing: bool,
    }

    impl VisualTree for RecordingTree {
        fn contains(&self, _id: &str) -> bool {
            !self.missing
        }
        fn text(&self, id: &str) -> Result<String, WidgetError> {
            Err(WidgetError::ElementNotFound(id.to_string()))
        }
        fn set_text(&mut self, id: &str, _text: &str) -> Result<(), WidgetError> {
            Err(WidgetError::ElementNotFound(id.to_string()))
        }
        fn rows(&self, id: &str) -> Result<u32, WidgetError> {
            Err(WidgetError::ElementNotFound(id.to_string()))
        }
        fn set_rows(&mut self, id: &str, _rows: u32) -> Result<(), WidgetError> {
            Err(WidgetError::ElementNotFound(id.to_string()))
        }
        fn set_background(&mut self, id: &str, color: Rgb) -> Result<(), WidgetError> {
            if self.missing {
                return Err(WidgetError::ElementNotFound(id.to_string()));
            }
            self.backgrounds.entry(id.to_string()).or_default().push(color);
            Ok(())
        }
        fn insert_save_control(
            &mut self,
            field_id: &str,
            _control_id: &str,
            _label: &str,
        ) -> Result<(), WidgetError> {
            Err(WidgetError::ElementNotFound(field_id.to_string()))
        }
        fn remove_control(&mut self, control_id: &str) -> Result<(), WidgetError> {
            Err(WidgetError::ElementNotFound(control_id.to_string()))
        }
    }

    fn run_to_done(fader: &mut Fader, handle: FadeHandle, tree: &mut RecordingTree) -> usize {
        let mut ticks = 0;
        while let TickOutcome::Continue { .. } = fader.tick(handle, tree) {
            ticks += 1;
            assert!(ticks < 10_000, "fade failed to terminate");
        }
        ticks
    }

    #[test]
    fn test_handles_follow_registration_order() {
        let mut fader = Fader::new();
        let a = fader.create("a", Rgb::PALE_YELLOW, Rgb::WHITE);
        let b = fader.create("b", Rgb::PALE_YELLOW, Rgb::WHITE);
        assert_eq!(a, FadeHandle(0));
        assert_eq!(b, FadeHandle(1));
        assert_eq!(fader.len(), 2);
    }

    #[test]
    fn test_step_one_applies_exactly_100_colors() {
        let mut fader = Fader::new();
        let mut tree = RecordingTree::default();
        let handle = fader.create("el", Rgb::PALE_YELLOW, Rgb::WHITE);

        let ticks = run_to_done(&mut fader, handle, &mut tree);

        // Percents 0..=99 each apply a color; the entry at 100 does not.
        assert_eq!(ticks, 100);
        let applied = &tree.backgrounds["el"];
        assert_eq!(applied.len(), 100);
        assert_eq!(applied[0], Rgb::PALE_YELLOW);
        assert_eq!(*applied.last().unwrap(), Rgb::blend(Rgb::PALE_YELLOW, Rgb::WHITE, 99));
        // End color is never applied exactly.
        assert!(applied.iter().all(|c| *c != Rgb::WHITE));
    }

    #[test]
    fn test_yellow_fade_channels() {
        let mut fader = Fader::new();
        let mut tree = RecordingTree::default();
        let handle = fader.create("el", Rgb::PALE_YELLOW, Rgb::WHITE);
        run_to_done(&mut fader, handle, &mut tree);

        let applied = &tree.backgrounds["el"];
        // R and G stay at 0xFF throughout; B rises from 0x99 toward 0xFF.
        assert!(applied.iter().all(|c| c.r == 0xFF && c.g == 0xFF));
        assert_eq!(applied[0].b, 0x99);
        assert!(applied.windows(2).all(|w| w[0].b <= w[1].b));
        assert_eq!(applied[99], Rgb::blend(Rgb::PALE_YELLOW, Rgb::WHITE, 99));
    }

    #[test]
    fn test_terminal_tick_resets_percent() {
        let mut fader = Fader::new();
        let mut tree = RecordingTree::default();
        let handle = fader.create("el", Rgb::PALE_YELLOW, Rgb::WHITE);
        run_to_done(&mut fader, handle, &mut tree);

        assert_eq!(fader.percent(handle), Some(0));
        assert!(fader.is_idle(handle));
    }

    #[test]
    fn test_finished_fade_can_run_again() {
        let mut fader = Fader::new();
        let mut tree = RecordingTree::default();
        let handle = fader.create("el", Rgb::PALE_YELLOW, Rgb::WHITE);
        run_to_done(&mut fader, handle, &mut tree);
        let second = run_to_done(&mut fader, handle, &mut tree);
        assert_eq!(second, 100);
        assert_eq!(tree.backgrounds["el"].len(), 200);
    }

    #[test]
    fn test_step_overshoots_past_100() {
        let mut fader = Fader::new();
        let mut tree = RecordingTree::default();
        let params = FadeParams::default().step(7);
        let handle = fader.create_with_params("el", params);

        let ticks = run_to_done(&mut fader, handle, &mut tree);

        // Percents 0, 7, ..., 98 apply; the next entry sees 105 and stops.
        assert_eq!(ticks, 15);
        assert_eq!(fader.percent(handle), Some(0));
    }

    #[test]
    fn test_zero_step_advances_like_one() {
        let mut fader = Fader::new();
        let mut tree = RecordingTree::default();
        let params = FadeParams {
            step: 0,
            ..FadeParams::default()
        };
        let handle = fader.create_with_params("el", params);

        let ticks = run_to_done(&mut fader, handle, &mut tree);

        assert_eq!(ticks, 100);
        assert_eq!(fader.percent(handle), Some(0));
    }

    #[test]
    fn test_inert_empty_target() {
        let mut fader = Fader::new();
        let mut tree = RecordingTree::default();
        let handle = fader.create("", Rgb::PALE_YELLOW, Rgb::WHITE);
        assert_eq!(fader.tick(handle, &mut tree), TickOutcome::Done);
        assert!(tree.backgrounds.is_empty());
    }

    #[test]
    fn test_inert_bad_hex_color() {
        let mut fader = Fader::new();
        let mut tree = RecordingTree::default();
        let handle = fader.create_from_hex("el", "#not-a-color", "#FFFFFF");
        assert_eq!(fader.tick(handle, &mut tree), TickOutcome::Done);
        assert!(tree.backgrounds.is_empty());
    }

    #[test]
    fn test_create_from_hex_strips_hash() {
        let mut fader = Fader::new();
        let mut tree = RecordingTree::default();
        let handle = fader.create_from_hex("el", "FFFF99", "#FFFFFF");
        assert!(matches!(
            fader.tick(handle, &mut tree),
            TickOutcome::Continue { delay_ms: DEFAULT_TICK_INTERVAL_MS }
        ));
        assert_eq!(tree.backgrounds["el"][0], Rgb::PALE_YELLOW);
    }

    #[test]
    fn test_unknown_handle_is_done() {
        let mut fader = Fader::new();
        let mut tree = RecordingTree::default();
        assert_eq!(fader.tick(FadeHandle(9), &mut tree), TickOutcome::Done);
    }

    #[test]
    fn test_vanished_target_ends_run() {
        let mut fader = Fader::new();
        let mut tree = RecordingTree { missing: true, ..RecordingTree::default() };
        let handle = fader.create("el", Rgb::PALE_YELLOW, Rgb::WHITE);
        assert_eq!(fader.tick(handle, &mut tree), TickOutcome::Done);
    }
}
