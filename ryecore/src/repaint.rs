//! Repaint and tick scheduling.
//!
//! egui only runs a frame when something wakes it. Pointer movement does
//! that on its own, but the playground also wants a fixed-interval tick so
//! the escape pipeline is re-run even when no input arrives (the surface
//! may have been resized under a resting pointer, for instance).
//!
//! `RepaintController` decides *why* a frame is running and schedules the
//! next one:
//!
//! 1. **Input-driven**: the pointer moved or a key was pressed.
//! 2. **Tick**: the ticking interval elapsed while ticking is on.
//! 3. **Idle**: nothing happened. No repaint is requested.

use std::time::{Duration, Instant};

/// Tick interval used when nothing else is configured.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Why this frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame, always painted.
    Init,
    /// User input (mouse move, key press, scroll).
    Input,
    /// App-requested repaint (state changed internally).
    StateChange,
    /// Fixed-interval tick.
    Tick,
}

impl RepaintReason {
    pub fn label(self) -> &'static str {
        match self {
            RepaintReason::Init => "init",
            RepaintReason::Input => "input",
            RepaintReason::StateChange => "moved",
            RepaintReason::Tick => "tick",
        }
    }
}

/// Drop this into the app struct and call [`begin_frame`](Self::begin_frame)
/// at the top of `update()` and [`end_frame`](Self::end_frame) at the bottom.
pub struct RepaintController {
    ticking: bool,
    needs_repaint: bool,
    interval: Duration,
    last_tick: Instant,
    frame: u64,
    reason: RepaintReason,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_TICK_INTERVAL)
    }

    /// A zero interval disables ticking entirely.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            ticking: false,
            needs_repaint: false,
            interval,
            last_tick: Instant::now(),
            frame: 0,
            reason: RepaintReason::Init,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Turn the periodic tick on or off.
    pub fn set_ticking(&mut self, ticking: bool) {
        self.ticking = ticking && !self.interval.is_zero();
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Request a single repaint on the next opportunity.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    pub fn reason(&self) -> RepaintReason {
        self.reason
    }

    /// Call at the **start** of `update()`.
    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.pointer.is_moving()
        });
        self.classify(had_input);
    }

    fn classify(&mut self, had_input: bool) {
        self.reason = if self.frame == 0 {
            RepaintReason::Init
        } else if had_input {
            RepaintReason::Input
        } else if self.needs_repaint {
            RepaintReason::StateChange
        } else if self.ticking {
            RepaintReason::Tick
        } else {
            RepaintReason::Input
        };

        self.needs_repaint = false;
    }

    /// Call at the **end** of `update()`.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;

        if self.needs_repaint {
            ctx.request_repaint();
        } else if self.ticking {
            let due = self.interval.saturating_sub(self.last_tick.elapsed());
            if due.is_zero() {
                self.last_tick = Instant::now();
                ctx.request_repaint_after(self.interval);
            } else {
                ctx.request_repaint_after(due);
            }
        }
        // else: egui sleeps until next input.
    }
}
