//! The mounted playground: wires the pointer and viewport feeds into the
//! proximity gate and the placement solver.
//!
//! An [`Escaper`] exists exactly while the playground is on screen. It
//! subscribes to both feeds when mounted and drops the subscriptions when
//! it is dropped. Every call to [`Escaper::evaluate`] runs the whole
//! pipeline once on the current values: readiness check, proximity gate,
//! placement, publish.

use crate::config::EscapeConfig;
use crate::error::{EscapeError, Unready};
use crate::feed::{Feed, Subscription};
use crate::geometry::{Point, Viewport};
use crate::placement;
use crate::proximity::should_escape;
use rand::rngs::ThreadRng;
use rand::Rng;

/// What one evaluation did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Pointer or viewport not observed yet; nothing was evaluated.
    NotReady(Unready),
    /// Pointer is far enough away.
    Stayed,
    Moved { from: Point, to: Point },
    /// No placement fits the viewport; the button kept its position.
    Blocked,
}

pub struct Escaper<R: Rng = ThreadRng> {
    config: EscapeConfig,
    button: Point,
    pointer: Subscription<Point>,
    viewport: Subscription<Viewport>,
    rng: R,
    escapes: u64,
    blocked: bool,
}

impl Escaper<ThreadRng> {
    pub fn mount(
        config: EscapeConfig,
        start: Point,
        pointer_feed: &Feed<Point>,
        viewport_feed: &Feed<Viewport>,
    ) -> Self {
        Self::mount_with_rng(config, start, pointer_feed, viewport_feed, rand::thread_rng())
    }
}

impl<R: Rng> Escaper<R> {
    /// Mount with an explicit jitter source.
    pub fn mount_with_rng(
        config: EscapeConfig,
        start: Point,
        pointer_feed: &Feed<Point>,
        viewport_feed: &Feed<Viewport>,
        rng: R,
    ) -> Self {
        Self {
            config,
            button: start,
            pointer: pointer_feed.subscribe(),
            viewport: viewport_feed.subscribe(),
            rng,
            escapes: 0,
            blocked: false,
        }
    }

    /// Current button position, surface-local.
    pub fn button(&self) -> Point {
        self.button
    }

    /// Put the button somewhere explicitly (e.g. a reset from the menu).
    pub fn place(&mut self, at: Point) {
        self.button = at;
        self.blocked = false;
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer.latest()
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport.latest()
    }

    /// How many times the button has moved since mounting.
    pub fn escapes(&self) -> u64 {
        self.escapes
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Both inputs, once they have real values.
    ///
    /// A pointer parked on the zero point or a collapsed viewport count as
    /// not observed: both are what providers report before their first
    /// real measurement.
    pub fn readiness(&self) -> Result<(Point, Viewport), EscapeError> {
        self.inputs().map_err(EscapeError::NotReady)
    }

    fn inputs(&self) -> Result<(Point, Viewport), Unready> {
        let viewport = self
            .viewport
            .latest()
            .filter(|v| v.is_measured())
            .ok_or(Unready::Viewport)?;
        let pointer = self
            .pointer
            .latest()
            .filter(|p| !p.is_zero())
            .ok_or(Unready::Pointer)?;
        Ok((pointer, viewport))
    }

    /// Run the pipeline once.
    pub fn evaluate(&mut self) -> Outcome {
        let (pointer, viewport) = match self.inputs() {
            Ok(inputs) => inputs,
            Err(what) => return Outcome::NotReady(what),
        };

        if !should_escape(pointer, self.button, self.config.threshold_distance) {
            return Outcome::Stayed;
        }

        match placement::solve(
            pointer,
            self.button,
            self.config.escape_distance,
            viewport,
            self.config.margin,
            &mut self.rng,
        ) {
            Ok(to) => {
                let from = self.button;
                self.button = to;
                self.escapes += 1;
                self.blocked = false;
                Outcome::Moved { from, to }
            }
            Err(e) => {
                if !self.blocked {
                    eprintln!("[ryebutton] button stays at ({:.0}, {:.0}): {}", self.button.x, self.button.y, e);
                }
                self.blocked = true;
                Outcome::Blocked
            }
        }
    }
}
