//! Proximity gate: does the pointer sit close enough to scare the button?

use crate::geometry::Point;

/// True when the pointer is within `threshold` of the button.
///
/// The boundary is inclusive: a pointer exactly `threshold` away triggers
/// an escape, only a strictly greater distance leaves the button alone.
///
/// Callers are expected to check readiness first. A pointer that was never
/// observed is not a real position and must not reach this function.
pub fn should_escape(pointer: Point, button: Point, threshold: f64) -> bool {
    pointer.distance(button) <= threshold
}
