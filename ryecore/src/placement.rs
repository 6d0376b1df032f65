//! Escape placement: pick where the button jumps to.
//!
//! The button only ever lands on one of [`CANDIDATE_COUNT`] evenly spaced
//! points on the circle around its current position. Samples outside the
//! margin-inset viewport are discarded and the survivor farthest from the
//! pointer wins. Each survivor's distance gets a small random bonus scaled
//! by how far the pointer was from the center, so repeated escapes from the
//! same spot do not always land on the same sample.

use crate::error::{EscapeError, Result};
use crate::geometry::{Point, Viewport};
use rand::Rng;
use std::f64::consts::TAU;

/// Number of samples on the escape circle.
pub const CANDIDATE_COUNT: usize = 100;

/// Jitter is at most this fraction of the pointer-to-center distance.
const JITTER_DIVISOR: f64 = 10.0;

/// Angle in radians of sample `i`.
pub fn candidate_angle(i: usize) -> f64 {
    TAU * i as f64 / CANDIDATE_COUNT as f64
}

/// All circle samples around `center`, in index order.
pub fn candidates(center: Point, radius: f64) -> impl Iterator<Item = Point> {
    (0..CANDIDATE_COUNT).map(move |i| center.on_circle(radius, candidate_angle(i)))
}

/// Choose the next button position.
///
/// `center` is the button's current position, `radius` the escape
/// distance. One jitter value in `[0, 1)` is drawn from `rng` for every
/// sample that survives the margin filter, in index order, so a seeded or
/// constant generator reproduces the exact same result.
///
/// On equal scores the later sample wins. Mirrored samples tie exactly
/// whenever the pointer sits on a diagonal through the center.
///
/// Returns [`EscapeError::NoValidPlacement`] when no sample fits, e.g. a
/// viewport no larger than twice the margin.
pub fn solve<R: Rng + ?Sized>(
    pointer: Point,
    center: Point,
    radius: f64,
    viewport: Viewport,
    margin: f64,
    rng: &mut R,
) -> Result<Point> {
    let base_distance = pointer.distance(center);

    let mut best: Option<(f64, Point)> = None;
    for candidate in candidates(center, radius).filter(|c| viewport.inset_contains(*c, margin)) {
        let jitter: f64 = rng.gen();
        let score = pointer.distance(candidate) + jitter * base_distance / JITTER_DIVISOR;
        match best {
            Some((top, _)) if score < top => {}
            _ => best = Some((score, candidate)),
        }
    }

    best.map(|(_, point)| point).ok_or(EscapeError::NoValidPlacement {
        radius,
        viewport,
        margin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Generator whose `gen::<f64>()` is always 0.0.
    fn no_jitter() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Generator whose `gen::<f64>()` is always 0.5.
    fn half_jitter() -> StepRng {
        StepRng::new(1 << 63, 0)
    }

    #[test]
    fn test_constant_generators() {
        let mut rng = no_jitter();
        assert_eq!(rng.gen::<f64>(), 0.0);
        let mut rng = half_jitter();
        assert_eq!(rng.gen::<f64>(), 0.5);
        assert_eq!(rng.gen::<f64>(), 0.5);
    }

    #[test]
    fn test_candidate_table() {
        let all: Vec<Point> = candidates(Point::new(100.0, 100.0), 200.0).collect();
        assert_eq!(all.len(), CANDIDATE_COUNT);
        assert_eq!(all[0], Point::new(300.0, 100.0));
        assert_eq!(candidate_angle(25), TAU * 25.0 / 100.0);
        for p in &all {
            assert!((p.distance(Point::new(100.0, 100.0)) - 200.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_diagonal_samples_tie_exactly() {
        // Samples 12 (43.2°) and 13 (46.8°) mirror each other across the
        // diagonal through the origin.
        let pointer = Point::new(0.0, 0.0);
        let center = Point::new(100.0, 100.0);
        let twelve = center.on_circle(200.0, candidate_angle(12));
        let thirteen = center.on_circle(200.0, candidate_angle(13));

        assert_eq!(twelve.x, thirteen.y);
        assert_eq!(twelve.y, thirteen.x);
        assert_eq!(pointer.distance(twelve), pointer.distance(thirteen));
        assert!((pointer.distance(thirteen) - 341.380475912147).abs() < 1e-9);
    }

    #[test]
    fn test_flees_from_origin() {
        let vp = Viewport::new(1000.0, 1000.0);
        let got = solve(Point::new(0.0, 0.0), Point::new(100.0, 100.0), 200.0, vp, 50.0, &mut no_jitter()).unwrap();

        // Tied with sample 12; the later sample is kept.
        assert_eq!(got, Point::new(100.0, 100.0).on_circle(200.0, candidate_angle(13)));
        assert!((got.x - 236.90942118573773).abs() < 1e-9, "x = {}", got.x);
        assert!((got.y - 245.7937254842823).abs() < 1e-9, "y = {}", got.y);
    }

    #[test]
    fn test_tie_keeps_later_sample_on_other_diagonal() {
        // Pointer in the bottom-right corner: samples 62 (223.2°) and 63
        // (226.8°) mirror across the diagonal and tie for farthest.
        let center = Point::new(900.0, 900.0);
        let pointer = Point::new(1000.0, 1000.0);
        let vp = Viewport::new(1000.0, 1000.0);

        let earlier = center.on_circle(200.0, candidate_angle(62));
        let later = center.on_circle(200.0, candidate_angle(63));
        assert_eq!(pointer.distance(earlier), pointer.distance(later));

        let got = solve(pointer, center, 200.0, vp, 50.0, &mut no_jitter()).unwrap();
        assert_eq!(got, later);
        assert_ne!(got, earlier);
    }

    #[test]
    fn test_pointer_on_center_ignores_jitter() {
        // Zero base distance scales every jitter draw to nothing.
        let pointer = Point::new(500.0, 500.0);
        let vp = Viewport::new(2000.0, 2000.0);

        let calm = solve(pointer, pointer, 150.0, vp, 50.0, &mut no_jitter()).unwrap();
        let jittery = solve(pointer, pointer, 150.0, vp, 50.0, &mut half_jitter()).unwrap();
        let seeded = solve(pointer, pointer, 150.0, vp, 50.0, &mut StdRng::seed_from_u64(99)).unwrap();

        assert_eq!(calm, jittery);
        assert_eq!(calm, seeded);
        assert!((calm.distance(pointer) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_result_on_circle_and_inside_margin() {
        let cases = [
            (Point::new(0.0, 0.0), Point::new(100.0, 100.0), 200.0, Viewport::new(1000.0, 1000.0)),
            (Point::new(410.0, 390.0), Point::new(400.0, 400.0), 200.0, Viewport::new(960.0, 640.0)),
            (Point::new(900.0, 100.0), Point::new(850.0, 120.0), 120.0, Viewport::new(1000.0, 600.0)),
            (Point::new(300.0, 300.0), Point::new(320.0, 260.0), 60.0, Viewport::new(400.0, 400.0)),
        ];
        let margin = 50.0;
        for (pointer, center, radius, vp) in cases {
            let got = solve(pointer, center, radius, vp, margin, &mut half_jitter()).unwrap();
            assert!((got.distance(center) - radius).abs() < 1e-9);
            assert!(got.x > margin && got.x < vp.width - margin);
            assert!(got.y > margin && got.y < vp.height - margin);
            assert!(candidates(center, radius).any(|c| c == got));
        }
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let pointer = Point::new(380.0, 420.0);
        let center = Point::new(400.0, 400.0);
        let vp = Viewport::new(800.0, 800.0);

        let a = solve(pointer, center, 200.0, vp, 50.0, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = solve(pointer, center, 200.0, vp, 50.0, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_jitter_scores_one_draw_per_survivor() {
        // Samples right of x = 1050 are discarded and must not consume
        // jitter, so a counting generator advances once per survivor.
        let center = Point::new(1000.0, 500.0);
        let vp = Viewport::new(1100.0, 1000.0);
        let survivors = candidates(center, 200.0)
            .filter(|c| vp.inset_contains(*c, 50.0))
            .count();
        assert!(survivors > 0 && survivors < CANDIDATE_COUNT);

        let mut rng = StepRng::new(0, 1);
        solve(Point::new(900.0, 500.0), center, 200.0, vp, 50.0, &mut rng).unwrap();
        assert_eq!(rng.next_u64(), survivors as u64);
    }

    #[test]
    fn test_degenerate_viewport_has_no_placement() {
        let vp = Viewport::new(100.0, 100.0);
        for radius in [0.5, 10.0, 200.0] {
            let err = solve(Point::new(10.0, 10.0), Point::new(50.0, 50.0), radius, vp, 50.0, &mut no_jitter())
                .unwrap_err();
            assert_eq!(
                err,
                EscapeError::NoValidPlacement { radius, viewport: vp, margin: 50.0 }
            );
        }
    }

    #[test]
    fn test_circle_outside_viewport_has_no_placement() {
        let vp = Viewport::new(300.0, 300.0);
        let result = solve(Point::new(0.0, 0.0), Point::new(150.0, 150.0), 500.0, vp, 50.0, &mut no_jitter());
        assert!(matches!(result, Err(EscapeError::NoValidPlacement { .. })));
    }
}
