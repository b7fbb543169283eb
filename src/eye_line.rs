//! Eye-line estimation: the virtual lens centerline.
//!
//! Two lens-center points are derived from the outer eye corners by widening
//! the corner-to-corner segment symmetrically about its midpoint. The result
//! feeds both the debug drawing and the pose estimator.

use crate::constants::{DEFAULT_WIDEN_FACTOR, EPSILON};
use crate::landmarks::Point2;
use serde::Serialize;

/// Endpoints of the virtual lens centerline, in the same normalized
/// coordinate space as the input landmarks. Derived, not detected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EyeLine {
    pub left_eye: Point2,
    pub right_eye: Point2,
}

impl EyeLine {
    /// Length of the centerline
    #[must_use]
    pub fn length(&self) -> f64 {
        self.left_eye.distance_to(self.right_eye)
    }

    /// In-plane tilt of the centerline relative to horizontal (radians)
    #[must_use]
    pub fn angle(&self) -> f64 {
        (self.right_eye.y - self.left_eye.y).atan2(self.right_eye.x - self.left_eye.x)
    }
}

/// Computes the eye-line from the outer eye-corner landmarks
#[derive(Debug, Clone)]
pub struct EyeLineEstimator {
    widen_factor: f64,
}

impl Default for EyeLineEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_WIDEN_FACTOR)
    }
}

impl EyeLineEstimator {
    #[must_use]
    pub fn new(widen_factor: f64) -> Self {
        assert!(widen_factor > 0.0, "Widen factor must be positive");
        Self { widen_factor }
    }

    /// Estimate the lens centerline from the two outer eye corners.
    ///
    /// Returns `None` when the corners coincide: the angle is undefined
    /// there, so the frame produces no eye-line rather than a non-finite
    /// one, and the caller keeps the previous frame's points.
    #[must_use]
    pub fn estimate(&self, left_outer: Point2, right_outer: Point2) -> Option<EyeLine> {
        let distance = left_outer.distance_to(right_outer);
        if distance <= EPSILON {
            return None;
        }

        let scaled = distance * self.widen_factor;
        let mid = left_outer.midpoint(right_outer);
        let angle = (right_outer.y - left_outer.y).atan2(right_outer.x - left_outer.x);
        let half = scaled / 2.0;
        let (sin, cos) = angle.sin_cos();

        Some(EyeLine {
            left_eye: Point2::new(mid.x - half * cos, mid.y - half * sin),
            right_eye: Point2::new(mid.x + half * cos, mid.y + half * sin),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_corners() {
        // Worked example: distance 0.20 widens to 0.28 at angle 0
        let estimator = EyeLineEstimator::default();
        let line = estimator
            .estimate(Point2::new(0.40, 0.45), Point2::new(0.60, 0.45))
            .unwrap();

        assert!((line.left_eye.x - 0.33).abs() < 1e-12);
        assert!((line.left_eye.y - 0.45).abs() < 1e-12);
        assert!((line.right_eye.x - 0.67).abs() < 1e-12);
        assert!((line.right_eye.y - 0.45).abs() < 1e-12);
    }

    #[test]
    fn test_length_is_widened_distance() {
        let estimator = EyeLineEstimator::default();
        let left = Point2::new(0.38, 0.42);
        let right = Point2::new(0.61, 0.47);
        let line = estimator.estimate(left, right).unwrap();

        assert!((line.length() - 1.4 * left.distance_to(right)).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric_about_corner_midpoint() {
        let estimator = EyeLineEstimator::default();
        let left = Point2::new(0.35, 0.40);
        let right = Point2::new(0.63, 0.52);
        let line = estimator.estimate(left, right).unwrap();

        let corner_mid = left.midpoint(right);
        let line_mid = line.left_eye.midpoint(line.right_eye);
        assert!((line_mid.x - corner_mid.x).abs() < 1e-12);
        assert!((line_mid.y - corner_mid.y).abs() < 1e-12);
    }

    #[test]
    fn test_tilted_corners_keep_angle() {
        let estimator = EyeLineEstimator::default();
        let left = Point2::new(0.40, 0.50);
        let right = Point2::new(0.60, 0.40);
        let line = estimator.estimate(left, right).unwrap();

        let corner_angle = (right.y - left.y).atan2(right.x - left.x);
        assert!((line.angle() - corner_angle).abs() < 1e-12);
    }

    #[test]
    fn test_coincident_corners_yield_none() {
        let estimator = EyeLineEstimator::default();
        let p = Point2::new(0.5, 0.5);
        assert!(estimator.estimate(p, p).is_none());
    }

    #[test]
    #[should_panic(expected = "Widen factor must be positive")]
    fn test_invalid_widen_factor() {
        let _ = EyeLineEstimator::new(0.0);
    }
}
