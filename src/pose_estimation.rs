//! Placement-pose estimation for the overlay model.
//!
//! Combines the eye-line endpoints and the ear landmarks into a scale,
//! rotation, and position for the 3D eyewear model. All pose components are
//! recomputed from scratch every frame; there is no integration across
//! frames and no smoothing of detector noise.

use crate::bridge::Coordinates;
use crate::constants::{
    DEFAULT_DEPTH_FACTOR, DEFAULT_PITCH_DAMPING, DEFAULT_SCALE_FACTOR, DEPTH_CUE_FACTOR, EPSILON,
    POSITION_RANGE_FACTOR,
};
use serde::Serialize;

/// Placement transform for the overlay model.
///
/// `yaw` is the measured in-plane tilt of the eye-line (positive when the
/// right endpoint sits lower in the image); whether the renderer applies it
/// negated depends on its own axis convention. `pitch` already carries the
/// damping factor. `depth_scale` applies to the model's depth axis only,
/// modeling foreshortening as the head turns; `scale` applies to the other
/// two axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    pub scale: f64,
    pub depth_scale: f64,
    /// In-plane rotation of the eye-line, radians
    pub yaw: f64,
    /// Dampened vertical tilt, radians
    pub pitch: f64,
    /// Model-space position; the image's vertical axis is inverted to match
    /// the renderer's up-axis convention
    pub position: [f64; 3],
}

impl Pose {
    /// True when every component is a finite number
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.scale.is_finite()
            && self.depth_scale.is_finite()
            && self.yaw.is_finite()
            && self.pitch.is_finite()
            && self.position.iter().all(|v| v.is_finite())
    }
}

/// Computes the overlay pose from the shared coordinate record.
///
/// Keeps the previously computed pose and returns it unchanged whenever the
/// current frame cannot produce a valid one (missing inputs or degenerate
/// geometry), so the overlay holds still instead of jumping or vanishing.
#[derive(Debug, Clone)]
pub struct PoseEstimator {
    scale_factor: f64,
    depth_factor: f64,
    pitch_damping: f64,
    last_pose: Option<Pose>,
}

impl Default for PoseEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE_FACTOR, DEFAULT_DEPTH_FACTOR, DEFAULT_PITCH_DAMPING)
    }
}

impl PoseEstimator {
    #[must_use]
    pub fn new(scale_factor: f64, depth_factor: f64, pitch_damping: f64) -> Self {
        assert!(scale_factor > 0.0, "Scale factor must be positive");
        assert!(depth_factor > 0.0, "Depth factor must be positive");
        assert!(
            (0.0..=1.0).contains(&pitch_damping),
            "Pitch damping must be in [0, 1]"
        );
        Self {
            scale_factor,
            depth_factor,
            pitch_damping,
            last_pose: None,
        }
    }

    /// The most recently computed pose, if any frame has produced one
    #[must_use]
    pub fn last_pose(&self) -> Option<Pose> {
        self.last_pose
    }

    /// Forget the previously computed pose
    pub fn reset(&mut self) {
        self.last_pose = None;
    }

    /// Estimate the overlay pose from the current coordinate record.
    ///
    /// Returns the newly computed pose, or the retained previous pose when
    /// any of the four inputs is absent or the geometry is degenerate.
    /// `None` only before the first valid frame.
    pub fn estimate(&mut self, coordinates: &Coordinates) -> Option<Pose> {
        let (Some(left_eye), Some(right_eye), Some(left_ear), Some(right_ear)) = (
            coordinates.left_eye,
            coordinates.right_eye,
            coordinates.left_ear,
            coordinates.right_ear,
        ) else {
            return self.last_pose;
        };

        let eye_distance = left_eye.distance_to(right_eye);
        let ear_distance = left_ear.distance_to(right_ear);
        if eye_distance <= EPSILON || ear_distance <= EPSILON {
            log::debug!("Degenerate eye or ear geometry, keeping previous pose");
            return self.last_pose;
        }

        let scale = eye_distance * self.scale_factor;
        let depth_scale = ear_distance * self.depth_factor;

        let yaw = (right_eye.y - left_eye.y).atan2(right_eye.x - left_eye.x);

        // Eye/ear midpoints give a steadier vertical reference than the
        // eyes alone
        let left_mid = left_eye.midpoint(left_ear);
        let right_mid = right_eye.midpoint(right_ear);
        let vertical_angle = (right_mid.y - left_mid.y).atan2(right_mid.x - left_mid.x);
        let pitch = (vertical_angle - yaw) * self.pitch_damping;

        let center = left_eye.midpoint(right_eye);
        let centered_x = center.x - 0.5;
        let centered_y = center.y - 0.5;
        let position = [
            centered_x * POSITION_RANGE_FACTOR,
            -centered_y * POSITION_RANGE_FACTOR,
            -centered_y.abs() * DEPTH_CUE_FACTOR,
        ];

        let pose = Pose {
            scale,
            depth_scale,
            yaw,
            pitch,
            position,
        };
        if !pose.is_finite() {
            log::warn!("Non-finite pose computed, keeping previous pose");
            return self.last_pose;
        }

        self.last_pose = Some(pose);
        self.last_pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::Point2;

    fn level_coordinates() -> Coordinates {
        Coordinates {
            left_ear: Some(Point2::new(0.30, 0.50)),
            right_ear: Some(Point2::new(0.70, 0.50)),
            left_eye: Some(Point2::new(0.33, 0.45)),
            right_eye: Some(Point2::new(0.67, 0.45)),
        }
    }

    #[test]
    fn test_level_head_pose() {
        let mut estimator = PoseEstimator::default();
        let pose = estimator.estimate(&level_coordinates()).unwrap();

        assert!((pose.scale - 3.4).abs() < 1e-12); // 0.34 * 10
        assert!((pose.depth_scale - 3.2).abs() < 1e-12); // 0.40 * 8
        assert!(pose.yaw.abs() < 1e-12);
        assert!(pose.pitch.abs() < 1e-12);
        // Center (0.5, 0.45) recentered to (0.0, -0.05)
        assert!(pose.position[0].abs() < 1e-12);
        assert!((pose.position[1] - 0.5).abs() < 1e-12);
        assert!((pose.position[2] - (-0.25)).abs() < 1e-12);
    }

    #[test]
    fn test_tilted_head_yaw() {
        let mut estimator = PoseEstimator::default();
        let coords = Coordinates {
            left_ear: Some(Point2::new(0.31, 0.55)),
            right_ear: Some(Point2::new(0.65, 0.45)),
            left_eye: Some(Point2::new(0.33, 0.50)),
            right_eye: Some(Point2::new(0.67, 0.40)),
        };
        let pose = estimator.estimate(&coords).unwrap();

        let expected_yaw = (0.40f64 - 0.50).atan2(0.67 - 0.33);
        assert!((pose.yaw - expected_yaw).abs() < 1e-12);
        // Ear segment parallels the eye-line here, so the midpoint angle
        // matches the yaw and the pitch cancels
        assert!(pose.pitch.abs() < 1e-9);
    }

    #[test]
    fn test_pitch_damping() {
        let mut full = PoseEstimator::new(10.0, 8.0, 1.0);
        let mut damped = PoseEstimator::new(10.0, 8.0, 0.5);
        let coords = Coordinates {
            left_ear: Some(Point2::new(0.28, 0.58)),
            right_ear: Some(Point2::new(0.72, 0.50)),
            left_eye: Some(Point2::new(0.33, 0.45)),
            right_eye: Some(Point2::new(0.67, 0.45)),
        };

        let full_pose = full.estimate(&coords).unwrap();
        let damped_pose = damped.estimate(&coords).unwrap();
        assert!((damped_pose.pitch - full_pose.pitch * 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_missing_input_keeps_previous_pose() {
        let mut estimator = PoseEstimator::default();
        let first = estimator.estimate(&level_coordinates()).unwrap();

        let incomplete = Coordinates {
            left_eye: None,
            ..level_coordinates()
        };
        let second = estimator.estimate(&incomplete).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_degenerate_geometry_keeps_previous_pose() {
        let mut estimator = PoseEstimator::default();
        let first = estimator.estimate(&level_coordinates()).unwrap();

        let degenerate = Coordinates {
            left_eye: Some(Point2::new(0.5, 0.45)),
            right_eye: Some(Point2::new(0.5, 0.45)),
            ..level_coordinates()
        };
        let second = estimator.estimate(&degenerate).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_pose_before_first_valid_frame() {
        let mut estimator = PoseEstimator::default();
        assert!(estimator.estimate(&Coordinates::default()).is_none());
        assert!(estimator.last_pose().is_none());
    }

    #[test]
    fn test_pose_is_always_finite() {
        let mut estimator = PoseEstimator::default();
        let offsets = [-0.2, -0.05, 0.0, 0.05, 0.2];
        for &dx in &offsets {
            for &dy in &offsets {
                let coords = Coordinates {
                    left_ear: Some(Point2::new(0.30 + dx, 0.50 + dy)),
                    right_ear: Some(Point2::new(0.70 + dx, 0.50 - dy)),
                    left_eye: Some(Point2::new(0.33 + dx, 0.45 + dy)),
                    right_eye: Some(Point2::new(0.67 + dx, 0.45 - dy)),
                };
                let pose = estimator.estimate(&coords).unwrap();
                assert!(pose.is_finite());
            }
        }
    }

    #[test]
    fn test_reset() {
        let mut estimator = PoseEstimator::default();
        estimator.estimate(&level_coordinates());
        estimator.reset();
        assert!(estimator.last_pose().is_none());
    }
}
