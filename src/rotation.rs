//! Rotation-direction classification from ear landmarks.
//!
//! A discrete left/right head-turn signal derived from the relative ear
//! positions. Two strategies are provided behind one trait: a direct
//! per-frame comparison, and an angle threshold with hysteresis that
//! suppresses flicker from small, noisy angle differences near neutral.
//!
//! Sign contract (fixed): the ear with the larger image-space y (lower in
//! the frame) names the direction. `left_ear.y > right_ear.y` means `Left`.

use crate::constants::DEFAULT_ROTATION_THRESHOLD;
use crate::landmarks::Point2;
use crate::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Discrete head-turn direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationDirection {
    Left,
    Right,
    #[default]
    Unknown,
}

impl fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Trait for rotation-direction classification strategies
pub trait RotationClassifier {
    /// Classify the head-turn direction from the two ear points
    fn classify(&mut self, left_ear: Point2, right_ear: Point2) -> RotationDirection;

    /// Reset classifier state
    fn reset(&mut self);

    /// Get classifier name
    fn name(&self) -> &str;
}

/// Direct per-frame comparison of the ear y coordinates.
/// Stateless; equal heights classify as `Unknown`.
pub struct DirectComparison;

impl RotationClassifier for DirectComparison {
    fn classify(&mut self, left_ear: Point2, right_ear: Point2) -> RotationDirection {
        if left_ear.y > right_ear.y {
            RotationDirection::Left
        } else if left_ear.y < right_ear.y {
            RotationDirection::Right
        } else {
            RotationDirection::Unknown
        }
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        "DirectComparison"
    }
}

/// Ear-to-ear angle with a symmetric threshold band. Inside the band the
/// previous frame's classification is retained (initially `Unknown`).
pub struct AngleHysteresis {
    threshold: f64,
    previous: RotationDirection,
}

impl AngleHysteresis {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        assert!(threshold >= 0.0, "Threshold must be non-negative");
        Self {
            threshold,
            previous: RotationDirection::Unknown,
        }
    }
}

impl Default for AngleHysteresis {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATION_THRESHOLD)
    }
}

impl RotationClassifier for AngleHysteresis {
    fn classify(&mut self, left_ear: Point2, right_ear: Point2) -> RotationDirection {
        let angle = (left_ear.y - right_ear.y).atan2(left_ear.x - right_ear.x);

        let direction = if angle > self.threshold {
            RotationDirection::Left
        } else if angle < -self.threshold {
            RotationDirection::Right
        } else {
            self.previous
        };

        self.previous = direction;
        direction
    }

    fn reset(&mut self) {
        self.previous = RotationDirection::Unknown;
    }

    fn name(&self) -> &str {
        "AngleHysteresis"
    }
}

/// Create a rotation classifier by strategy name
pub fn create_classifier(strategy: &str) -> Result<Box<dyn RotationClassifier>> {
    match strategy.to_lowercase().as_str() {
        "direct" | "directcomparison" => Ok(Box::new(DirectComparison)),
        "hysteresis" | "anglehysteresis" | "angle" => Ok(Box::new(AngleHysteresis::default())),
        _ => Err(Error::ClassifierError(format!(
            "Unknown classifier strategy: {strategy}"
        ))),
    }
}
