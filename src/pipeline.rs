//! Per-frame processing pipeline.
//!
//! One explicit, pure-ish entry point replaces the callback web of a
//! detector integration: an external frame pump obtains a detection result
//! (through whatever mechanism it likes), and hands it to
//! [`FrameProcessor::process`] once per frame. Processing is single-threaded
//! and non-reentrant; the pump must not overlap invocations.

use crate::bridge::{CoordinateBridge, Coordinates};
use crate::eye_line::{EyeLine, EyeLineEstimator};
use crate::landmarks::{LandmarkSet, NamedLandmarks};
use crate::pose_estimation::{Pose, PoseEstimator};
use crate::rotation::{RotationClassifier, RotationDirection};
use crate::Result;
use serde::Serialize;
use std::rc::Rc;

/// Capability interface for the external landmark detector.
///
/// Produces at most one landmark set per frame (the first detected face);
/// `None` means no face this frame. The core makes no assumption about how
/// implementations are driven.
pub trait LandmarkDetector<F> {
    /// Run detection on one frame
    fn detect(&mut self, frame: &F) -> Result<Option<LandmarkSet>>;

    /// Get detector name
    fn name(&self) -> &str;
}

/// Serializable snapshot of one frame's derived values, for human-readable
/// debug display
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DebugSnapshot {
    pub named: NamedLandmarks,
    pub eye_line: Option<EyeLine>,
    /// Ear-to-ear distance as a fraction of frame width
    pub face_width: f64,
    pub rotation: RotationDirection,
}

/// Everything one processed frame produced
#[derive(Debug, Clone)]
pub struct FrameOutput {
    /// The record written to the coordinate bridge this frame
    pub coordinates: Coordinates,
    /// Current overlay pose (`None` until a first valid pose exists)
    pub pose: Option<Pose>,
    pub rotation: RotationDirection,
    pub snapshot: DebugSnapshot,
}

/// Owns the per-frame computation and the little state that survives
/// between frames: the classifier's hysteresis, the estimator's previous
/// pose, and the shared coordinate bridge.
pub struct FrameProcessor {
    eye_line: EyeLineEstimator,
    classifier: Box<dyn RotationClassifier>,
    pose: PoseEstimator,
    bridge: Rc<CoordinateBridge>,
}

impl FrameProcessor {
    #[must_use]
    pub fn new(
        eye_line: EyeLineEstimator,
        classifier: Box<dyn RotationClassifier>,
        pose: PoseEstimator,
        bridge: Rc<CoordinateBridge>,
    ) -> Self {
        log::info!("Frame processor using {} classifier", classifier.name());
        Self {
            eye_line,
            classifier,
            pose,
            bridge,
        }
    }

    /// Handle to the shared coordinate bridge
    #[must_use]
    pub fn bridge(&self) -> Rc<CoordinateBridge> {
        Rc::clone(&self.bridge)
    }

    /// Process one frame's detection result.
    ///
    /// `None` input (or an empty set) is the normal no-face case: nothing is
    /// updated and `Ok(None)` is returned. Otherwise the named landmarks are
    /// selected, the auxiliary signals derived, the bridge rewritten
    /// atomically, and the pose re-estimated.
    ///
    /// A frame whose eye corners coincide produces no new eye-line; the
    /// previous endpoints are carried forward into the new bridge record so
    /// the write stays whole-record.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the landmark set is non-empty but
    /// not of the canonical length.
    pub fn process(&mut self, detection: Option<&LandmarkSet>) -> Result<Option<FrameOutput>> {
        let Some(set) = detection else {
            return Ok(None);
        };
        let Some(named) = set.select_named()? else {
            return Ok(None);
        };

        let eye_line = self.eye_line.estimate(
            named.left_eye_left_corner.point(),
            named.right_eye_right_corner.point(),
        );

        let rotation = self
            .classifier
            .classify(named.left_ear.point(), named.right_ear.point());

        let previous = self.bridge.read();
        let (left_eye, right_eye) = match eye_line {
            Some(line) => (Some(line.left_eye), Some(line.right_eye)),
            None => (previous.left_eye, previous.right_eye),
        };
        let coordinates = Coordinates {
            left_ear: Some(named.left_ear.point()),
            right_ear: Some(named.right_ear.point()),
            left_eye,
            right_eye,
        };
        self.bridge.write(coordinates);

        let pose = self.pose.estimate(&coordinates);

        Ok(Some(FrameOutput {
            coordinates,
            pose,
            rotation,
            snapshot: DebugSnapshot {
                named,
                eye_line,
                face_width: named.face_width(),
                rotation,
            },
        }))
    }

    /// Clear all inter-frame state (classifier hysteresis and retained pose).
    /// The bridge keeps its last record; it belongs to the capture session.
    pub fn reset(&mut self) {
        self.classifier.reset();
        self.pose.reset();
    }
}
