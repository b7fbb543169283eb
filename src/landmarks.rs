//! Landmark types and named-landmark selection.
//!
//! The external face-mesh detector produces a fixed-length, index-addressed
//! set of normalized landmarks per detected face. This module extracts the
//! seven roles the overlay geometry depends on, by canonical index.

use crate::constants::{
    LANDMARK_SET_LEN, LEFT_EAR, LEFT_EYE_LEFT_CORNER, LEFT_EYE_RIGHT_CORNER, NOSE_BRIDGE,
    RIGHT_EAR, RIGHT_EYE_LEFT_CORNER, RIGHT_EYE_RIGHT_CORNER,
};
use crate::{Error, Result};
use serde::Serialize;

/// A 2D point in normalized image coordinates ([0, 1] per axis)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[must_use]
    pub fn distance_to(&self, other: Point2) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    /// Midpoint between this point and another
    #[must_use]
    pub fn midpoint(&self, other: Point2) -> Point2 {
        Point2::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// A single detected facial keypoint, normalized to the video frame
/// (x/y in [0, 1], z a unitless relative depth)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Landmark {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Project onto the image plane, dropping relative depth
    #[must_use]
    pub fn point(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// One frame's detection result for a single face: an ordered, fixed-length
/// sequence of landmarks addressed by canonical index.
#[derive(Debug, Clone, Default)]
pub struct LandmarkSet {
    points: Vec<Landmark>,
}

impl LandmarkSet {
    /// Wrap a detector output. An empty vector is valid and represents the
    /// "no face in frame" case; selection will simply yield nothing.
    #[must_use]
    pub fn new(points: Vec<Landmark>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn points(&self) -> &[Landmark] {
        &self.points
    }

    /// Extract the seven named landmarks by canonical index.
    ///
    /// Returns `Ok(None)` for an empty set: no face this frame, so the
    /// frame is skipped, not an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the set is non-empty but not of the
    /// canonical length: that is a contract violation with the detector,
    /// not a missed detection.
    pub fn select_named(&self) -> Result<Option<NamedLandmarks>> {
        if self.points.is_empty() {
            return Ok(None);
        }
        if self.points.len() != LANDMARK_SET_LEN {
            return Err(Error::InvalidInput(format!(
                "Expected {} landmarks, got {}",
                LANDMARK_SET_LEN,
                self.points.len()
            )));
        }

        Ok(Some(NamedLandmarks {
            left_eye_left_corner: self.points[LEFT_EYE_LEFT_CORNER],
            left_eye_right_corner: self.points[LEFT_EYE_RIGHT_CORNER],
            right_eye_left_corner: self.points[RIGHT_EYE_LEFT_CORNER],
            right_eye_right_corner: self.points[RIGHT_EYE_RIGHT_CORNER],
            nose_bridge: self.points[NOSE_BRIDGE],
            left_ear: self.points[LEFT_EAR],
            right_ear: self.points[RIGHT_EAR],
        }))
    }
}

/// The seven landmark roles the overlay geometry is built from.
/// Recomputed every frame; no history is retained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NamedLandmarks {
    pub left_eye_left_corner: Landmark,
    pub left_eye_right_corner: Landmark,
    pub right_eye_left_corner: Landmark,
    pub right_eye_right_corner: Landmark,
    pub nose_bridge: Landmark,
    pub left_ear: Landmark,
    pub right_ear: Landmark,
}

impl NamedLandmarks {
    /// Ear-to-ear distance, as a fraction of frame width
    #[must_use]
    pub fn face_width(&self) -> f64 {
        self.left_ear.point().distance_to(self.right_ear.point())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_set() -> LandmarkSet {
        let mut points = vec![Landmark::default(); LANDMARK_SET_LEN];
        points[LEFT_EYE_LEFT_CORNER] = Landmark::new(0.40, 0.45, 0.0);
        points[RIGHT_EYE_RIGHT_CORNER] = Landmark::new(0.60, 0.45, 0.0);
        points[LEFT_EAR] = Landmark::new(0.30, 0.50, 0.0);
        points[RIGHT_EAR] = Landmark::new(0.70, 0.50, 0.0);
        points[NOSE_BRIDGE] = Landmark::new(0.50, 0.45, -0.01);
        LandmarkSet::new(points)
    }

    #[test]
    fn test_select_named() {
        let named = full_set().select_named().unwrap().unwrap();
        assert_eq!(named.left_eye_left_corner.x, 0.40);
        assert_eq!(named.right_eye_right_corner.x, 0.60);
        assert_eq!(named.nose_bridge.z, -0.01);
    }

    #[test]
    fn test_empty_set_is_no_detection() {
        let set = LandmarkSet::new(vec![]);
        assert!(set.select_named().unwrap().is_none());
    }

    #[test]
    fn test_wrong_length_is_error() {
        let set = LandmarkSet::new(vec![Landmark::default(); 68]);
        assert!(set.select_named().is_err());
    }

    #[test]
    fn test_face_width() {
        let named = full_set().select_named().unwrap().unwrap();
        assert!((named.face_width() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_point_helpers() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-12);
        assert_eq!(a.midpoint(b), Point2::new(1.5, 2.0));
    }
}
