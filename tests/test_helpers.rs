//! Helper functions and utilities for tests

use glasses_overlay::constants::{
    LANDMARK_SET_LEN, LEFT_EAR, LEFT_EYE_LEFT_CORNER, LEFT_EYE_RIGHT_CORNER, NOSE_BRIDGE,
    RIGHT_EAR, RIGHT_EYE_LEFT_CORNER, RIGHT_EYE_RIGHT_CORNER,
};
use glasses_overlay::landmarks::{Landmark, LandmarkSet, Point2};

/// Positions for the seven named landmarks, in normalized coordinates
#[derive(Debug, Clone, Copy)]
pub struct FaceLayout {
    pub left_eye_left_corner: Point2,
    pub left_eye_right_corner: Point2,
    pub right_eye_left_corner: Point2,
    pub right_eye_right_corner: Point2,
    pub nose_bridge: Point2,
    pub left_ear: Point2,
    pub right_ear: Point2,
}

impl Default for FaceLayout {
    /// A level, centered face
    fn default() -> Self {
        Self {
            left_eye_left_corner: Point2::new(0.40, 0.45),
            left_eye_right_corner: Point2::new(0.46, 0.45),
            right_eye_left_corner: Point2::new(0.54, 0.45),
            right_eye_right_corner: Point2::new(0.60, 0.45),
            nose_bridge: Point2::new(0.50, 0.46),
            left_ear: Point2::new(0.30, 0.50),
            right_ear: Point2::new(0.70, 0.50),
        }
    }
}

/// Build a canonical-length landmark set with the named positions placed
/// and every other index at the face center
#[must_use]
pub fn landmark_set_from(layout: &FaceLayout) -> LandmarkSet {
    let at = |p: Point2| Landmark::new(p.x, p.y, 0.0);
    let mut points = vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_SET_LEN];
    points[LEFT_EYE_LEFT_CORNER] = at(layout.left_eye_left_corner);
    points[LEFT_EYE_RIGHT_CORNER] = at(layout.left_eye_right_corner);
    points[RIGHT_EYE_LEFT_CORNER] = at(layout.right_eye_left_corner);
    points[RIGHT_EYE_RIGHT_CORNER] = at(layout.right_eye_right_corner);
    points[NOSE_BRIDGE] = at(layout.nose_bridge);
    points[LEFT_EAR] = at(layout.left_ear);
    points[RIGHT_EAR] = at(layout.right_ear);
    LandmarkSet::new(points)
}

/// A level face as a landmark set
#[must_use]
pub fn level_face() -> LandmarkSet {
    landmark_set_from(&FaceLayout::default())
}
