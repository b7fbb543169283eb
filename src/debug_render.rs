//! Debug canvas renderer for visual verification.
//!
//! Draws the current frame's landmarks and derived lines onto a 2D canvas:
//! every landmark as a small red dot, the outer eye corners in green, the
//! ear points in yellow, the eye-line in purple, and an orange auxiliary
//! line connecting the eye-line to the ear on the turned-away side. Purely
//! observational; nothing here feeds back into the pose.

use crate::eye_line::EyeLine;
use crate::landmarks::{LandmarkSet, NamedLandmarks, Point2};
use crate::rotation::RotationDirection;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

const LANDMARK_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const EYE_CORNER_COLOR: Rgb<u8> = Rgb([0, 128, 0]);
const EAR_COLOR: Rgb<u8> = Rgb([255, 255, 0]);
const EYE_LINE_COLOR: Rgb<u8> = Rgb([128, 0, 128]);
const AUX_LINE_COLOR: Rgb<u8> = Rgb([255, 165, 0]);

const LANDMARK_RADIUS: i32 = 2;
const MARKER_RADIUS: i32 = 5;

/// Rotate a point about the origin
fn rotate_point(x: f64, y: f64, angle: f64) -> (f64, f64) {
    let (sin, cos) = angle.sin_cos();
    (x * cos - y * sin, x * sin + y * cos)
}

/// Renders one frame's geometry onto a fresh RGB canvas
#[derive(Debug, Clone)]
pub struct DebugRenderer {
    width: u32,
    height: u32,
}

impl DebugRenderer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Canvas dimensions must be positive");
        Self { width, height }
    }

    fn to_pixels(&self, point: Point2) -> (f64, f64) {
        (point.x * f64::from(self.width), point.y * f64::from(self.height))
    }

    /// Draw the full debug view for one frame.
    ///
    /// The auxiliary orange line runs from the eye-line endpoint on the
    /// non-raised side to the corresponding ear, chosen by the rotation
    /// direction; with direction unknown no auxiliary line is drawn. Its
    /// geometry is computed in the eye-line's rotated local frame, matching
    /// how a renderer positioned inside that frame would draw it.
    #[must_use]
    pub fn render(
        &self,
        landmarks: &LandmarkSet,
        named: &NamedLandmarks,
        eye_line: Option<&EyeLine>,
        rotation: RotationDirection,
    ) -> RgbImage {
        let mut canvas = RgbImage::new(self.width, self.height);

        for landmark in landmarks.points() {
            let (x, y) = self.to_pixels(landmark.point());
            draw_filled_circle_mut(
                &mut canvas,
                (x.round() as i32, y.round() as i32),
                LANDMARK_RADIUS,
                LANDMARK_COLOR,
            );
        }

        if let Some(line) = eye_line {
            self.draw_eye_line(&mut canvas, named, line, rotation);
        }

        for corner in [named.left_eye_left_corner, named.right_eye_right_corner] {
            let (x, y) = self.to_pixels(corner.point());
            draw_filled_circle_mut(
                &mut canvas,
                (x.round() as i32, y.round() as i32),
                MARKER_RADIUS,
                EYE_CORNER_COLOR,
            );
        }

        for ear in [named.left_ear, named.right_ear] {
            let (x, y) = self.to_pixels(ear.point());
            draw_filled_circle_mut(
                &mut canvas,
                (x.round() as i32, y.round() as i32),
                MARKER_RADIUS,
                EAR_COLOR,
            );
        }

        canvas
    }

    fn draw_eye_line(
        &self,
        canvas: &mut RgbImage,
        named: &NamedLandmarks,
        eye_line: &EyeLine,
        rotation: RotationDirection,
    ) {
        let (left_x, left_y) = self.to_pixels(eye_line.left_eye);
        let (right_x, right_y) = self.to_pixels(eye_line.right_eye);
        draw_line_segment_mut(
            canvas,
            (left_x as f32, left_y as f32),
            (right_x as f32, right_y as f32),
            EYE_LINE_COLOR,
        );

        // Local frame centered on the eye-line midpoint and rotated to lay
        // the line along the x axis. The aux endpoints are found there and
        // mapped back through the inverse transform.
        let (mid_x, mid_y) = ((left_x + right_x) / 2.0, (left_y + right_y) / 2.0);
        let angle = (right_y - left_y).atan2(right_x - left_x);
        let half = ((right_x - left_x).powi(2) + (right_y - left_y).powi(2)).sqrt() / 2.0;

        let (local_from, ear) = match rotation {
            RotationDirection::Left => ((half, 0.0), named.right_ear),
            RotationDirection::Right => ((-half, 0.0), named.left_ear),
            RotationDirection::Unknown => return,
        };

        let (ear_x, ear_y) = self.to_pixels(ear.point());
        let local_to = rotate_point(ear_x - mid_x, ear_y - mid_y, -angle);

        let from = rotate_point(local_from.0, local_from.1, angle);
        let to = rotate_point(local_to.0, local_to.1, angle);
        draw_line_segment_mut(
            canvas,
            ((mid_x + from.0) as f32, (mid_y + from.1) as f32),
            ((mid_x + to.0) as f32, (mid_y + to.1) as f32),
            AUX_LINE_COLOR,
        );
    }
}
