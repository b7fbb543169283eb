//! Constants used throughout the library.
//!
//! The landmark indices are contract constants: they must match the external
//! face-mesh detector's canonical indexing scheme exactly.

/// Canonical length of a landmark set (MediaPipe Face Mesh with refined landmarks)
pub const LANDMARK_SET_LEN: usize = 478;

/// Index of the left eye's outer (left) corner
pub const LEFT_EYE_LEFT_CORNER: usize = 33;

/// Index of the left eye's inner (right) corner
pub const LEFT_EYE_RIGHT_CORNER: usize = 133;

/// Index of the right eye's inner (left) corner
pub const RIGHT_EYE_LEFT_CORNER: usize = 362;

/// Index of the right eye's outer (right) corner
pub const RIGHT_EYE_RIGHT_CORNER: usize = 263;

/// Index of the nose bridge point
pub const NOSE_BRIDGE: usize = 168;

/// Index of the left ear point
pub const LEFT_EAR: usize = 127;

/// Index of the right ear point
pub const RIGHT_EAR: usize = 356;

/// Widening factor applied to the outer-corner distance to approximate the
/// lens span beyond the eye corners
pub const DEFAULT_WIDEN_FACTOR: f64 = 1.4;

/// Calibration factor from eye distance to model scale
pub const DEFAULT_SCALE_FACTOR: f64 = 10.0;

/// Calibration factor from ear distance to model depth scale
pub const DEFAULT_DEPTH_FACTOR: f64 = 8.0;

/// Damping applied to the pitch angle to keep the effect visually subtle
pub const DEFAULT_PITCH_DAMPING: f64 = 0.5;

/// Hysteresis threshold for the angle-based rotation classifier (radians)
pub const DEFAULT_ROTATION_THRESHOLD: f64 = 0.02;

/// Factor mapping re-centered normalized coordinates into model-space units
pub const POSITION_RANGE_FACTOR: f64 = 10.0;

/// Factor deriving the forward/back depth cue from vertical offset
pub const DEPTH_CUE_FACTOR: f64 = 5.0;

/// Default debug canvas dimensions
pub const DEFAULT_CANVAS_WIDTH: u32 = 640;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 480;

/// Numeric precision epsilon for degenerate-geometry guards
pub const EPSILON: f64 = 1e-10;
