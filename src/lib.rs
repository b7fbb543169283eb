//! Landmark-to-pose estimation core for overlaying a 3D eyewear model on a
//! tracked face.
//!
//! An external face-mesh detector produces a fixed-index set of normalized
//! facial landmarks per video frame; this library turns that set into a
//! placement transform for the overlay model. The per-frame pipeline:
//!
//! 1. Select the seven named landmarks (eye corners, nose bridge, ears) by
//!    canonical index
//! 2. Estimate the virtual lens centerline from the outer eye corners
//! 3. Classify the discrete head-turn direction from the ear points
//! 4. Combine eye-line and ears into scale, yaw, pitch, and position
//! 5. Publish the raw geometry through the shared coordinate bridge
//!
//! The detector, video capture, and the 3D renderer are external
//! collaborators; the library only consumes landmark sets and produces
//! geometry. A frame with no detected face is a no-op, not a failure, and
//! degenerate geometry retains the previous frame's values rather than
//! propagating non-finite numbers.
//!
//! # Examples
//!
//! ## Deriving the eye-line and rotation direction
//!
//! ```
//! use glasses_overlay::eye_line::EyeLineEstimator;
//! use glasses_overlay::landmarks::Point2;
//! use glasses_overlay::rotation::{create_classifier, RotationDirection};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let estimator = EyeLineEstimator::default();
//! let line = estimator
//!     .estimate(Point2::new(0.40, 0.45), Point2::new(0.60, 0.45))
//!     .expect("non-degenerate corners");
//! assert!((line.length() - 0.28).abs() < 1e-12);
//!
//! let mut classifier = create_classifier("direct")?;
//! let direction = classifier.classify(Point2::new(0.30, 0.50), Point2::new(0.70, 0.40));
//! assert_eq!(direction, RotationDirection::Left);
//! # Ok(())
//! # }
//! ```
//!
//! ## Complete pipeline
//!
//! ```
//! use glasses_overlay::app::SyntheticSweep;
//! use glasses_overlay::bridge::CoordinateBridge;
//! use glasses_overlay::eye_line::EyeLineEstimator;
//! use glasses_overlay::pipeline::{FrameProcessor, LandmarkDetector};
//! use glasses_overlay::pose_estimation::PoseEstimator;
//! use glasses_overlay::rotation::create_classifier;
//! use std::rc::Rc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bridge = Rc::new(CoordinateBridge::new());
//! let mut processor = FrameProcessor::new(
//!     EyeLineEstimator::default(),
//!     create_classifier("hysteresis")?,
//!     PoseEstimator::default(),
//!     Rc::clone(&bridge),
//! );
//!
//! // Stand-in for the external detector + frame pump
//! let mut detector = SyntheticSweep::default();
//!
//! for frame in 0..10u64 {
//!     let detection = detector.detect(&frame)?;
//!     if let Some(output) = processor.process(detection.as_ref())? {
//!         let pose = output.pose.expect("valid frame");
//!         println!("scale {:.2}, yaw {:.3} rad", pose.scale, pose.yaw);
//!     }
//! }
//!
//! // The renderer reads the latest geometry from the bridge at any time
//! assert!(bridge.read().is_complete());
//! # Ok(())
//! # }
//! ```

/// Landmark types and named-landmark selection
pub mod landmarks;

/// Eye-line (virtual lens centerline) estimation
pub mod eye_line;

/// Rotation-direction classification strategies
pub mod rotation;

/// Overlay pose estimation
pub mod pose_estimation;

/// Shared coordinate bridge between detection and rendering
pub mod bridge;

/// Debug canvas renderer
pub mod debug_render;

/// Per-frame processing pipeline
pub mod pipeline;

/// Constants used throughout the library
pub mod constants;

/// Configuration management
pub mod config;

/// Error types and result handling
pub mod error;

/// Demo application with a synthetic landmark source
pub mod app;

pub use error::{Error, Result};
