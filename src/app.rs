//! Demo application: drives the frame pipeline with a synthetic head sweep.
//!
//! Capture and the real face-mesh detector are external collaborators, so
//! the demo stands a scripted [`LandmarkDetector`] in for them: it emits a
//! full canonical landmark set whose head slowly tilts side to side, with
//! periodic no-detection frames, and pushes every frame through the
//! [`FrameProcessor`]. Useful for eyeballing pose output and for dumping
//! debug canvases without any camera or model dependency.

use crate::bridge::CoordinateBridge;
use crate::config::Config;
use crate::constants::{
    LANDMARK_SET_LEN, LEFT_EAR, LEFT_EYE_LEFT_CORNER, LEFT_EYE_RIGHT_CORNER, NOSE_BRIDGE,
    RIGHT_EAR, RIGHT_EYE_LEFT_CORNER, RIGHT_EYE_RIGHT_CORNER,
};
use crate::debug_render::DebugRenderer;
use crate::eye_line::EyeLineEstimator;
use crate::landmarks::{Landmark, LandmarkSet};
use crate::pipeline::{FrameProcessor, LandmarkDetector};
use crate::pose_estimation::PoseEstimator;
use crate::Result;
use log::{debug, info};
use std::path::PathBuf;
use std::rc::Rc;

/// Demo application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Number of frames to process
    pub frames: u64,
    /// Directory to dump debug canvases into (PNG per frame)
    pub dump_dir: Option<PathBuf>,
    /// Print per-frame debug snapshots as JSON to stdout
    pub print_snapshots: bool,
}

/// Scripted landmark source sweeping the head left and right.
///
/// The frame index is the "frame": detection is a pure function of it, so
/// the sequence is reproducible. Every `dropout_period`-th frame reports no
/// face, exercising the skip-and-retain path.
pub struct SyntheticSweep {
    period: f64,
    dropout_period: u64,
}

impl Default for SyntheticSweep {
    fn default() -> Self {
        Self {
            period: 60.0,
            dropout_period: 17,
        }
    }
}

impl SyntheticSweep {
    #[must_use]
    pub fn new(period: f64, dropout_period: u64) -> Self {
        assert!(period > 0.0, "Sweep period must be positive");
        assert!(dropout_period > 0, "Dropout period must be positive");
        Self {
            period,
            dropout_period,
        }
    }

    /// Build the canonical-length landmark set for sweep phase `t` (radians)
    #[must_use]
    pub fn landmark_set_at(&self, t: f64) -> LandmarkSet {
        let tilt = 0.12 * t.sin();
        let shift = 0.05 * t.cos();

        // Rough face outline filler so the debug canvas shows a point cloud
        let mut points = Vec::with_capacity(LANDMARK_SET_LEN);
        for i in 0..LANDMARK_SET_LEN {
            let phase = (i as f64) / (LANDMARK_SET_LEN as f64) * std::f64::consts::TAU;
            points.push(Landmark::new(
                0.5 + shift + 0.18 * phase.cos(),
                0.5 + 0.24 * phase.sin(),
                0.0,
            ));
        }

        let place = |x: f64, y: f64| {
            // Tilt the named points about the face center
            let (dx, dy) = (x - 0.5, y - 0.5);
            let (sin, cos) = tilt.sin_cos();
            Landmark::new(
                0.5 + shift + dx * cos - dy * sin,
                0.5 + dx * sin + dy * cos,
                0.0,
            )
        };

        points[LEFT_EYE_LEFT_CORNER] = place(0.40, 0.45);
        points[LEFT_EYE_RIGHT_CORNER] = place(0.46, 0.45);
        points[RIGHT_EYE_LEFT_CORNER] = place(0.54, 0.45);
        points[RIGHT_EYE_RIGHT_CORNER] = place(0.60, 0.45);
        points[NOSE_BRIDGE] = place(0.50, 0.46);
        points[LEFT_EAR] = place(0.30, 0.50);
        points[RIGHT_EAR] = place(0.70, 0.50);

        LandmarkSet::new(points)
    }
}

impl LandmarkDetector<u64> for SyntheticSweep {
    fn detect(&mut self, frame: &u64) -> Result<Option<LandmarkSet>> {
        if frame % self.dropout_period == self.dropout_period - 1 {
            return Ok(None);
        }
        let t = (*frame as f64) / self.period * std::f64::consts::TAU;
        Ok(Some(self.landmark_set_at(t)))
    }

    fn name(&self) -> &str {
        "SyntheticSweep"
    }
}

/// Demo application wiring the synthetic source to the pipeline
pub struct OverlayApp {
    app_config: AppConfig,
    source: SyntheticSweep,
    processor: FrameProcessor,
    renderer: DebugRenderer,
}

impl OverlayApp {
    /// Create the demo application from pipeline and demo configuration
    pub fn new(config: &Config, app_config: AppConfig) -> Result<Self> {
        info!("Initializing eyewear overlay demo");
        config.validate()?;

        let bridge = Rc::new(CoordinateBridge::new());
        let processor = FrameProcessor::new(
            EyeLineEstimator::new(config.eye_line.widen_factor),
            config.create_classifier()?,
            PoseEstimator::new(
                config.pose.scale_factor,
                config.pose.depth_factor,
                config.pose.pitch_damping,
            ),
            bridge,
        );
        let renderer = DebugRenderer::new(config.debug.canvas_width, config.debug.canvas_height);

        Ok(Self {
            app_config,
            source: SyntheticSweep::default(),
            processor,
            renderer,
        })
    }

    /// Run the frame loop
    pub fn run(&mut self) -> Result<()> {
        if let Some(dir) = &self.app_config.dump_dir {
            std::fs::create_dir_all(dir)?;
            info!("Dumping debug canvases to {}", dir.display());
        }

        let mut processed = 0u64;
        let mut skipped = 0u64;

        for frame in 0..self.app_config.frames {
            let detection = self.source.detect(&frame)?;
            let Some(output) = self.processor.process(detection.as_ref())? else {
                debug!("Frame {frame}: no face");
                skipped += 1;
                continue;
            };
            processed += 1;

            if let Some(pose) = output.pose {
                debug!(
                    "Frame {frame}: scale {:.3}, yaw {:.3} rad, pitch {:.3} rad, rotation {}",
                    pose.scale, pose.yaw, pose.pitch, output.rotation
                );
            }

            if self.app_config.print_snapshots {
                let json = serde_json::to_string(&output.snapshot)
                    .map_err(|e| crate::Error::RendererError(format!("Snapshot encoding: {e}")))?;
                println!("{json}");
            }

            if let Some(dir) = &self.app_config.dump_dir {
                // detection is always Some when process returned output
                if let Some(set) = detection.as_ref() {
                    let canvas = self.renderer.render(
                        set,
                        &output.snapshot.named,
                        output.snapshot.eye_line.as_ref(),
                        output.rotation,
                    );
                    canvas.save(dir.join(format!("frame_{frame:04}.png")))?;
                }
            }
        }

        let coordinates = self.processor.bridge().read();
        info!(
            "Processed {processed} frames ({skipped} without a face); bridge complete: {}",
            coordinates.is_complete()
        );

        Ok(())
    }
}
