//! Configuration management for the overlay pose pipeline

use crate::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_DEPTH_FACTOR, DEFAULT_PITCH_DAMPING,
    DEFAULT_ROTATION_THRESHOLD, DEFAULT_SCALE_FACTOR, DEFAULT_WIDEN_FACTOR,
};
use crate::rotation::{AngleHysteresis, DirectComparison, RotationClassifier};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rotation classifier configuration
    pub classifier: ClassifierConfig,

    /// Eye-line estimator configuration
    pub eye_line: EyeLineConfig,

    /// Pose estimator configuration
    pub pose: PoseConfig,

    /// Debug renderer configuration
    pub debug: DebugConfig,
}

/// Rotation classifier parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Strategy name ("direct" or "hysteresis")
    pub strategy: String,

    /// Hysteresis threshold in radians
    pub threshold: f64,
}

/// Eye-line estimator parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EyeLineConfig {
    /// Widening factor from outer-corner distance to lens span
    pub widen_factor: f64,
}

/// Pose estimator parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseConfig {
    /// Calibration factor from eye distance to model scale
    pub scale_factor: f64,

    /// Calibration factor from ear distance to depth scale
    pub depth_factor: f64,

    /// Damping applied to the pitch angle (0.0-1.0)
    pub pitch_damping: f64,
}

/// Debug renderer parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Canvas width in pixels
    pub canvas_width: u32,

    /// Canvas height in pixels
    pub canvas_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            eye_line: EyeLineConfig::default(),
            pose: PoseConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            strategy: "hysteresis".to_string(),
            threshold: DEFAULT_ROTATION_THRESHOLD,
        }
    }
}

impl Default for EyeLineConfig {
    fn default() -> Self {
        Self {
            widen_factor: DEFAULT_WIDEN_FACTOR,
        }
    }
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            depth_factor: DEFAULT_DEPTH_FACTOR,
            pitch_damping: DEFAULT_PITCH_DAMPING,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Create a rotation classifier from configuration
    pub fn create_classifier(&self) -> Result<Box<dyn RotationClassifier>> {
        match self.classifier.strategy.to_lowercase().as_str() {
            "direct" | "directcomparison" => Ok(Box::new(DirectComparison)),
            "hysteresis" | "anglehysteresis" | "angle" => {
                Ok(Box::new(AngleHysteresis::new(self.classifier.threshold)))
            }
            name => Err(Error::ClassifierError(format!(
                "Unknown classifier strategy: {name}"
            ))),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.classifier.threshold < 0.0 {
            return Err(Error::ConfigError(
                "Classifier threshold must be non-negative".to_string(),
            ));
        }
        if self.eye_line.widen_factor <= 0.0 {
            return Err(Error::ConfigError(
                "Widen factor must be greater than 0".to_string(),
            ));
        }
        if self.pose.scale_factor <= 0.0 || self.pose.depth_factor <= 0.0 {
            return Err(Error::ConfigError(
                "Scale and depth factors must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.pose.pitch_damping) {
            return Err(Error::ConfigError(
                "Pitch damping must be between 0.0 and 1.0".to_string(),
            ));
        }
        if self.debug.canvas_width == 0 || self.debug.canvas_height == 0 {
            return Err(Error::ConfigError(
                "Canvas dimensions must be greater than 0".to_string(),
            ));
        }

        // The factory rejects unknown strategy names
        self.create_classifier()?;

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Eyewear Overlay Pose Configuration

# Rotation classifier ("direct" or "hysteresis")
classifier:
  strategy: "hysteresis"
  threshold: 0.02

# Eye-line estimation
eye_line:
  widen_factor: 1.4

# Pose estimation
pose:
  scale_factor: 10.0
  depth_factor: 8.0
  pitch_damping: 0.5

# Debug canvas
debug:
  canvas_width: 640
  canvas_height: 480
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.classifier.strategy, "hysteresis");
        assert_eq!(config.eye_line.widen_factor, 1.4);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("pose:\n  scale_factor: 12.0\n").unwrap();
        assert_eq!(config.pose.scale_factor, 12.0);
        assert_eq!(config.classifier.threshold, DEFAULT_ROTATION_THRESHOLD);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config.pose.pitch_damping = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.classifier.strategy = "nonsense".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.debug.canvas_width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_create_classifier_honors_threshold() {
        let mut config = Config::default();
        config.classifier.threshold = 0.1;
        let classifier = config.create_classifier().unwrap();
        assert_eq!(classifier.name(), "AngleHysteresis");

        config.classifier.strategy = "direct".to_string();
        let classifier = config.create_classifier().unwrap();
        assert_eq!(classifier.name(), "DirectComparison");
    }
}
