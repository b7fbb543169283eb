//! Eyewear overlay pose demo: runs the landmark-to-pose pipeline on a
//! synthetic head-sweep sequence.

use anyhow::Result;
use clap::Parser;
use glasses_overlay::app::{AppConfig, OverlayApp};
use glasses_overlay::config::Config;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of frames to process
    #[arg(short, long, default_value = "120")]
    frames: u64,

    /// Rotation classifier strategy (direct, hysteresis)
    #[arg(short = 'r', long)]
    classifier: Option<String>,

    /// Directory to dump per-frame debug canvases (PNG)
    #[arg(long)]
    dump: Option<PathBuf>,

    /// Print per-frame debug snapshots as JSON
    #[arg(short, long)]
    snapshots: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Eyewear Overlay Pose Demo");

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if let Some(strategy) = args.classifier {
        config.classifier.strategy = strategy;
    }

    let mut app = OverlayApp::new(
        &config,
        AppConfig {
            frames: args.frames,
            dump_dir: args.dump,
            print_snapshots: args.snapshots,
        },
    )?;
    app.run()?;

    Ok(())
}
