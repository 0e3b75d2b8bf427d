//! Facing configuration resource.
//!
//! Holds the default controller settings and the simulation parameters used by
//! the demo loop, loaded from an INI configuration file. Defaults are safe to
//! run with when no file exists.
//!
//! # Configuration File Format
//!
//! ```ini
//! [facing]
//! smoothing_rate = 5.0
//! adjustment_angle_degrees = 0.0
//! clamp_factor = true
//!
//! [simulation]
//! frames = 600
//! fixed_dt = 0.016666
//! time_scale = 1.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::facing::{DEFAULT_ADJUSTMENT_ANGLE_DEGREES, DEFAULT_SMOOTHING_RATE, FacingController};

const DEFAULT_CLAMP_FACTOR: bool = true;
const DEFAULT_FRAMES: u32 = 600;
const DEFAULT_FIXED_DT: f32 = 1.0 / 60.0;
const DEFAULT_TIME_SCALE: f32 = 1.0;
pub const DEFAULT_CONFIG_PATH: &str = "./facing.ini";

/// Facing and simulation configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct FacingConfig {
    /// Default smoothing rate for new controllers.
    pub smoothing_rate: f32,
    /// Default artwork offset in degrees for new controllers.
    pub adjustment_angle_degrees: f32,
    /// Clamp the interpolation factor to `[0, 1]`.
    pub clamp_factor: bool,
    /// Number of ticks the demo runs.
    pub frames: u32,
    /// Unscaled delta fed to every tick, in seconds.
    pub fixed_dt: f32,
    /// Multiplier applied to `fixed_dt` by the world clock.
    pub time_scale: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for FacingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FacingConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            smoothing_rate: DEFAULT_SMOOTHING_RATE,
            adjustment_angle_degrees: DEFAULT_ADJUSTMENT_ANGLE_DEGREES,
            clamp_factor: DEFAULT_CLAMP_FACTOR,
            frames: DEFAULT_FRAMES,
            fixed_dt: DEFAULT_FIXED_DT,
            time_scale: DEFAULT_TIME_SCALE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [facing] section
        if let Some(rate) = config.getfloat("facing", "smoothing_rate").ok().flatten() {
            self.smoothing_rate = rate as f32;
        }
        if let Some(adj) = config
            .getfloat("facing", "adjustment_angle_degrees")
            .ok()
            .flatten()
        {
            self.adjustment_angle_degrees = adj as f32;
        }
        if let Some(clamp) = config.getbool("facing", "clamp_factor").ok().flatten() {
            self.clamp_factor = clamp;
        }

        // [simulation] section
        if let Some(frames) = config.getuint("simulation", "frames").ok().flatten() {
            self.frames = frames as u32;
        }
        if let Some(dt) = config.getfloat("simulation", "fixed_dt").ok().flatten() {
            self.fixed_dt = dt as f32;
        }
        if let Some(scale) = config.getfloat("simulation", "time_scale").ok().flatten() {
            self.time_scale = scale as f32;
        }

        if self.smoothing_rate <= 0.0 {
            warn!(
                "smoothing_rate = {} is not positive; owners will not turn as expected",
                self.smoothing_rate
            );
        }

        info!(
            "Loaded config: smoothing_rate={}, adjustment={}deg, clamp={}, frames={}, dt={}, time_scale={}",
            self.smoothing_rate,
            self.adjustment_angle_degrees,
            self.clamp_factor,
            self.frames,
            self.fixed_dt,
            self.time_scale
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [facing] section
        config.set("facing", "smoothing_rate", Some(self.smoothing_rate.to_string()));
        config.set(
            "facing",
            "adjustment_angle_degrees",
            Some(self.adjustment_angle_degrees.to_string()),
        );
        config.set("facing", "clamp_factor", Some(self.clamp_factor.to_string()));

        // [simulation] section
        config.set("simulation", "frames", Some(self.frames.to_string()));
        config.set("simulation", "fixed_dt", Some(self.fixed_dt.to_string()));
        config.set("simulation", "time_scale", Some(self.time_scale.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Controller built from the configured defaults.
    pub fn controller(&self) -> FacingController {
        let controller = FacingController::new(self.smoothing_rate, self.adjustment_angle_degrees);
        if self.clamp_factor {
            controller
        } else {
            controller.unclamped()
        }
    }
}
