//! Game geometry and tuning
//!
//! Fixed for the lifetime of a `GameState`. Validated before the first pipe
//! is spawned so gap generation can never leave the playfield.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io(std::io::Error),
    /// Config text is not valid JSON for this schema
    Parse(serde_json::Error),
    /// A single field holds an unusable value
    Invalid { field: &'static str, reason: &'static str },
    /// The gap plus its margins and the ground do not fit in the playfield
    GapDoesNotFit { required: f32, height: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config: {}", e),
            Self::Parse(e) => write!(f, "failed to parse config: {}", e),
            Self::Invalid { field, reason } => write!(f, "invalid `{}`: {}", field, reason),
            Self::GapDoesNotFit { required, height } => write!(
                f,
                "gap and margins need {} px but the playfield is {} px tall",
                required, height
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub width: f32,
    pub height: f32,
    /// Ground strip thickness; touching it ends the run
    pub ground_height: f32,

    // === Cat ===
    pub cat_size: f32,
    pub gravity: f32,
    /// Velocity assigned by a flap (negative = up)
    pub flap_impulse: f32,

    // === Pipes ===
    pub pipe_width: f32,
    pub gap_height: f32,
    /// Distance between consecutive pipes' leading edges
    pub pipe_spacing: f32,
    /// Pipes kept alive in the sliding window
    pub pipe_count: usize,
    pub gap_margin_top: f32,
    pub gap_margin_bottom: f32,

    // === Difficulty ===
    pub base_speed: u32,
    pub max_speed: u32,
    pub speed_up_interval: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,

            cat_size: CAT_SIZE,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,

            pipe_width: PIPE_WIDTH,
            gap_height: PIPE_GAP_HEIGHT,
            pipe_spacing: PIPE_SPACING,
            pipe_count: PIPE_COUNT,
            gap_margin_top: GAP_MARGIN_TOP,
            gap_margin_bottom: GAP_MARGIN_BOTTOM,

            base_speed: BASE_SPEED,
            max_speed: MAX_SPEED,
            speed_up_interval: SPEED_UP_INTERVAL,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Horizontal centre of the cat (fixed for the whole run)
    pub fn cat_x(&self) -> f32 {
        self.width / 4.0
    }

    /// Vertical centre the cat starts each run at
    pub fn cat_start_y(&self) -> f32 {
        self.height / 2.0
    }

    /// Y coordinate of the top of the ground strip
    pub fn ground_y(&self) -> f32 {
        self.height - self.ground_height
    }

    /// Inclusive range the gap top is drawn from
    pub fn gap_top_range(&self) -> (f32, f32) {
        let max = self.ground_y() - self.gap_margin_bottom - self.gap_height;
        (self.gap_margin_top, max)
    }

    /// Check that every constant is usable and that gaps always fit
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("cat_size", self.cat_size)?;
        positive("pipe_width", self.pipe_width)?;
        positive("gap_height", self.gap_height)?;
        positive("pipe_spacing", self.pipe_spacing)?;
        non_negative("ground_height", self.ground_height)?;
        non_negative("gap_margin_top", self.gap_margin_top)?;
        non_negative("gap_margin_bottom", self.gap_margin_bottom)?;
        finite("gravity", self.gravity)?;
        finite("flap_impulse", self.flap_impulse)?;

        if self.pipe_count == 0 {
            return Err(ConfigError::Invalid {
                field: "pipe_count",
                reason: "at least one pipe is required",
            });
        }
        if self.base_speed == 0 {
            return Err(ConfigError::Invalid {
                field: "base_speed",
                reason: "pipes must move",
            });
        }
        if self.max_speed < self.base_speed {
            return Err(ConfigError::Invalid {
                field: "max_speed",
                reason: "must not be below base_speed",
            });
        }
        if self.speed_up_interval == 0 {
            return Err(ConfigError::Invalid {
                field: "speed_up_interval",
                reason: "must be at least one tick",
            });
        }
        if self.pipe_spacing <= self.pipe_width {
            return Err(ConfigError::Invalid {
                field: "pipe_spacing",
                reason: "pipes would overlap",
            });
        }

        let required =
            self.gap_margin_top + self.gap_height + self.gap_margin_bottom + self.ground_height;
        if required > self.height {
            return Err(ConfigError::GapDoesNotFit {
                required,
                height: self.height,
            });
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be finite",
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be positive",
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must not be negative",
        })
    }
}
