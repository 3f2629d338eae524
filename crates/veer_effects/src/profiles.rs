//! Named effect profiles
//!
//! Hosts usually apply the same effect with a few parameter sets
//! ("social cards tilt harder than repo cards"). Profiles are plain
//! TOML tables loaded once and looked up by name:
//!
//! ```toml
//! [tilt.social-card]
//! hover_scale = 1.08
//! rotate_amplitude = 12.0
//! perspective = 800.0
//!
//! [dock.navigation]
//! magnification = 70.0
//! distance = 200.0
//! ```

use crate::dock::DockConfig;
use crate::tilt::TiltConfig;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;
use veer_motion::SpringConfig;

/// Profile loading and lookup errors
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The TOML source did not parse
    #[error("failed to parse effect profiles: {0}")]
    Parse(#[from] toml::de::Error),

    /// No profile registered under the requested name
    #[error("unknown effect profile: {0}")]
    Unknown(String),
}

/// Result type for profile operations
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Tilt parameters for one profile
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct TiltProfile {
    #[serde(default = "default_hover_scale")]
    pub hover_scale: f32,
    #[serde(default = "default_rotate_amplitude")]
    pub rotate_amplitude: f32,
    #[serde(default = "default_perspective")]
    pub perspective: f32,
    #[serde(default = "default_rate")]
    pub rate: f32,
    #[serde(default = "default_decay")]
    pub decay: f32,
}

fn default_hover_scale() -> f32 {
    1.05
}

fn default_rotate_amplitude() -> f32 {
    12.0
}

fn default_perspective() -> f32 {
    1000.0
}

fn default_rate() -> f32 {
    0.08
}

fn default_decay() -> f32 {
    0.15
}

impl Default for TiltProfile {
    fn default() -> Self {
        Self {
            hover_scale: default_hover_scale(),
            rotate_amplitude: default_rotate_amplitude(),
            perspective: default_perspective(),
            rate: default_rate(),
            decay: default_decay(),
        }
    }
}

impl TiltProfile {
    /// Resolve into a [`TiltConfig`]; out-of-range spring parameters
    /// are clamped by [`SpringConfig`]
    pub fn to_config(&self) -> TiltConfig {
        TiltConfig::new()
            .hover_scale(self.hover_scale)
            .rotate_amplitude(self.rotate_amplitude)
            .perspective(self.perspective)
            .rotation_spring(SpringConfig::new(self.rate, self.decay))
            .scale_spring(SpringConfig::new(self.rate, 0.0))
    }
}

/// Dock parameters for one profile
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct DockProfile {
    #[serde(default = "default_base_item_size")]
    pub base_item_size: f32,
    #[serde(default = "default_magnification")]
    pub magnification: f32,
    #[serde(default = "default_distance")]
    pub distance: f32,
    #[serde(default = "default_dock_rate")]
    pub rate: f32,
}

fn default_base_item_size() -> f32 {
    50.0
}

fn default_magnification() -> f32 {
    70.0
}

fn default_distance() -> f32 {
    200.0
}

fn default_dock_rate() -> f32 {
    0.15
}

impl Default for DockProfile {
    fn default() -> Self {
        Self {
            base_item_size: default_base_item_size(),
            magnification: default_magnification(),
            distance: default_distance(),
            rate: default_dock_rate(),
        }
    }
}

impl DockProfile {
    pub fn to_config(&self) -> DockConfig {
        DockConfig::new()
            .base_item_size(self.base_item_size)
            .magnification(self.magnification)
            .distance(self.distance)
            .scale_spring(SpringConfig::new(self.rate, 0.0))
    }
}

/// All named profiles from one TOML document
#[derive(Debug, Default, Deserialize)]
pub struct EffectProfiles {
    #[serde(default)]
    tilt: FxHashMap<String, TiltProfile>,
    #[serde(default)]
    dock: FxHashMap<String, DockProfile>,
}

impl EffectProfiles {
    /// Parse profiles from TOML source
    pub fn from_toml(source: &str) -> Result<Self> {
        let profiles: Self = toml::from_str(source)?;
        tracing::debug!(
            tilt = profiles.tilt.len(),
            dock = profiles.dock.len(),
            "loaded effect profiles"
        );
        Ok(profiles)
    }

    /// Look up a tilt profile by name
    pub fn tilt(&self, name: &str) -> Result<&TiltProfile> {
        self.tilt
            .get(name)
            .ok_or_else(|| ProfileError::Unknown(name.to_string()))
    }

    /// Look up a dock profile by name
    pub fn dock(&self, name: &str) -> Result<&DockProfile> {
        self.dock
            .get(name)
            .ok_or_else(|| ProfileError::Unknown(name.to_string()))
    }

    pub fn tilt_names(&self) -> impl Iterator<Item = &str> {
        self.tilt.keys().map(String::as_str)
    }

    pub fn dock_names(&self) -> impl Iterator<Item = &str> {
        self.dock.keys().map(String::as_str)
    }
}
