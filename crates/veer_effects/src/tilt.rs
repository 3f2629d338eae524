//! 3D card tilt
//!
//! A hovered element rotates toward the pointer (up to a configurable
//! amplitude) and scales up slightly. Rotation channels carry decay so
//! they ease back through zero without ringing; the scale channel does
//! not decay, its rest value is 1.

use veer_core::{Point, PointerEvent, Rect};
use veer_motion::{Channel, ChannelSet, SpringConfig};

const ROTATE_X: &str = "rotate_x";
const ROTATE_Y: &str = "rotate_y";
const SCALE: &str = "scale";

/// Tilt effect parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    /// Maximum rotation magnitude, in degrees
    pub rotate_amplitude: f32,
    /// Scale target while the pointer is over the element
    pub hover_scale: f32,
    /// Perspective distance handed through to the host transform
    pub perspective: f32,
    /// Smoothing for the rotation channels (decay applies here)
    pub rotation_spring: SpringConfig,
    /// Smoothing for the scale channel (no decay)
    pub scale_spring: SpringConfig,
}

impl TiltConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotate_amplitude(mut self, degrees: f32) -> Self {
        self.rotate_amplitude = degrees;
        self
    }

    pub fn hover_scale(mut self, scale: f32) -> Self {
        self.hover_scale = scale;
        self
    }

    pub fn perspective(mut self, perspective: f32) -> Self {
        self.perspective = perspective;
        self
    }

    pub fn rotation_spring(mut self, spring: SpringConfig) -> Self {
        self.rotation_spring = spring;
        self
    }

    pub fn scale_spring(mut self, spring: SpringConfig) -> Self {
        self.scale_spring = spring;
        self
    }
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            rotate_amplitude: 12.0,
            hover_scale: 1.05,
            perspective: 1000.0,
            rotation_spring: SpringConfig::damped(),
            scale_spring: SpringConfig::smooth(),
        }
    }
}

/// Rotation targets for a pointer offset from the element center.
///
/// `offset` is `(dx, dy)` from the center, `half_extents` is
/// `(half_width, half_height)`. Returns `(rotate_x, rotate_y)` in
/// degrees. Degenerate extents yield the rest targets instead of a
/// division by zero.
pub fn tilt_targets(offset: (f32, f32), half_extents: (f32, f32), amplitude: f32) -> (f32, f32) {
    let (dx, dy) = offset;
    let (hw, hh) = half_extents;
    if hw <= 0.0 || hh <= 0.0 || !dx.is_finite() || !dy.is_finite() || !amplitude.is_finite() {
        return (0.0, 0.0);
    }
    (-(dy / hh) * amplitude, (dx / hw) * amplitude)
}

/// The per-tick output of a [`TiltedCard`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltTransform {
    /// Rotation around the x axis, degrees
    pub rotate_x: f32,
    /// Rotation around the y axis, degrees
    pub rotate_y: f32,
    /// Uniform scale
    pub scale: f32,
    /// Perspective distance, pixels
    pub perspective: f32,
}

impl TiltTransform {
    /// Whether the transform is visually the identity
    pub fn is_rest(&self) -> bool {
        self.rotate_x.abs() < 1e-3 && self.rotate_y.abs() < 1e-3 && (self.scale - 1.0).abs() < 1e-3
    }
}

/// Pointer-following tilt controller for one element
pub struct TiltedCard {
    config: TiltConfig,
    bounds: Rect,
    channels: ChannelSet,
}

impl TiltedCard {
    pub fn new(config: TiltConfig, bounds: Rect) -> Self {
        let channels = ChannelSet::new()
            .with_channel(ROTATE_X, Channel::new(config.rotation_spring, 0.0))
            .with_channel(ROTATE_Y, Channel::new(config.rotation_spring, 0.0))
            .with_channel(SCALE, Channel::new(config.scale_spring, 1.0));
        Self {
            config,
            bounds,
            channels,
        }
    }

    /// Update the element's bounds after a layout change
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    /// Feed a pointer event; updates channel targets only
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Entered { .. } => {
                self.channels.set_target(SCALE, self.config.hover_scale);
            }
            PointerEvent::Moved { x, y } => {
                let (rx, ry) = if self.bounds.is_degenerate() {
                    (0.0, 0.0)
                } else {
                    tilt_targets(
                        self.bounds.offset_from_center(Point::new(x, y)),
                        self.bounds.half_extents(),
                        self.config.rotate_amplitude,
                    )
                };
                self.channels.set_target(ROTATE_X, rx);
                self.channels.set_target(ROTATE_Y, ry);
            }
            PointerEvent::Left => {
                self.channels.set_target(ROTATE_X, 0.0);
                self.channels.set_target(ROTATE_Y, 0.0);
                self.channels.set_target(SCALE, 1.0);
            }
        }
    }

    /// Advance one tick and return the transform to apply
    pub fn tick(&mut self) -> TiltTransform {
        self.channels.step_all();
        self.transform()
    }

    /// Current transform without advancing
    pub fn transform(&self) -> TiltTransform {
        TiltTransform {
            rotate_x: self.channels.value(ROTATE_X).unwrap_or(0.0),
            rotate_y: self.channels.value(ROTATE_Y).unwrap_or(0.0),
            scale: self.channels.value(SCALE).unwrap_or(1.0),
            perspective: self.config.perspective,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.channels.is_settled()
    }
}
