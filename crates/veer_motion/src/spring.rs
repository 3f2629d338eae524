//! Interpolation channels
//!
//! A [`Channel`] tracks one scalar value animating toward a target.
//! Each tick closes a fixed fraction of the remaining distance
//! (`rate`), then optionally multiplies the value toward zero
//! (`decay`). Once the value lands within [`EPSILON`] of the target it
//! snaps to it exactly and further ticks are no-ops until the target
//! changes.

use tracing::warn;

/// Distance below which a channel snaps to its target and rests
pub const EPSILON: f32 = 1e-3;

const MIN_RATE: f32 = 1e-3;
const MAX_DECAY: f32 = 0.999;

/// Per-channel interpolation parameters
///
/// `rate` is the fraction of remaining distance closed per tick, in
/// `(0, 1]`. `decay` is a multiplicative pull toward zero applied after
/// the approach step, in `[0, 1)`; it is only meaningful for channels
/// whose rest value is zero (rotations). Out-of-range values are
/// clamped rather than rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    rate: f32,
    decay: f32,
}

impl SpringConfig {
    pub fn new(rate: f32, decay: f32) -> Self {
        let rate = if rate.is_finite() {
            rate.clamp(MIN_RATE, 1.0)
        } else {
            Self::default().rate
        };
        let decay = if decay.is_finite() {
            decay.clamp(0.0, MAX_DECAY)
        } else {
            0.0
        };
        Self { rate, decay }
    }

    /// Smooth approach without decay, for scale-like channels
    pub fn smooth() -> Self {
        Self {
            rate: 0.08,
            decay: 0.0,
        }
    }

    /// Decayed approach for rotation channels that rest at zero
    pub fn damped() -> Self {
        Self {
            rate: 0.08,
            decay: 0.15,
        }
    }

    /// Faster approach for proximity-driven scaling
    pub fn snappy() -> Self {
        Self {
            rate: 0.15,
            decay: 0.0,
        }
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn decay(&self) -> f32 {
        self.decay
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::smooth()
    }
}

/// One scalar animated value
#[derive(Clone, Copy, Debug)]
pub struct Channel {
    current: f32,
    target: f32,
    config: SpringConfig,
}

impl Channel {
    /// Create a channel at rest at `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        let initial = if initial.is_finite() {
            initial
        } else {
            warn!("non-finite initial channel value, using 0.0");
            0.0
        };
        Self {
            current: initial,
            target: initial,
            config,
        }
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Set the value the channel animates toward.
    ///
    /// Callable at any time, including between ticks; the next tick sees
    /// the latest target (last write wins). Non-finite targets are
    /// dropped so NaN can never reach the interpolated value.
    pub fn set_target(&mut self, target: f32) {
        if !target.is_finite() {
            warn!(value = target, "ignoring non-finite channel target");
            return;
        }
        self.target = target;
    }

    /// Jump to a value immediately, without animating
    pub fn set(&mut self, value: f32) {
        if !value.is_finite() {
            warn!(value, "ignoring non-finite channel value");
            return;
        }
        self.current = value;
        self.target = value;
    }

    /// Whether the channel has converged on its target
    pub fn is_settled(&self) -> bool {
        (self.target - self.current).abs() < EPSILON
    }

    /// Advance one tick using the configured rate
    pub fn step(&mut self) -> f32 {
        self.step_with_rate(self.config.rate)
    }

    /// Advance one tick with an explicit rate
    pub fn step_with_rate(&mut self, rate: f32) -> f32 {
        // A settled channel must stay put until the target moves;
        // decaying it here would pull it off a nonzero target again.
        if self.current == self.target {
            return self.current;
        }

        let rate = if rate.is_finite() {
            rate.clamp(MIN_RATE, 1.0)
        } else {
            self.config.rate
        };

        self.current += (self.target - self.current) * rate;
        if self.config.decay > 0.0 {
            self.current *= 1.0 - self.config.decay;
        }
        if (self.target - self.current).abs() < EPSILON {
            self.current = self.target;
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converges_monotonically() {
        for &rate in &[0.05f32, 0.08, 0.3, 1.0] {
            let mut channel = Channel::new(SpringConfig::new(rate, 0.0), 0.0);
            channel.set_target(100.0);

            let mut prev_distance = (channel.target() - channel.value()).abs();
            for _ in 0..500 {
                if channel.is_settled() {
                    break;
                }
                channel.step();
                let distance = (channel.target() - channel.value()).abs();
                assert!(
                    distance < prev_distance,
                    "distance must shrink every tick (rate {rate})"
                );
                prev_distance = distance;
            }
            assert_eq!(channel.value(), 100.0);
        }
    }

    #[test]
    fn test_rate_one_settles_in_one_tick() {
        let mut channel = Channel::new(SpringConfig::new(1.0, 0.0), 5.0);
        channel.set_target(-3.0);
        assert_eq!(channel.step(), -3.0);
        assert!(channel.is_settled());
    }

    #[test]
    fn test_decay_converges_to_exact_zero() {
        let mut channel = Channel::new(SpringConfig::damped(), 12.0);
        channel.set_target(0.0);
        for _ in 0..500 {
            channel.step();
        }
        assert_eq!(channel.value(), 0.0);
    }

    #[test]
    fn test_settled_channel_ticks_are_noops() {
        let mut channel = Channel::new(SpringConfig::smooth(), 0.0);
        channel.set_target(10.0);
        for _ in 0..500 {
            channel.step();
        }
        assert_eq!(channel.value(), 10.0);
        channel.step();
        channel.step();
        assert_eq!(channel.value(), 10.0);
    }

    #[test]
    fn test_decayed_channel_holds_equilibrium() {
        // With decay active and a nonzero target the channel rests below
        // the raw target, matching the visual behavior of damped tilt.
        let mut channel = Channel::new(SpringConfig::damped(), 0.0);
        channel.set_target(6.0);
        for _ in 0..1000 {
            channel.step();
        }
        let resting = channel.value();
        assert!(resting > 0.0 && resting < 6.0);
        channel.step();
        assert!((channel.value() - resting).abs() < 1e-4);
    }

    #[test]
    fn test_config_clamps_out_of_range() {
        let config = SpringConfig::new(5.0, -2.0);
        assert_eq!(config.rate(), 1.0);
        assert_eq!(config.decay(), 0.0);

        let config = SpringConfig::new(0.0, 1.5);
        assert!(config.rate() > 0.0);
        assert!(config.decay() < 1.0);

        let config = SpringConfig::new(f32::NAN, f32::INFINITY);
        assert!(config.rate().is_finite());
        assert_eq!(config.decay(), 0.0);
    }

    #[test]
    fn test_non_finite_targets_rejected() {
        let mut channel = Channel::new(SpringConfig::smooth(), 1.0);
        channel.set_target(f32::NAN);
        assert_eq!(channel.target(), 1.0);
        channel.set_target(f32::INFINITY);
        assert_eq!(channel.target(), 1.0);

        channel.set_target(2.0);
        for _ in 0..500 {
            channel.step();
        }
        assert!(channel.value().is_finite());
        assert_eq!(channel.value(), 2.0);
    }

    #[test]
    fn test_step_with_rate_override() {
        let mut slow = Channel::new(SpringConfig::new(0.05, 0.0), 0.0);
        let mut fast = Channel::new(SpringConfig::new(0.05, 0.0), 0.0);
        slow.set_target(10.0);
        fast.set_target(10.0);

        slow.step();
        fast.step_with_rate(0.5);
        assert!(fast.value() > slow.value());
    }

    #[test]
    fn test_set_jumps_without_animating() {
        let mut channel = Channel::new(SpringConfig::smooth(), 0.0);
        channel.set(42.0);
        assert_eq!(channel.value(), 42.0);
        assert!(channel.is_settled());
    }

    #[test]
    fn test_retarget_mid_flight() {
        let mut channel = Channel::new(SpringConfig::snappy(), 0.0);
        channel.set_target(100.0);
        for _ in 0..5 {
            channel.step();
        }
        assert!(!channel.is_settled());

        // Last write wins; the channel turns around toward the new target
        channel.set_target(0.0);
        for _ in 0..500 {
            channel.step();
        }
        assert_eq!(channel.value(), 0.0);
    }
}
