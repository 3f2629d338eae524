//! Veer Motion System
//!
//! Spring-style interpolation for pointer-driven UI motion.
//!
//! # Features
//!
//! - **Channels**: scalar values that approach a target a fixed fraction
//!   per tick, with optional decay toward zero for rotation-like values
//! - **Channel Sets**: named channels owned by one element instance
//! - **Scheduler**: ticks every registered channel set once per frame
//! - **Frame Ticker**: explicit start/cancel frame loop with a handle
//!   that stops the loop when released
//!
//! The update rule is deliberately not a mass-spring-damper ODE solver:
//! exponential approach plus decay is perceptually adequate for hover
//! effects and costs O(1) per channel per tick.

pub mod channel_set;
pub mod scheduler;
pub mod spring;
pub mod ticker;

pub use channel_set::ChannelSet;
pub use scheduler::{ChannelSetId, MotionScheduler};
pub use spring::{Channel, SpringConfig, EPSILON};
pub use ticker::{shared_scheduler, FrameTicker, SharedScheduler, TickerHandle};
