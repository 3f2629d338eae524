//! Veer Pointer Effects
//!
//! The two stock consumers of the motion system:
//!
//! - **Dock magnification**: items scale up as the pointer approaches,
//!   with a linear falloff over a configurable distance
//! - **Card tilt**: elements rotate toward the pointer and scale
//!   slightly while hovered
//!
//! Controllers own their channels and expose `handle_event` + `tick`.
//! The host feeds in [`veer_core::PointerEvent`]s and element geometry,
//! and applies the numeric outputs as transforms however it likes.
//!
//! # Example
//!
//! ```
//! use veer_core::{PointerEvent, Rect};
//! use veer_effects::{TiltConfig, TiltedCard};
//!
//! let mut card = TiltedCard::new(TiltConfig::default(), Rect::new(0.0, 0.0, 200.0, 100.0));
//! card.handle_event(PointerEvent::Entered { x: 150.0, y: 25.0 });
//! card.handle_event(PointerEvent::Moved { x: 150.0, y: 25.0 });
//! let transform = card.tick();
//! assert!(transform.rotate_y > 0.0);
//! ```

pub mod dock;
pub mod profiles;
pub mod tilt;

pub use dock::{proximity_scale, DockConfig, DockMagnifier};
pub use profiles::{DockProfile, EffectProfiles, ProfileError, TiltProfile};
pub use tilt::{tilt_targets, TiltConfig, TiltTransform, TiltedCard};
