//! Veer Core Primitives
//!
//! Foundational types shared by the motion and effects crates:
//!
//! - **Geometry**: points and rectangles describing element bounds
//! - **Pointer Events**: immutable event records fed in by the host
//!
//! The host visual layer (whatever draws the elements) produces
//! [`PointerEvent`]s and element [`Rect`]s; everything downstream is
//! plain arithmetic on those values.

pub mod events;
pub mod geometry;

pub use events::PointerEvent;
pub use geometry::{Point, Rect};
