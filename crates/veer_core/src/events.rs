//! Pointer event records
//!
//! Events are small immutable values produced by the host visual layer
//! and consumed by effect controllers. A controller reacts to an event
//! by updating animation targets only; the per-frame tick does the rest.

use crate::geometry::Point;

/// A pointer interaction, in screen-space coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved while over the element
    Moved { x: f32, y: f32 },
    /// Pointer crossed into the element
    Entered { x: f32, y: f32 },
    /// Pointer left the element
    Left,
}

impl PointerEvent {
    /// Pointer position, if the event carries one
    pub fn position(&self) -> Option<Point> {
        match *self {
            PointerEvent::Moved { x, y } | PointerEvent::Entered { x, y } => {
                Some(Point::new(x, y))
            }
            PointerEvent::Left => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position() {
        assert_eq!(
            PointerEvent::Moved { x: 3.0, y: 4.0 }.position(),
            Some(Point::new(3.0, 4.0))
        );
        assert_eq!(
            PointerEvent::Entered { x: 1.0, y: 2.0 }.position(),
            Some(Point::new(1.0, 2.0))
        );
        assert_eq!(PointerEvent::Left.position(), None);
    }
}
