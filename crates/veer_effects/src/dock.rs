//! Dock magnification
//!
//! Items near the pointer scale up, falling off linearly with distance
//! until `distance` pixels away, where the scale is exactly 1. Only the
//! pointer's x coordinate matters; the dock is a horizontal row.

use veer_core::PointerEvent;
use veer_motion::{Channel, SpringConfig};

/// Dock magnification parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DockConfig {
    /// Unmagnified item size, in pixels
    pub base_item_size: f32,
    /// Item size directly under the pointer, in pixels
    pub magnification: f32,
    /// Pointer distance at which magnification reaches zero
    pub distance: f32,
    /// Smoothing for the per-item scale channels
    pub scale_spring: SpringConfig,
}

impl DockConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_item_size(mut self, size: f32) -> Self {
        self.base_item_size = size;
        self
    }

    pub fn magnification(mut self, size: f32) -> Self {
        self.magnification = size;
        self
    }

    pub fn distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    pub fn scale_spring(mut self, spring: SpringConfig) -> Self {
        self.scale_spring = spring;
        self
    }

    /// Peak scale factor (magnified size over base size)
    pub fn magnification_ratio(&self) -> f32 {
        if self.base_item_size > 0.0 && self.magnification.is_finite() {
            self.magnification / self.base_item_size
        } else {
            1.0
        }
    }
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            base_item_size: 50.0,
            magnification: 70.0,
            distance: 200.0,
            scale_spring: SpringConfig::snappy(),
        }
    }
}

/// Target scale for an item whose center is `center_x`, given the
/// pointer at `pointer_x`.
///
/// Linear falloff: 1 at `distance` or beyond, the full magnification
/// ratio at distance zero, continuous in between. Degenerate config
/// (non-positive distance or base size) yields the rest scale.
pub fn proximity_scale(pointer_x: f32, center_x: f32, config: &DockConfig) -> f32 {
    if config.distance <= 0.0 || !pointer_x.is_finite() || !center_x.is_finite() {
        return 1.0;
    }
    let distance = (pointer_x - center_x).abs();
    if distance >= config.distance {
        return 1.0;
    }
    let normalized = distance / config.distance;
    1.0 + (config.magnification_ratio() - 1.0) * (1.0 - normalized)
}

struct DockItem {
    center_x: f32,
    scale: Channel,
}

/// Proximity-scaling controller for a row of dock items
pub struct DockMagnifier {
    config: DockConfig,
    items: Vec<DockItem>,
    hovered: bool,
}

impl DockMagnifier {
    /// Create a magnifier for items at the given center x-coordinates
    pub fn new(config: DockConfig, item_centers: impl IntoIterator<Item = f32>) -> Self {
        let items = item_centers
            .into_iter()
            .map(|center_x| DockItem {
                center_x,
                scale: Channel::new(config.scale_spring, 1.0),
            })
            .collect();
        Self {
            config,
            items,
            hovered: false,
        }
    }

    /// Update an item's center after a layout change.
    ///
    /// Targets are recomputed on the next pointer move; until then the
    /// item keeps animating toward its previous target.
    pub fn set_item_center(&mut self, index: usize, center_x: f32) {
        if let Some(item) = self.items.get_mut(index) {
            item.center_x = center_x;
        }
    }

    /// Feed a pointer event; updates every item's scale target
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Moved { x, .. } | PointerEvent::Entered { x, .. } => {
                self.hovered = true;
                for item in &mut self.items {
                    item.scale
                        .set_target(proximity_scale(x, item.center_x, &self.config));
                }
            }
            PointerEvent::Left => {
                self.hovered = false;
                for item in &mut self.items {
                    item.scale.set_target(1.0);
                }
            }
        }
    }

    /// Advance all scale channels by one tick
    pub fn tick(&mut self) {
        for item in &mut self.items {
            item.scale.step();
        }
    }

    /// Current scale of one item
    pub fn scale(&self, index: usize) -> Option<f32> {
        self.items.get(index).map(|i| i.scale.value())
    }

    /// Current scales of all items, in item order
    pub fn scales(&self) -> impl Iterator<Item = f32> + '_ {
        self.items.iter().map(|i| i.scale.value())
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_settled(&self) -> bool {
        self.items.iter().all(|i| i.scale.is_settled())
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn config(&self) -> &DockConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_at_zero_distance_is_full_ratio() {
        let config = DockConfig::default();
        let scale = proximity_scale(300.0, 300.0, &config);
        assert!((scale - 70.0 / 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_scale_outside_range_is_exactly_one() {
        let config = DockConfig::default();
        // Item center 300px from the pointer with distance 200
        assert_eq!(proximity_scale(0.0, 300.0, &config), 1.0);
        assert_eq!(proximity_scale(0.0, 200.0, &config), 1.0);
    }

    #[test]
    fn test_falloff_is_linear_and_continuous() {
        let config = DockConfig::default();
        let ratio = config.magnification_ratio();

        // Halfway out, half the magnification
        let halfway = proximity_scale(0.0, 100.0, &config);
        assert!((halfway - (1.0 + (ratio - 1.0) * 0.5)).abs() < 1e-6);

        // No jump approaching the boundary
        let just_inside = proximity_scale(0.0, 199.999, &config);
        assert!((just_inside - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_config_rests() {
        let config = DockConfig::default().distance(0.0);
        assert_eq!(proximity_scale(0.0, 0.0, &config), 1.0);

        let config = DockConfig::default().base_item_size(0.0);
        assert_eq!(proximity_scale(0.0, 0.0, &config), 1.0);

        let config = DockConfig::default();
        assert_eq!(proximity_scale(f32::NAN, 0.0, &config), 1.0);
    }

    #[test]
    fn test_move_retargets_every_item() {
        let mut dock = DockMagnifier::new(DockConfig::default(), [100.0, 150.0, 200.0]);
        dock.handle_event(PointerEvent::Moved { x: 100.0, y: 0.0 });
        assert!(dock.is_hovered());

        for _ in 0..500 {
            dock.tick();
        }
        let scales: Vec<f32> = dock.scales().collect();
        // Nearest item magnified most
        assert!(scales[0] > scales[1]);
        assert!(scales[1] > scales[2]);
        assert!((scales[0] - 1.4).abs() < 1e-3);
    }

    #[test]
    fn test_leave_resets_to_rest() {
        let mut dock = DockMagnifier::new(DockConfig::default(), [100.0, 150.0]);
        dock.handle_event(PointerEvent::Moved { x: 120.0, y: 0.0 });
        for _ in 0..10 {
            dock.tick();
        }
        assert!(dock.scale(0).unwrap() > 1.0);

        dock.handle_event(PointerEvent::Left);
        assert!(!dock.is_hovered());
        for _ in 0..500 {
            dock.tick();
        }
        assert_eq!(dock.scale(0), Some(1.0));
        assert_eq!(dock.scale(1), Some(1.0));
        assert!(dock.is_settled());
    }
}
