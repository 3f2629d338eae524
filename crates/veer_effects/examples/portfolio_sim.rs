//! Simulated portfolio page interactions
//!
//! Drives a five-item dock and a tilting card from a scripted pointer
//! trace and prints the resulting transforms, standing in for a real
//! host visual layer.
//!
//! ```bash
//! cargo run -p veer_effects --example portfolio_sim
//! ```

use anyhow::Result;
use veer_core::{PointerEvent, Rect};
use veer_effects::{DockMagnifier, EffectProfiles, TiltedCard};

const PROFILES: &str = r#"
    [tilt.social-card]
    hover_scale = 1.08
    rotate_amplitude = 12.0
    perspective = 800.0

    [dock.navigation]
    magnification = 70.0
    base_item_size = 50.0
    distance = 200.0
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let profiles = EffectProfiles::from_toml(PROFILES)?;

    let mut dock = DockMagnifier::new(
        profiles.dock("navigation")?.to_config(),
        [100.0, 160.0, 220.0, 280.0, 340.0],
    );
    let mut card = TiltedCard::new(
        profiles.tilt("social-card")?.to_config(),
        Rect::new(400.0, 100.0, 300.0, 180.0),
    );

    // Sweep the pointer across the dock
    tracing::info!("sweeping pointer across the dock");
    let mut x = 80.0;
    while x <= 360.0 {
        dock.handle_event(PointerEvent::Moved { x, y: 620.0 });
        dock.tick();
        x += 8.0;
    }
    let scales: Vec<String> = dock.scales().map(|s| format!("{s:.3}")).collect();
    tracing::info!(scales = ?scales, "dock scales after sweep");

    // Hover the card, circle the pointer, then leave
    tracing::info!("hovering the card");
    card.handle_event(PointerEvent::Entered { x: 550.0, y: 190.0 });
    for i in 0..120 {
        let angle = i as f32 * 0.1;
        card.handle_event(PointerEvent::Moved {
            x: 550.0 + angle.cos() * 120.0,
            y: 190.0 + angle.sin() * 70.0,
        });
        let transform = card.tick();
        if i % 30 == 0 {
            tracing::info!(
                rotate_x = transform.rotate_x,
                rotate_y = transform.rotate_y,
                scale = transform.scale,
                "card transform"
            );
        }
    }

    tracing::info!("pointer leaves");
    card.handle_event(PointerEvent::Left);
    dock.handle_event(PointerEvent::Left);
    let mut ticks = 0;
    while !(card.is_settled() && dock.is_settled()) && ticks < 2000 {
        card.tick();
        dock.tick();
        ticks += 1;
    }
    tracing::info!(ticks, "settled back to rest");

    Ok(())
}
