//! Terminal rendering of tracking snapshots.
//!
//! This is the only place milestone tones turn into concrete glyphs; the
//! derivation layer never deals in icons.

use ordertrail_core::{GeoPoint, MilestoneTone, TrackingSnapshot};

const BAR_WIDTH: usize = 30;

/// Shown once the order reaches the terminal status.
const DELIVERED_MESSAGE: &str = "Your order has been delivered. Enjoy your meal!";

/// Resolve a milestone tone to its terminal glyph.
fn tone_glyph(tone: MilestoneTone) -> &'static str {
    match tone {
        MilestoneTone::Done => "✓",
        MilestoneTone::Active => "◉",
        MilestoneTone::Pending => "○",
    }
}

fn progress_bar(pct: f32) -> String {
    let filled = ((pct / 100.0) * BAR_WIDTH as f32).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}] {:.0}%",
        "=".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        pct
    )
}

fn point(p: &GeoPoint) -> String {
    match &p.address {
        Some(address) => format!("{} ({:.4}, {:.4})", address, p.lat, p.lng),
        None => format!("({:.4}, {:.4})", p.lat, p.lng),
    }
}

/// Render one snapshot as a multi-line status card.
pub fn render_snapshot(snapshot: &TrackingSnapshot) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Order {} - {} (ETA {})\n",
        snapshot.order_id, snapshot.map.status, snapshot.map.eta
    ));
    out.push_str(&progress_bar(snapshot.journey.progress_pct));
    out.push('\n');

    for milestone in &snapshot.journey.milestones {
        match &milestone.time {
            Some(time) => out.push_str(&format!(
                "  {} {:<22} {}\n",
                tone_glyph(milestone.tone),
                milestone.name,
                time
            )),
            None => out.push_str(&format!(
                "  {} {}\n",
                tone_glyph(milestone.tone),
                milestone.name
            )),
        }
    }

    out.push_str(&format!(
        "Map: restaurant {} -> you {}",
        point(&snapshot.map.restaurant),
        point(&snapshot.map.destination)
    ));
    if let Some(driver) = &snapshot.map.driver {
        out.push_str(&format!(" | driver at {}", point(driver)));
    }
    out.push('\n');

    if let Some(notice) = &snapshot.map.delay_notice {
        out.push_str(notice);
        out.push('\n');
    }
    if snapshot.status.is_terminal() {
        out.push_str(DELIVERED_MESSAGE);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ordertrail_core::{
        testing::fixtures, OrderStatus, TrackingState,
    };

    fn snapshot_at(status: OrderStatus) -> TrackingSnapshot {
        TrackingState::new(fixtures::sample_order(), status, Utc::now()).snapshot()
    }

    #[test]
    fn test_glyphs_per_tone() {
        assert_eq!(tone_glyph(MilestoneTone::Done), "✓");
        assert_eq!(tone_glyph(MilestoneTone::Active), "◉");
        assert_eq!(tone_glyph(MilestoneTone::Pending), "○");
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), format!("[{}] 0%", "-".repeat(30)));
        assert_eq!(progress_bar(100.0), format!("[{}] 100%", "=".repeat(30)));
    }

    #[test]
    fn test_render_mid_journey() {
        let card = render_snapshot(&snapshot_at(OrderStatus::OutForDelivery));
        assert!(card.contains("Order FD-6B3A9 - Out for Delivery"));
        assert!(card.contains("60%"));
        assert!(card.contains("◉ Out for Delivery"));
        assert!(card.contains("○ Arriving Soon"));
        assert!(card.contains("driver at"));
        assert!(!card.contains(DELIVERED_MESSAGE));
    }

    #[test]
    fn test_render_delivered() {
        let card = render_snapshot(&snapshot_at(OrderStatus::Delivered));
        assert!(card.contains("100%"));
        assert!(card.contains(DELIVERED_MESSAGE));
        // Delivered orders no longer show a courier marker.
        assert!(!card.contains("driver at"));
    }

    #[test]
    fn test_render_delayed() {
        let card = render_snapshot(&snapshot_at(OrderStatus::Delayed));
        assert!(card.contains("Delayed"));
        assert!(card.contains("We apologize for the delay"));
    }
}
