// src/report.rs
//! Render the aggregate stats as the chat-paste summary block.
//!
//! The output is plain text with Discord emoji shortcodes; the reader
//! pastes it into an alliance channel as-is. Line order and wording are
//! part of the contract with the people reading those channels, change
//! them deliberately.

use crate::core::num::format_grouped;
use crate::specs::header::HeaderData;
use crate::specs::planets::Resource;
use crate::stats::{GroupedOrder, PlanetStats};

fn resource_tag(kind: Resource) -> &'static str {
    match kind {
        Resource::Metal => ":metal~1:",
        Resource::Mineral => ":mineral:",
        Resource::Energy => ":energy:",
    }
}

/// `+8x Soldier done on turn 1239 (in 5 turns)`
///
/// The completion turn is current turn plus the countdown; with a NaN
/// countdown both numbers print as NaN, flagging the bad scrape right
/// in the paste.
fn order_line(g: &GroupedOrder, turn: u32) -> String {
    format!(
        "+{}x {} done on turn {} (in {} turns)",
        format_grouped(g.quantity, 0),
        g.item,
        turn as f64 + g.turns,
        g.turns,
    )
}

/// The whole summary block. No trailing newline; callers terminate it.
pub fn render(stats: &PlanetStats, header: &HeaderData) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        ":crown: {}{}",
        header.alliance.as_deref().unwrap_or(""),
        header.name,
    ));
    lines.push(format!(":hourglass: Turn: {}", header.turn));
    lines.push(format!(":coords: Planets Owned: {}", stats.planet_count));
    lines.push(format!(
        ":worker: {} ({} / planet)",
        format_grouped(stats.workers, 0),
        format_grouped(stats.avg_workers, 0),
    ));
    lines.push(format!(
        ":soldier: {} ({} / planet)",
        format_grouped(stats.soldiers, 0),
        format_grouped(stats.avg_soldiers, 0),
    ));

    for kind in Resource::ALL {
        let r = stats.resource(kind);
        lines.push(format!(
            "{} {} (+{}) {}%",
            resource_tag(kind),
            format_grouped(r.in_stock, 0),
            format_grouped(r.production, 0),
            format_grouped(r.avg_abundance, 2),
        ));
    }

    lines.push(s!(":army_barracks: Training:"));
    for g in stats.training_grouped() {
        lines.push(order_line(&g, header.turn));
    }

    lines.push(s!(":ship_yard: Producing:"));
    for g in stats.producing_grouped() {
        lines.push(order_line(&g, header.turn));
    }

    lines.join("\n")
}
