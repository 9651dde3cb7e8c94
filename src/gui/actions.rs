// src/gui/actions.rs

use std::fs;

use eframe::egui;

use crate::{csv, report, specs, stats};

use super::app::App;

/// Re-scrape from the snapshot path in the input field and rebuild the
/// table and summary together.
pub fn load(app: &mut App) {
    let path = app.input_text.trim().to_string();
    if path.is_empty() {
        app.status("No snapshot path given");
        return;
    }

    let doc = match fs::read_to_string(&path) {
        Ok(d) => d,
        Err(e) => {
            loge!("Load: {} ({})", path, e);
            app.status(format!("Read failed: {}", e));
            return;
        }
    };

    let header = match specs::header::parse(&doc) {
        Ok(h) => h,
        Err(e) => {
            loge!("Load: header parse failed ({})", e);
            app.status(format!("Not a planet list page: {}", e));
            return;
        }
    };

    let planets = specs::planets::parse(&doc);
    let s = stats::aggregate(&planets);

    app.rows = csv::planet_rows(&planets);
    app.summary = report::render(&s, &header);
    logf!("Load: {} planets, turn {}", planets.len(), header.turn);
    app.status(format!("Loaded {} planets (turn {})", planets.len(), header.turn));

    app.planets = planets;
    app.header = Some(header);
}

/// Put the summary block on the system clipboard.
pub fn copy(app: &mut App, ctx: &egui::Context) {
    ctx.copy_text(app.summary.clone());
    logf!("Copy: summary ({} bytes)", app.summary.len());
    app.status("Summary copied");
}
