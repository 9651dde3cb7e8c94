// src/gui/table.rs
//
// Draws the per-planet table. Purely a view over prebuilt string rows.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

pub fn draw(ui: &mut egui::Ui, headers: &[&str], rows: &[Vec<String>]) {
    let mut table = TableBuilder::new(ui).striped(true).min_scrolled_height(0.0);
    for _ in headers {
        table = table.column(Column::auto().resizable(true).clip(true).at_least(40.0));
    }

    table
        .header(24.0, |mut header| {
            for h in headers {
                header.col(|ui| {
                    ui.label(RichText::new(*h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let data = &rows[row.index()];
                for ci in 0..headers.len() {
                    row.col(|ui| {
                        if let Some(cell) = data.get(ci) {
                            ui.label(cell);
                        }
                    });
                }
            });
        });
}
