// src/gui/app.rs
//
// Single-window app: pick a saved planet list page, see the per-planet
// table, copy the chat summary. UI thread only, no workers.

use std::error::Error;

use eframe::egui;

use crate::csv::PLANET_HEADERS;
use crate::specs::header::HeaderData;
use crate::specs::planets::PlanetInfo;

use super::{actions, table};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "DarkGalaxy Planet Stats",
        options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )?;
    Ok(())
}

pub struct App {
    /// Path of the snapshot to load, as typed.
    pub input_text: String,

    // scraped state, all refreshed together by actions::load
    pub planets: Vec<PlanetInfo>,
    pub header: Option<HeaderData>,
    pub rows: Vec<Vec<String>>,
    pub summary: String,

    pub status: String,
}

impl App {
    pub fn new() -> Self {
        logf!("Init: GUI up");
        Self {
            input_text: s!("planets.html"),
            planets: Vec::new(),
            header: None,
            rows: Vec::new(),
            summary: s!(),
            status: s!("Idle"),
        }
    }

    pub fn status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Snapshot:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.input_text).desired_width(320.0),
                );
                if ui.button("Load").clicked() {
                    actions::load(self);
                }
                ui.separator();
                ui.label(&self.status);
            });
        });

        egui::TopBottomPanel::bottom("summary")
            .resizable(true)
            .default_height(180.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Summary");
                    let enabled = !self.summary.is_empty();
                    if ui.add_enabled(enabled, egui::Button::new("Copy")).clicked() {
                        actions::copy(self, ctx);
                    }
                });
                egui::ScrollArea::vertical().show(ui, |ui| {
                    // read-only; TextEdit keeps it selectable
                    let mut text = self.summary.as_str();
                    ui.add(
                        egui::TextEdit::multiline(&mut text)
                            .desired_width(f32::INFINITY)
                            .font(egui::TextStyle::Monospace),
                    );
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.rows.is_empty() {
                ui.label("No data. Load a saved planet list page.");
                return;
            }
            table::draw(ui, &PLANET_HEADERS, &self.rows);
        });
    }
}
