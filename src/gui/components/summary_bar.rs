// src/gui/components/summary_bar.rs

use eframe::egui::{self, RichText};
use crate::{engine::GpaReport, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &App, report: &GpaReport) {
    ui.horizontal(|ui| {
        ui.label(format!("Counted: {}/{}", report.counted.len(), app.courses.len()));
        ui.separator();
        ui.label(format!("Total Credits: {}", report.result.total_credits));
        ui.separator();
        ui.label(RichText::new(format!("GPA: {}", report.result.gpa_display())).strong());
        ui.separator();
        ui.label(app.status_text());
    });
}
