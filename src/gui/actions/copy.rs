// src/gui/actions/copy.rs
use eframe::egui;
use crate::{file, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.courses.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let report = app.report();
    match file::to_export_string(&app.state.options.export, app.courses.as_slice(), &report, &app.state.scale) {
        Ok(txt) => {
            logf!("Copy: rows={}, gpa={}", app.courses.len(), report.result.gpa_display());
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            loge!("Copy: Error: {e}");
            app.status(format!("Copy error: {e}"));
        }
    }
}
