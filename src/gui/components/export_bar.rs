// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{config::options::ExportFormat, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        let prev_fmt = export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

            ui.checkbox(&mut export.include_headers, "Include headers");
            ui.checkbox(&mut export.include_summary, "Include GPA summary");
        });

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        if ui.button("Copy").clicked() {
            crate::gui::actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            crate::gui::actions::export(app);
        }
    });
}
