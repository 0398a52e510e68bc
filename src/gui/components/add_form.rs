// src/gui/components/add_form.rs

use eframe::egui;
use crate::{courses::Edit, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut add_clicked = false;

    ui.horizontal(|ui| {
        ui.label("Add course:");
        ui.add(egui::TextEdit::singleline(&mut app.add_form.name).hint_text("Name").desired_width(220.0));
        ui.add(egui::TextEdit::singleline(&mut app.add_form.credits).hint_text("Credits").desired_width(60.0));

        let grade = &mut app.add_form.grade;
        egui::ComboBox::from_id_salt("add_grade")
            .selected_text(if grade.is_empty() { "Grade" } else { grade.as_str() })
            .show_ui(ui, |ui| {
                for sym in app.state.scale.symbols() {
                    ui.selectable_value(grade, s!(sym), sym);
                }
                for sentinel in app.state.scale.sentinels().iter().filter(|s| !s.is_empty()) {
                    ui.selectable_value(grade, sentinel.clone(), sentinel.as_str());
                }
            });

        if ui.button("Add").clicked() {
            add_clicked = true;
        }
    });

    if add_clicked {
        let form = app.add_form.clone();
        let edit = Edit::Add { name: form.name, credits: form.credits, grade: form.grade };
        if app.apply_edit(edit) {
            app.add_form = Default::default();
        }
    }
}
