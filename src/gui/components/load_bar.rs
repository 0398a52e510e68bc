// src/gui/components/load_bar.rs
//
// Page file field + Load button. The table class selector is editable too,
// for portals that restyle the courses table.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut load_clicked = false;

    ui.horizontal(|ui| {
        ui.label("Page:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.input_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(360.0),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            load_clicked = true;
        }
        if ui.button("Load").clicked() {
            load_clicked = true;
        }
    });

    ui.horizontal(|ui| {
        let sel = &mut app.state.options.extract.selector;
        ui.label("Table:");
        ui.add(egui::TextEdit::singleline(&mut sel.tag).desired_width(60.0));
        ui.label("classes");
        if ui
            .add(egui::TextEdit::singleline(&mut sel.classes).desired_width(260.0))
            .changed()
        {
            logd!("UI: table selector → {}", sel.to_css());
        }
    });

    if load_clicked {
        crate::gui::actions::load(app);
    }
}
