// src/gui/components/course_table.rs
//
// Editable course table. Cells are text buffers (`app.drafts`); a cell is
// committed when it loses focus with text that differs from the record.
// Edits and removals are collected while drawing and applied afterwards,
// so the list never changes mid-frame.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    courses::{field_text, Edit, Field},
    engine::GpaReport,
    gui::app::App,
};

const WIDTHS: [f32; 4] = [80.0, 260.0, 60.0, 60.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App, report: &GpaReport) {
    if app.courses.is_empty() {
        ui.label("No courses. Load a saved page or add one above.");
        return;
    }

    let mut pending: Vec<Edit> = Vec::new();
    let weak = ui.visuals().weak_text_color();
    let show_uncounted = app.state.gui.show_uncounted;
    ui.checkbox(&mut app.state.gui.show_uncounted, "Show rows that do not count");

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .column(Column::exact(28.0));
    for w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(30.0));
    }
    table = table.column(Column::exact(48.0)).column(Column::exact(28.0));

    table
        .header(22.0, |mut header| {
            header.col(|ui| { ui.strong("#"); });
            for f in Field::ALL {
                header.col(|ui| { ui.strong(f.label()); });
            }
            header.col(|ui| { ui.strong("Points"); });
            header.col(|_ui| {});
        })
        .body(|mut body| {
            for i in 0..app.courses.len() {
                let counted = report.is_counted(i);
                if !counted && !show_uncounted {
                    continue;
                }
                body.row(22.0, |mut row| {
                    row.col(|ui| { ui.label((i + 1).to_string()); });

                    for (fi, field) in Field::ALL.into_iter().enumerate() {
                        row.col(|ui| {
                            let Some(draft) = app.drafts.get_mut(i).map(|d| &mut d[fi]) else { return };
                            let mut edit = egui::TextEdit::singleline(draft).desired_width(f32::INFINITY);
                            if !counted {
                                edit = edit.text_color(weak);
                            }
                            let resp = ui.add(edit);
                            if resp.lost_focus() {
                                if let Some(rec) = app.courses.get(i) {
                                    if *draft != field_text(rec, field) {
                                        pending.push(Edit::Set { index: i, field, value: draft.clone() });
                                    }
                                }
                            }
                        });
                    }

                    row.col(|ui| {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            let pts = app
                                .courses
                                .get(i)
                                .filter(|_| counted)
                                .and_then(|c| app.state.scale.countable_points(&c.grade));
                            match pts {
                                Some(p) => ui.label(format!("{p:.1}")),
                                None => ui.label(RichText::new("-").color(weak)),
                            };
                        });
                    });

                    row.col(|ui| {
                        if ui.small_button("✕").on_hover_text("Remove course").clicked() {
                            pending.push(Edit::Remove { index: i });
                        }
                    });
                });
            }
        });

    commit(app, pending);
}

/// Apply edits gathered while drawing. Cell edits go first so a removal in
/// the same frame cannot discard their text; only the first removal is
/// applied since it shifts later indices.
fn commit(app: &mut App, pending: Vec<Edit>) {
    let (removals, edits): (Vec<Edit>, Vec<Edit>) =
        pending.into_iter().partition(|e| matches!(e, Edit::Remove { .. }));
    for edit in edits {
        app.apply_edit(edit);
    }
    if let Some(removal) = removals.into_iter().next() {
        app.apply_edit(removal);
    }
}
