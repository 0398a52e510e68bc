// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    courses::{field_text, CourseList, Edit, Field},
    engine::GpaReport,
    runner,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "GPA Calculator",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// Text typed into the "Add course" row.
#[derive(Clone, Debug, Default)]
pub struct AddForm {
    pub name: String,
    pub credits: String,
    pub grade: String,
}

pub struct App {
    pub state: AppState,

    // Current source of truth; only mutated through `apply_edit`/`load_page`.
    pub courses: CourseList,

    // Per-row cell text buffers, same order as `courses`, one per `Field::ALL`.
    pub drafts: Vec<[String; 4]>,

    pub add_form: AddForm,

    // Output text field UX (mapped into ExportOptions on export)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        state.gui.input_text = state.options.extract.input.to_string_lossy().into_owned();
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        let mut app = Self {
            state,
            courses: CourseList::new(),
            drafts: Vec::new(),
            add_form: AddForm::default(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
        };

        // Pick up a saved page in the working directory, if there is one.
        if app.state.options.extract.input.exists() {
            app.load_page();
        } else {
            logd!("Init: no page at {}", app.state.options.extract.input.display());
        }
        logf!("Init: courses={}", app.courses.len());
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Fresh per-row outcome for the current list. Called every frame;
    /// nothing is cached between edits.
    pub fn report(&self) -> GpaReport {
        self.courses.report(&self.state.scale)
    }

    /// Read the page named in the path field and replace the course list.
    pub fn load_page(&mut self) {
        let path = PathBuf::from(self.state.gui.input_text.trim());
        self.state.options.extract.input = path.clone();

        match runner::run_file(&path, &self.state.options.extract, &self.state.scale) {
            Ok(summary) => {
                let n = summary.courses.len();
                let skipped = summary.skipped.len();
                self.courses = summary.courses;
                self.sync_drafts();
                self.status(format!("Loaded {n} course(s), skipped {skipped} row(s)"));
            }
            Err(e) => {
                // A failed load leaves the current list alone
                self.status(format!("Error: {e}"));
            }
        }
    }

    /// The only mutation path for the table and add form.
    pub fn apply_edit(&mut self, edit: Edit) -> bool {
        logd!("Edit: {:?}", edit);
        let ok = match self.courses.apply(edit, &self.state.scale) {
            Ok(r) => {
                self.status(format!("GPA {} over {} credit(s)", r.gpa_display(), r.total_credits));
                true
            }
            Err(e) => {
                logw!("Edit: rejected: {e}");
                self.status(format!("Rejected: {e}"));
                false
            }
        };
        // Also restores the old cell text when the edit was rejected
        self.sync_drafts();
        ok
    }

    pub fn sync_drafts(&mut self) {
        self.drafts = self
            .courses
            .iter()
            .map(|c| Field::ALL.map(|f| field_text(c, f)))
            .collect();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let report = self.report();

        egui::TopBottomPanel::bottom("summary").show(ctx, |ui| {
            crate::gui::components::summary_bar::draw(ui, self, &report);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::load_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::add_form::draw(ui, self);

            ui.separator();

            crate::gui::components::course_table::draw(ui, self, &report);
        });
    }
}
