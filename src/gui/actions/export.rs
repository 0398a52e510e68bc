// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!("Export: Out path set → {}", app.state.options.export.out_path().display());
        app.out_path_dirty = false;
    }

    if app.courses.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let report = app.report();
    let msg = match file::write_export(
        &app.state.options.export,
        app.courses.as_slice(),
        &report,
        &app.state.scale,
    ) {
        Ok(path) => {
            logf!("Export: OK rows={} → {}", app.courses.len(), path.display());
            format!("Exported {}", path.display())
        }
        Err(e) => {
            loge!("Export: Error: {e}");
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
