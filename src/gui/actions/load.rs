// src/gui/actions/load.rs
use crate::gui::app::App;

pub fn load(app: &mut App) {
    logf!(
        "Load: Begin page={} selector={}",
        app.state.gui.input_text.trim(),
        app.state.options.extract.selector.to_css()
    );
    app.load_page();
}
