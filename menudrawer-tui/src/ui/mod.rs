//! Top-level UI — trigger page, bottom sheet on top, status bar.

pub mod drawer;
pub mod layout;
pub mod menu_list;
pub mod status_bar;
pub mod trigger;

use ratatui::Frame;

use crate::app::AppState;
use layout::ScreenLayout;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let layout = ScreenLayout::compute(f.area(), app);

    trigger::render(f, layout.trigger, app);

    // Sheet on top of the dimmed page.
    if let Some(sheet) = &layout.sheet {
        drawer::render(f, sheet, app);
    }

    status_bar::render(f, layout.status, app);
}
