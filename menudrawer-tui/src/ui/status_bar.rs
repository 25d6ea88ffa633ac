//! Bottom status bar — announcement of the focused control and key hints.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::ui::menu_list;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let mut spans: Vec<Span> = vec![Span::styled(format!(" {}", app.announcement()), theme.accent())];

    spans.push(Span::raw(" | "));
    if app.drawer_open {
        spans.push(Span::styled(
            menu_list::list_description(app.visible_items().len()),
            theme.muted(),
        ));
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "↑↓ move  Enter open  ⌫ back  Esc close  q quit",
            theme.muted(),
        ));
    } else {
        spans.push(Span::styled("Enter open menu  q quit", theme.muted()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
