//! The page behind the drawer: a single "Open Menu" button.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Focus};
use crate::ui::layout::TRIGGER_LABEL;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let dimmed = app.drawer_open;
    let focused = app.focus == Focus::Trigger;

    let (border, label) = if dimmed {
        (theme.dimmed(), theme.dimmed())
    } else {
        (theme.accent(), theme.trigger(focused))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if focused { BorderType::Thick } else { BorderType::Rounded })
        .border_style(border);

    let para = Paragraph::new(Line::from(Span::styled(format!(" {TRIGGER_LABEL} "), label)))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(para, area);
}
