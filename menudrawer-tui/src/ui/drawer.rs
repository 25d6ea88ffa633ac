//! Bottom sheet — breadcrumb title, back control and the item list.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Focus};
use crate::ui::layout::SheetLayout;
use crate::ui::menu_list;

pub fn render(f: &mut Frame, sheet: &SheetLayout, app: &AppState) {
    let theme = &app.theme;
    f.render_widget(Clear, sheet.area);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.sheet_border())
        .style(theme.sheet())
        .title(Line::from(Span::styled(format!(" {} ", app.title()), theme.title())));

    if sheet.hidden_above > 0 {
        block = block.title_top(
            Line::from(Span::styled(format!(" ↑ {} more ", sheet.hidden_above), theme.muted()))
                .right_aligned(),
        );
    }
    if sheet.hidden_below > 0 {
        block = block.title_bottom(
            Line::from(Span::styled(format!(" ↓ {} more ", sheet.hidden_below), theme.muted()))
                .right_aligned(),
        );
    }
    f.render_widget(block, sheet.area);

    if let Some(back) = sheet.back {
        render_back(f, back, app.focus == Focus::BackControl, app);
    }

    let items = app.visible_items();
    if items.is_empty() {
        if sheet.list.height > 0 {
            f.render_widget(
                Paragraph::new(Span::styled("  Nothing here.", theme.muted())),
                Rect::new(sheet.list.x, sheet.list.y, sheet.list.width, 1),
            );
        }
        return;
    }

    let rows = menu_list::rows(items, app.nav.level());
    let focused = match app.focus {
        Focus::Item(i) => Some(i),
        _ => None,
    };
    menu_list::render(
        f,
        &rows,
        &sheet.rows,
        focused,
        app.drawer.show_subtitles,
        theme,
    );
}

fn render_back(f: &mut Frame, area: Rect, focused: bool, app: &AppState) {
    let theme = &app.theme;
    let marker = if focused { "▌" } else { " " };
    let marker_style = if focused { theme.focus_marker() } else { theme.row(false) };
    let line = Line::from(vec![
        Span::styled(marker, marker_style),
        Span::styled("‹ ", theme.accent().bg(theme.row(focused).bg.unwrap_or(theme.surface))),
        Span::styled("Back", theme.row(focused)),
    ]);
    f.render_widget(Paragraph::new(line).style(theme.row(focused)), area);
}
