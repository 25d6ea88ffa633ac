//! Item list — one actionable row per visible menu item.
//!
//! Rows are built as plain data first (`ItemRow`), carrying the accessible
//! role and label the row exposes, then drawn into the slots the layout
//! assigned. Activation is wired in `input`: expandable rows call
//! `activate(id)`, leaf rows are inert.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use menudrawer_core::MenuNode;

use crate::theme::Theme;
use crate::ui::layout::RowSlot;

/// Role of the list container.
pub const LIST_ROLE: &str = "menu";
pub const LIST_ORIENTATION: &str = "vertical";
pub const ITEM_ROLE: &str = "menuitem";

const CHEVRON: &str = "›";

/// Render model for a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: u32,
    /// `menu-item-{level}-{id}`
    pub element_id: String,
    pub role: &'static str,
    pub has_popup: bool,
    pub expanded: bool,
    pub icon: String,
    pub name: String,
    pub subtitle: Option<String>,
    pub label: String,
}

impl ItemRow {
    pub fn new(item: &MenuNode, level: usize) -> Self {
        Self {
            id: item.id,
            element_id: format!("menu-item-{level}-{}", item.id),
            role: ITEM_ROLE,
            has_popup: item.is_expandable(),
            expanded: false,
            icon: item.icon.clone(),
            name: item.name.clone(),
            subtitle: item.subtitle.clone(),
            label: accessible_label(item),
        }
    }
}

pub fn rows(items: &[MenuNode], level: usize) -> Vec<ItemRow> {
    items.iter().map(|item| ItemRow::new(item, level)).collect()
}

/// Description of the list container, e.g. `menu, vertical, 3 items`.
pub fn list_description(count: usize) -> String {
    let noun = if count == 1 { "item" } else { "items" };
    format!("{LIST_ROLE}, {LIST_ORIENTATION}, {count} {noun}")
}

/// Screen-reader label. The icon is decorative and left out.
pub fn accessible_label(item: &MenuNode) -> String {
    let subtitle = item.subtitle.as_deref().unwrap_or("");
    if item.is_expandable() {
        format!("{}. {}. Has submenu, press Enter to open.", item.name, subtitle)
    } else {
        format!("{}. {}", item.name, subtitle)
    }
}

/// Draw `rows` into their layout slots. `focused` is an index into `rows`.
pub fn render(
    f: &mut Frame,
    rows: &[ItemRow],
    slots: &[RowSlot],
    focused: Option<usize>,
    show_subtitles: bool,
    theme: &Theme,
) {
    for slot in slots {
        let Some(row) = rows.get(slot.index) else {
            continue;
        };
        render_row(f, slot.area, row, focused == Some(slot.index), show_subtitles, theme);
    }
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    row: &ItemRow,
    focused: bool,
    show_subtitles: bool,
    theme: &Theme,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let marker = if focused { "▌" } else { " " };
    let icon = if row.icon.is_empty() { " " } else { row.icon.as_str() };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker, marker_style(focused, theme)),
        Span::styled(format!("{icon} "), theme.row(focused)),
        Span::styled(row.name.as_str(), theme.row(focused)),
    ])
    .style(theme.row(focused))];

    if show_subtitles {
        if let Some(subtitle) = &row.subtitle {
            lines.push(
                Line::from(vec![
                    Span::styled(marker, marker_style(focused, theme)),
                    Span::styled(format!("  {subtitle}"), theme.subtitle(focused)),
                ])
                .style(theme.subtitle(focused)),
            );
        }
    }

    f.render_widget(Paragraph::new(lines).style(theme.row(focused)), area);

    if row.has_popup && area.width > 2 {
        let chevron = Rect::new(area.right() - 2, area.y, 1, 1);
        f.render_widget(
            Paragraph::new(Span::styled(CHEVRON, theme.chevron(focused))),
            chevron,
        );
    }
}

fn marker_style(focused: bool, theme: &Theme) -> Style {
    if focused {
        theme.focus_marker()
    } else {
        theme.row(false)
    }
}
