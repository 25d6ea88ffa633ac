//! Screen geometry shared by drawing and mouse hit-testing.
//!
//! Everything is derived from the terminal area and the app state, so a click
//! can be resolved against exactly what was drawn last frame.

use ratatui::layout::{Position, Rect};

use crate::app::{AppState, Focus};

pub const TRIGGER_LABEL: &str = "Open Menu";

/// Lines taken by the back control plus the gap below it.
const BACK_BLOCK_HEIGHT: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub status: Rect,
    pub trigger: Rect,
    pub sheet: Option<SheetLayout>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    /// Outer sheet, border included.
    pub area: Rect,
    pub back: Option<Rect>,
    pub list: Rect,
    pub rows: Vec<RowSlot>,
    pub hidden_above: usize,
    pub hidden_below: usize,
}

/// Where a visible item is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSlot {
    pub index: usize,
    pub area: Rect,
}

/// What a screen position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Trigger,
    BackControl,
    Item(usize),
    /// Inside the sheet but not on a control.
    Sheet,
    /// Outside the sheet while it is open.
    Overlay,
    Nothing,
}

impl ScreenLayout {
    pub fn compute(area: Rect, app: &AppState) -> Self {
        let status_h = area.height.min(1);
        let main = Rect::new(area.x, area.y, area.width, area.height - status_h);
        let status = Rect::new(area.x, main.bottom(), area.width, status_h);

        let sheet = app.drawer_open.then(|| sheet_layout(main, app));

        Self {
            status,
            trigger: trigger_rect(main),
            sheet,
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> Hit {
        let pos = Position::new(column, row);
        match &self.sheet {
            Some(sheet) => {
                if !sheet.area.contains(pos) {
                    return Hit::Overlay;
                }
                if sheet.back.is_some_and(|back| back.contains(pos)) {
                    return Hit::BackControl;
                }
                sheet
                    .rows
                    .iter()
                    .find(|slot| slot.area.contains(pos))
                    .map(|slot| Hit::Item(slot.index))
                    .unwrap_or(Hit::Sheet)
            }
            None if self.trigger.contains(pos) => Hit::Trigger,
            None => Hit::Nothing,
        }
    }
}

fn trigger_rect(main: Rect) -> Rect {
    let width = (TRIGGER_LABEL.len() as u16 + 6).min(main.width);
    let height = 3.min(main.height);
    Rect::new(
        main.x + (main.width - width) / 2,
        main.y + (main.height - height) / 2,
        width,
        height,
    )
}

/// Lines needed to draw `item` in the list.
pub fn row_height(has_subtitle: bool, show_subtitles: bool) -> u16 {
    if has_subtitle && show_subtitles {
        2
    } else {
        1
    }
}

fn sheet_layout(main: Rect, app: &AppState) -> SheetLayout {
    let show_subtitles = app.drawer.show_subtitles;
    let heights: Vec<u16> = app
        .visible_items()
        .iter()
        .map(|item| row_height(item.subtitle.is_some(), show_subtitles))
        .collect();
    let back_h = if app.nav.is_submenu() { BACK_BLOCK_HEIGHT } else { 0 };
    let rows_h: u32 = heights.iter().map(|h| *h as u32).sum();
    let content_h = back_h.saturating_add(u16::try_from(rows_h).unwrap_or(u16::MAX));

    // Bottom-anchored, at most max_height_percent of the screen.
    let max_h = ((main.height as u32 * app.drawer.height_percent() as u32) / 100) as u16;
    let height = content_h
        .saturating_add(2)
        .min(max_h.max(3))
        .min(main.height);
    let margin_y = app.drawer.margin.min(main.height - height);
    let margin_x = app.drawer.margin.min(main.width / 4);
    let area = Rect::new(
        main.x + margin_x,
        main.bottom() - margin_y - height,
        main.width - 2 * margin_x,
        height,
    );

    let inner = Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    );

    let back = (app.nav.is_submenu() && inner.height > 0)
        .then(|| Rect::new(inner.x, inner.y, inner.width, 1));
    let list_offset = back_h.min(inner.height);
    let list = Rect::new(
        inner.x,
        inner.y + list_offset,
        inner.width,
        inner.height - list_offset,
    );

    let focused = match app.focus {
        Focus::Item(i) => i.min(heights.len().saturating_sub(1)),
        _ => 0,
    };
    let (start, end) = visible_window(&heights, focused, list.height);

    let mut rows = Vec::with_capacity(end - start);
    let mut y = list.y;
    for (index, h) in heights.iter().enumerate().take(end).skip(start) {
        let h = (*h).min(list.bottom() - y);
        rows.push(RowSlot {
            index,
            area: Rect::new(list.x, y, list.width, h),
        });
        y += h;
    }

    SheetLayout {
        area,
        back,
        list,
        rows,
        hidden_above: start,
        hidden_below: heights.len() - end,
    }
}

/// Range of rows `[start, end)` to draw so that `focused` is visible,
/// scrolling no further than needed.
pub fn visible_window(heights: &[u16], focused: usize, available: u16) -> (usize, usize) {
    if heights.is_empty() || available == 0 {
        return (0, 0);
    }
    let focused = focused.min(heights.len() - 1);

    let mut start = 0;
    let mut used: u32 = heights[..=focused].iter().map(|h| *h as u32).sum();
    while used > available as u32 && start < focused {
        used -= heights[start] as u32;
        start += 1;
    }

    let mut end = start;
    let mut filled: u32 = 0;
    while end < heights.len() && filled + heights[end] as u32 <= available as u32 {
        filled += heights[end] as u32;
        end += 1;
    }
    // The focused row is drawn even if it does not fit whole.
    (start, end.max(focused + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use menudrawer_core::{MenuNode, MenuTree};

    use crate::config::DrawerConfig;
    use crate::theme::Theme;

    #[test]
    fn test_window_no_scroll_when_everything_fits() {
        assert_eq!(visible_window(&[1, 2, 1], 2, 10), (0, 3));
    }

    #[test]
    fn test_window_scrolls_to_focused() {
        let heights = [2, 2, 2, 2, 2];
        assert_eq!(visible_window(&heights, 0, 5), (0, 2));
        assert_eq!(visible_window(&heights, 3, 5), (2, 4));
        assert_eq!(visible_window(&heights, 4, 5), (3, 5));
    }

    #[test]
    fn test_window_degenerate() {
        assert_eq!(visible_window(&[], 0, 10), (0, 0));
        assert_eq!(visible_window(&[1, 1], 1, 0), (0, 0));
        assert_eq!(visible_window(&[3, 3], 1, 2), (1, 2));
    }

    #[test]
    fn test_row_height() {
        assert_eq!(row_height(true, true), 2);
        assert_eq!(row_height(true, false), 1);
        assert_eq!(row_height(false, true), 1);
    }

    #[test]
    fn test_huge_level_fills_the_sheet() {
        let items = (1..=40_000)
            .map(|id| MenuNode::leaf(id, format!("Item {id}"), "").with_subtitle("detail"))
            .collect();
        let tree = MenuTree::new(items).unwrap();
        let mut app = AppState::new(tree, DrawerConfig::default(), Theme::default());
        app.open_drawer();

        let area = Rect::new(0, 0, 80, 30);
        let sheet = ScreenLayout::compute(area, &app).sheet.unwrap();
        assert!(sheet.area.height <= area.height);
        assert_eq!(sheet.hidden_above, 0);
        assert_eq!(sheet.hidden_above + sheet.rows.len() + sheet.hidden_below, 40_000);

        app.focus_last();
        let sheet = ScreenLayout::compute(area, &app).sheet.unwrap();
        assert_eq!(sheet.rows.last().map(|slot| slot.index), Some(39_999));
        assert_eq!(sheet.hidden_below, 0);
    }
}
