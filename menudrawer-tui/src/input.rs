//! Input dispatch — global keys → closed page → open drawer.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{AppState, Focus};
use crate::ui::layout::{Hit, ScreenLayout};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Global keys.
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        _ => {}
    }

    // 2. Drawer closed: only the trigger is reachable.
    if !app.drawer_open {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('o') => app.open_drawer(),
            _ => {}
        }
        return;
    }

    // 3. Drawer open.
    match key.code {
        KeyCode::Esc => app.escape(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),
        KeyCode::Right | KeyCode::Char('l') => {
            if let Focus::Item(index) = app.focus {
                app.activate_item(index);
            }
        }
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => app.go_back(),
        KeyCode::Down | KeyCode::Char('j') => app.focus_next(),
        KeyCode::Up | KeyCode::Char('k') => app.focus_prev(),
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.focus_prev();
            } else {
                app.focus_next();
            }
        }
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Home | KeyCode::Char('g') => app.focus_first(),
        KeyCode::End | KeyCode::Char('G') => app.focus_last(),
        _ => {}
    }
}

/// Handle a mouse event against the layout of the last drawn frame.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {}
        MouseEventKind::ScrollDown if app.drawer_open => {
            app.focus_next();
            return;
        }
        MouseEventKind::ScrollUp if app.drawer_open => {
            app.focus_prev();
            return;
        }
        _ => return,
    }

    let layout = ScreenLayout::compute(app.viewport, app);
    match layout.hit(mouse.column, mouse.row) {
        Hit::Trigger => app.open_drawer(),
        Hit::Overlay => app.close_drawer(),
        Hit::BackControl => {
            app.focus = Focus::BackControl;
            app.go_back();
        }
        Hit::Item(index) => {
            app.focus = Focus::Item(index);
            app.activate_item(index);
        }
        Hit::Sheet | Hit::Nothing => {}
    }
}

/// Key bindings help text
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q / Ctrl+C", "Quit"),
        ("Enter / Space", "Open menu, enter submenu, or press Back"),
        ("↑/k, ↓/j, Tab", "Move focus"),
        ("Home/g, End/G", "First / last control"),
        ("→/l", "Enter focused submenu"),
        ("←/h, Backspace", "Go back one level"),
        ("Esc", "Go back, or close the menu at the top level"),
        ("Click outside", "Close the menu"),
    ]
}

/// Key bindings formatted for `--help`.
pub fn help_text() -> String {
    let mut text = String::from("Keys:\n");
    for (keys, action) in key_bindings_help() {
        text.push_str(&format!("  {keys:<16} {action}\n"));
    }
    text
}
