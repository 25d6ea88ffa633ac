//! Property tests for the drawer shell.
//!
//! 1. Scrolling always keeps the focused row on screen
//! 2. Any key sequence leaves focus on a reachable control
//! 3. Paths built through the UI are always valid root-to-node chains

use crossterm::event::{KeyCode, KeyEvent};
use proptest::prelude::*;

use menudrawer_tui::config::DrawerConfig;
use menudrawer_tui::ui::layout::visible_window;
use menudrawer_tui::{input, sample_menu, AppState, Theme};

fn arb_key() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        Just(KeyCode::Enter),
        Just(KeyCode::Char(' ')),
        Just(KeyCode::Esc),
        Just(KeyCode::Backspace),
        Just(KeyCode::Up),
        Just(KeyCode::Down),
        Just(KeyCode::Right),
        Just(KeyCode::Tab),
        Just(KeyCode::BackTab),
        Just(KeyCode::Home),
        Just(KeyCode::End),
    ]
}

// ── 1. Scrolling ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn window_contains_focused_row(
        heights in prop::collection::vec(1u16..4, 1..20),
        focused_seed in any::<prop::sample::Index>(),
        available in 1u16..30,
    ) {
        let focused = focused_seed.index(heights.len());
        let (start, end) = visible_window(&heights, focused, available);

        prop_assert!(start <= focused && focused < end);
        prop_assert!(end <= heights.len());
        if heights[focused] <= available {
            let used: u32 = heights[start..end].iter().map(|h| *h as u32).sum();
            prop_assert!(used <= available as u32);
        }
    }
}

// ── 2 & 3. Key sequences ─────────────────────────────────────────────

proptest! {
    #[test]
    fn focus_and_path_stay_valid(keys in prop::collection::vec(arb_key(), 0..40)) {
        let mut app = AppState::new(sample_menu::tree(), DrawerConfig::default(), Theme::default());

        for code in keys {
            input::handle_key(&mut app, KeyEvent::from(code));

            prop_assert!(app.focus_ring().contains(&app.focus));
            if !app.drawer_open {
                prop_assert!(app.nav.path().is_empty());
            }
            if let Some(last) = app.nav.path().last() {
                let chain = app.nav.tree().chain_to(last).unwrap();
                prop_assert_eq!(chain.as_slice(), app.nav.path().ids());
            }
        }
    }
}
