//! Color tokens for the drawer.
//!
//! # Color Palette
//! - **Surface**: sheet background
//! - **Accent**: focus ring, trigger button, chevrons
//! - **Overlay**: dimmed content behind an open sheet
//! - **Muted**: subtitles, hints, disabled text

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Sheet background
    pub surface: Color,
    /// Focus highlight, trigger button
    pub accent: Color,
    /// Background of the focused row
    pub focus_bg: Color,
    /// Content behind the open sheet
    pub overlay: Color,
    /// Subtitles and hints
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            surface: Color::Rgb(24, 24, 27),
            accent: Color::Rgb(59, 130, 246),
            focus_bg: Color::Rgb(39, 39, 42),
            overlay: Color::Rgb(82, 82, 91),
            muted: Color::Rgb(161, 161, 170),
            text_primary: Color::White,
            text_secondary: Color::Rgb(212, 212, 216),
        }
    }

    pub fn light() -> Self {
        Self {
            surface: Color::White,
            accent: Color::Rgb(37, 99, 235),
            focus_bg: Color::Rgb(243, 244, 246),
            overlay: Color::Rgb(156, 163, 175),
            muted: Color::Rgb(107, 114, 128),
            text_primary: Color::Rgb(17, 24, 39),
            text_secondary: Color::Rgb(55, 65, 81),
        }
    }

    /// "dark" or "light"; anything else falls back to dark.
    pub fn from_mode(mode: &str) -> Self {
        match mode.to_ascii_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn sheet(&self) -> Style {
        Style::default().bg(self.surface).fg(self.text_primary)
    }

    pub fn sheet_border(&self) -> Style {
        Style::default().fg(self.muted).bg(self.surface)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Row style, highlighted when focused.
    pub fn row(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .bg(self.focus_bg)
                .fg(self.text_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(self.surface).fg(self.text_primary)
        }
    }

    pub fn subtitle(&self, focused: bool) -> Style {
        let bg = if focused { self.focus_bg } else { self.surface };
        Style::default().bg(bg).fg(self.muted)
    }

    pub fn focus_marker(&self) -> Style {
        Style::default().fg(self.accent).bg(self.focus_bg)
    }

    pub fn chevron(&self, focused: bool) -> Style {
        let bg = if focused { self.focus_bg } else { self.surface };
        Style::default().fg(self.muted).bg(bg)
    }

    pub fn trigger(&self, focused: bool) -> Style {
        let style = Style::default().bg(self.accent).fg(Color::White);
        if focused {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Content dimmed behind the open sheet.
    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.overlay)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }
}
