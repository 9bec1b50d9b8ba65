//! Light and dark palettes
//!
//! The UI reads colors only through CSS custom properties, so switching
//! themes means swapping the `:root` variable block produced by
//! [`Palette::css_variables`].

use std::fmt;
use std::str::FromStr;

use crate::error::PortfolioError;

/// The four colors every surface is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page and section background
    pub background: &'static str,
    /// Card surfaces
    pub card: &'static str,
    /// Body text
    pub text: &'static str,
    /// Titles, links and the toggle button
    pub accent: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#ffffff",
    card: "#f9fafb",
    text: "#111827",
    accent: "#2563eb",
};

pub const DARK: Palette = Palette {
    background: "#1f2d3d",
    card: "#2c3e50",
    text: "#e2e8f0",
    accent: "#4f9eea",
};

impl Palette {
    /// `:root` block exposing the palette as `--background`, `--card`,
    /// `--text` and `--accent`.
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{\n  --background: {};\n  --card: {};\n  --text: {};\n  --accent: {};\n}}\n",
            self.background, self.card, self.text, self.accent
        )
    }
}

/// Active color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn palette(&self) -> Palette {
        match self {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        }
    }

    /// The other mode
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Toggle button text: names the mode a click switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Dark Mode",
            ThemeMode::Dark => "Light Mode",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(PortfolioError::UnknownTheme(s.to_string())),
        }
    }
}
