//! Portfolio UI Components
//!
//! Dioxus widgets shared by the portfolio pages. Colors come exclusively
//! from the CSS custom properties set by the active theme:
//!
//! - `--background`: page and section backdrop
//! - `--card`: card surfaces, both faces of a flip card
//! - `--text`: body copy
//! - `--accent`: titles, links, the active nav entry and the theme toggle

pub mod components;

pub use components::*;
