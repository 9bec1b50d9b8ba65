//! Portfolio Core Library
//!
//! Framework-free logic behind the single-page portfolio site.
//!
//! ## Overview
//!
//! The site is a stack of full-viewport sections revealed one at a time.
//! This crate holds everything that does not need a renderer:
//!
//! - **content**: the static section and project records, with validation
//! - **navigation**: the debounced page-index state machine driven by
//!   wheel and keyboard input
//! - **typewriter**: the intro tagline reveal
//! - **theme**: light and dark palettes exposed as CSS variables
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{PageNavigator, Portfolio};
//!
//! let portfolio = Portfolio::builtin().unwrap();
//! let mut nav = PageNavigator::new(portfolio.len());
//!
//! // A firm scroll down turns the page and locks until released
//! assert_eq!(nav.wheel(120.0), Some(1));
//! assert_eq!(nav.wheel(120.0), None);
//! nav.release();
//! ```

pub mod content;
pub mod error;
pub mod navigation;
pub mod theme;
pub mod typewriter;

// Re-exports
pub use content::{Portfolio, Project, Section, SectionKind};
pub use error::{PortfolioError, PortfolioResult};
pub use navigation::{Direction, PageNavigator, SectionOffset, TRANSITION, WHEEL_THRESHOLD};
pub use theme::{Palette, ThemeMode};
pub use typewriter::{Typewriter, TYPE_INTERVAL};
