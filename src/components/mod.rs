//! UI components for the portfolio deck.
//!
//! These know about the app's context (content, theme, router); the
//! context-free widgets live in `portfolio-ui`.

mod intro;
mod nav_bar;
mod project_gallery;
mod section_layer;
mod theme_toggle;

pub use intro::Intro;
pub use nav_bar::NavBar;
pub use project_gallery::ProjectGallery;
pub use section_layer::SectionLayer;
pub use theme_toggle::ThemeToggle;
