//! Reusable UI components
//!
//! Every component renders plain class names; the stylesheet in the app
//! crate owns layout and motion.

mod button;
mod content_card;
mod flip_card;
mod section_nav;

pub use button::*;
pub use content_card::*;
pub use flip_card::*;
pub use section_nav::*;
