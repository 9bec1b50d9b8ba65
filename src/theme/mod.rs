//! Global styles.
//!
//! Colors are not set here: the root component injects the active
//! palette's `:root` variables next to this stylesheet.

mod styles;

pub use styles::GLOBAL_STYLES;
