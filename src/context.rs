//! Shared state provided by the root component.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let portfolio = use_portfolio();
//! let mut theme = use_theme();
//! theme.set(theme().toggled());
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{PageNavigator, Portfolio, ThemeMode};

/// Content shared with every component. Read-only for the whole session.
pub type SharedPortfolio = Rc<Portfolio>;

/// Hook to access the portfolio content.
pub fn use_portfolio() -> SharedPortfolio {
    use_context::<SharedPortfolio>()
}

/// Hook to access the active theme.
pub fn use_theme() -> Signal<ThemeMode> {
    use_context::<Signal<ThemeMode>>()
}

/// Hook to access the page navigator.
///
/// The route decides which page is shown; the navigator carries the
/// transition lock that debounces wheel and keyboard input across renders.
pub fn use_page_navigator() -> Signal<PageNavigator> {
    use_context::<Signal<PageNavigator>>()
}

/// Section requested at launch, not yet navigated to.
///
/// Consumed (set back to `None`) by the first page that handles it.
#[derive(Clone, Copy)]
pub struct PendingSection(pub Signal<Option<String>>);

pub fn use_pending_section() -> PendingSection {
    use_context::<PendingSection>()
}
