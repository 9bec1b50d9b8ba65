//! Navigation Bar Component
//!
//! Fixed top-left list of section titles. Clicking one routes straight to
//! that section; unlike wheel input this is never debounced.

use dioxus::prelude::*;
use portfolio_ui::SectionNav;

use crate::app::route_for;
use crate::context::use_portfolio;

#[derive(Props, Clone, PartialEq)]
pub struct NavBarProps {
    /// Index of the section currently on top
    pub active: usize,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let portfolio = use_portfolio();
    let navigator = use_navigator();

    let sections = portfolio.sections.clone();

    let on_select = move |index: usize| {
        tracing::debug!(index, "Section selected from nav bar");
        navigator.push(route_for(&portfolio, index));
    };

    rsx! {
        SectionNav {
            sections: sections,
            active: props.active,
            on_select: on_select,
        }
    }
}
