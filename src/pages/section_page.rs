//! Section route - any section addressed by id.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_portfolio;

/// Sends the visitor back to the intro when no section has this id.
/// Valid ids need nothing here: the deck layout reads the route itself.
#[component]
pub fn SectionPage(id: String) -> Element {
    let portfolio = use_portfolio();
    let navigator = use_navigator();
    let known = portfolio.section_index(&id).is_some();

    use_effect(use_reactive((&known, &id), move |(known, id)| {
        if !known {
            tracing::warn!("No section with id '{}', redirecting to intro", id);
            navigator.replace(Route::Home {});
        }
    }));

    rsx! {}
}
