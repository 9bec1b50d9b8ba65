use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{PageNavigator, Portfolio};

use crate::config::startup;
use crate::context::{PendingSection, SharedPortfolio};
use crate::pages::{Deck, Home, NotFound, SectionPage};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The first section (intro)
/// - `/:id` - Any section by id, so every page is deep-linkable
/// - anything else redirects to `/`
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Deck)]
        #[route("/")]
        Home {},
        #[route("/:id")]
        SectionPage { id: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Index of the section a route shows. Unknown ids and paths show the
/// first section while they redirect.
pub fn index_for(portfolio: &Portfolio, route: &Route) -> usize {
    match route {
        Route::SectionPage { id } => portfolio.section_index(id).unwrap_or(0),
        Route::Home {} | Route::NotFound { .. } => 0,
    }
}

/// Route that shows the section at `index`.
pub fn route_for(portfolio: &Portfolio, index: usize) -> Route {
    match portfolio.section(index) {
        Some(section) if index > 0 => Route::SectionPage {
            id: section.id.clone(),
        },
        _ => Route::Home {},
    }
}

/// Root application component.
///
/// Renders the site when content loaded, or an error card when it didn't.
#[component]
pub fn App() -> Element {
    match &startup().content {
        Ok(portfolio) => rsx! {
            Site { portfolio: Rc::new(portfolio.clone()) }
        },
        Err(message) => rsx! {
            style { {GLOBAL_STYLES} }
            ContentError { message: message.clone() }
        },
    }
}

/// Provides theme, content and navigation context, then routes.
#[component]
fn Site(portfolio: SharedPortfolio) -> Element {
    let pages = portfolio.len();
    let start = startup();

    use_context_provider(|| portfolio.clone());
    let theme = use_context_provider(|| Signal::new(start.theme));
    use_context_provider(|| Signal::new(PageNavigator::new(pages)));
    use_context_provider(|| PendingSection(Signal::new(start.section.clone())));

    let palette_css = theme().palette().css_variables();

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {palette_css} }
        Router::<Route> {}
    }
}

#[component]
fn ContentError(message: String) -> Element {
    rsx! {
        main { class: "content-error",
            div { class: "content-card",
                h2 { class: "card-title", "Content could not be loaded" }
                p { class: "card-text", "{message}" }
            }
        }
    }
}
