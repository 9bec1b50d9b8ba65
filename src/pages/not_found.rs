use dioxus::prelude::*;

use crate::app::Route;

/// Catch-all for paths with more than one segment
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let path = segments.join("/");

    use_effect(move || {
        tracing::debug!(path = %path, "Unknown path, redirecting to intro");
        navigator.replace(Route::Home {});
    });

    rsx! {}
}
