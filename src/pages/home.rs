//! Home route - the intro section.
//!
//! Also where a launch-time `--section` request is honoured, since every
//! session starts here.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_pending_section;

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();
    let mut pending = use_pending_section().0;

    use_effect(move || {
        let requested = pending.write().take();
        if let Some(id) = requested {
            tracing::info!("Opening requested section '{}'", id);
            navigator.replace(Route::SectionPage { id });
        }
    });

    rsx! {}
}
