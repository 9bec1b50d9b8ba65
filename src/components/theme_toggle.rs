//! Light/dark switch pinned to the top-right corner.

use dioxus::prelude::*;
use portfolio_ui::Button;

use crate::context::use_theme;

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let label = theme().toggle_label();

    rsx! {
        Button {
            class: "theme-toggle".to_string(),
            onclick: move |_| {
                let next = theme().toggled();
                tracing::debug!(theme = %next, "Theme toggled");
                theme.set(next);
            },
            "{label}"
        }
    }
}
