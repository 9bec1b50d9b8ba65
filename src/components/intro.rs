//! Intro section - owner name and the typewriter tagline.

use dioxus::prelude::*;
use portfolio_core::{Typewriter, TYPE_INTERVAL};

use crate::context::use_theme;
use crate::timer::sleep;

/// Name drops in from above, then the tagline types itself out one
/// character every [`TYPE_INTERVAL`]. Typing stops when the component
/// unmounts.
#[component]
pub fn Intro(owner: String, tagline: String) -> Element {
    let theme = use_theme();
    let mut typed = use_signal(String::new);

    use_future(move || {
        let tagline = tagline.clone();
        async move {
            let mut typewriter = Typewriter::new(tagline);
            tracing::debug!(chars = typewriter.total_steps(), "Typing intro tagline");
            loop {
                sleep(TYPE_INTERVAL).await;
                match typewriter.advance() {
                    Some(prefix) => typed.set(prefix.to_string()),
                    None => break,
                }
            }
        }
    });

    let accent = theme().palette().accent;

    rsx! {
        div { class: "intro",
            h1 { class: "intro-name", "{owner}" }
            h2 {
                class: "intro-tagline",
                style: "color: {accent};",
                "{typed}"
                span { class: "intro-caret", "aria-hidden": "true" }
            }
        }
    }
}
