//! Content Card Components
//!
//! Titled cards used by every section except the intro.

use dioxus::prelude::*;

/// Properties for the ContentCard component
#[derive(Clone, PartialEq, Props)]
pub struct ContentCardProps {
    /// Heading in the accent color
    pub title: String,
    /// Body lines; each renders as its own paragraph
    pub lines: Vec<String>,
}

/// Card with a heading and one paragraph per line
///
/// Blank lines are rendered as empty paragraphs so the spacing between
/// blocks of text is preserved.
#[component]
pub fn ContentCard(props: ContentCardProps) -> Element {
    rsx! {
        CardFrame { title: props.title.clone(),
            for (i, line) in props.lines.iter().enumerate() {
                p { key: "{i}", class: "card-text", "{line}" }
            }
        }
    }
}

/// Card shell: heading followed by arbitrary content
#[component]
pub fn CardFrame(title: String, children: Element) -> Element {
    rsx! {
        div { class: "content-card",
            h2 { class: "card-title", "{title}" }
            {children}
        }
    }
}
