//! Flip Card Component
//!
//! A project tile that turns over on hover (or keyboard focus): the front
//! carries the title and description, the back an outbound link.

use dioxus::prelude::*;
use portfolio_core::Project;

/// Label on the back face
pub const LINK_LABEL: &str = "\u{1F517} 보러가기";

/// Properties for the FlipCard component
#[derive(Clone, PartialEq, Props)]
pub struct FlipCardProps {
    /// Title and description on the front, link on the back
    pub project: Project,
}

/// Displays a single project with a 3D flip to its link
///
/// # Design Notes
///
/// - Faces use the page background so they stand out on the card, and
///   hide their backface
/// - The flip is pure CSS (`.flip-card:hover .flip-inner`); focus-within
///   triggers it too so the link is reachable from the keyboard
/// - Links open with `noopener noreferrer`
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FlipCard {
///         project: project.clone(),
///     }
/// }
/// ```
#[component]
pub fn FlipCard(props: FlipCardProps) -> Element {
    let project = &props.project;

    rsx! {
        div { class: "flip-card",
            div { class: "flip-inner",
                div { class: "flip-face flip-front",
                    p { class: "flip-title", "{project.title}" }
                    p { class: "flip-description", "{project.description}" }
                }
                div { class: "flip-face flip-back",
                    a {
                        class: "flip-link",
                        href: "{project.link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{LINK_LABEL}"
                    }
                }
            }
        }
    }
}

/// Responsive grid container for flip cards
#[component]
pub fn FlipCardGrid(children: Element) -> Element {
    rsx! {
        div { class: "project-grid",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_compare_by_project() {
        let project = Project {
            title: "Church App".to_string(),
            description: "React Native".to_string(),
            link: "https://github.com/gyu-bin/ChurchProject".to_string(),
        };
        let a = FlipCardProps {
            project: project.clone(),
        };
        let mut b = FlipCardProps { project };
        assert!(a == b);

        b.project.link = "https://github.com/gyu-bin".to_string();
        assert!(a != b);
    }

    #[test]
    fn link_label_has_icon() {
        assert!(LINK_LABEL.starts_with('\u{1F517}'));
        assert!(LINK_LABEL.ends_with("보러가기"));
    }
}
