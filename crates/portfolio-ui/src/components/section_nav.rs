//! Section Navigation Component
//!
//! Horizontal row of section titles pinned to the top-left corner.
//! Clicking an entry, or pressing Enter or Space on it, jumps straight to
//! that section.

use dioxus::prelude::*;
use portfolio_core::Section;

/// Properties for the SectionNav component
#[derive(Clone, PartialEq, Props)]
pub struct SectionNavProps {
    /// Sections, in page order
    pub sections: Vec<Section>,
    /// Index of the section currently shown
    pub active: usize,
    /// Handler called with the index of the chosen entry
    pub on_select: EventHandler<usize>,
}

/// CSS class for a nav entry
pub fn nav_item_class(is_active: bool) -> &'static str {
    if is_active {
        "nav-item active"
    } else {
        "nav-item"
    }
}

/// Keys that activate a focused entry, as for a native button
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Displays one entry per section, highlighting the active one
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SectionNav {
///         sections: portfolio.sections.clone(),
///         active: index,
///         on_select: move |index| go_to(index),
///     }
/// }
/// ```
#[component]
pub fn SectionNav(props: SectionNavProps) -> Element {
    rsx! {
        nav {
            class: "section-nav",
            "aria-label": "Sections",
            for (index, section) in props.sections.iter().enumerate() {
                {
                    let is_active = index == props.active;
                    let on_select = props.on_select;
                    rsx! {
                        a {
                            key: "{section.id}",
                            class: nav_item_class(is_active),
                            role: "button",
                            tabindex: "0",
                            "aria-current": if is_active { "page" } else { "false" },
                            onclick: move |_| on_select.call(index),
                            onkeydown: move |evt: KeyboardEvent| {
                                if is_activation_key(&evt.key().to_string()) {
                                    evt.prevent_default();
                                    evt.stop_propagation();
                                    on_select.call(index);
                                }
                            },
                            "{section.title}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_entry_class() {
        assert_eq!(nav_item_class(true), "nav-item active");
        assert_eq!(nav_item_class(false), "nav-item");
    }

    #[test]
    fn enter_and_space_activate_entries() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("ArrowDown"));
        assert!(!is_activation_key("Tab"));
    }
}
