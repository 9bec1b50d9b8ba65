//! Button Component
//!
//! Filled with the theme accent and white text. Used for the theme
//! toggle; placement comes from the extra class.

use dioxus::prelude::*;

/// Base CSS class of every button
pub const BUTTON_CLASS: &str = "btn-accent";

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Join the base class with optional extra classes.
pub fn button_class(extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", BUTTON_CLASS, extra),
        _ => BUTTON_CLASS.to_string(),
    }
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         class: "theme-toggle".to_string(),
///         onclick: move |_| theme.set(theme().toggled()),
///         "{theme().toggle_label()}"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_class_alone() {
        assert_eq!(button_class(None), "btn-accent");
        assert_eq!(button_class(Some("")), "btn-accent");
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(button_class(Some("theme-toggle")), "btn-accent theme-toggle");
    }
}
