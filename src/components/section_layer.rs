//! One full-viewport layer of the deck.

use dioxus::prelude::*;
use portfolio_core::SectionOffset;

/// CSS class for a layer. The first layer gets the load-time slide-up,
/// since it starts in view and never transitions on its own.
pub fn layer_class(index: usize) -> &'static str {
    if index == 0 {
        "page-section entering"
    } else {
        "page-section"
    }
}

/// Inline style for a layer: stacking order plus slide position.
pub fn layer_style(index: usize, offset: SectionOffset) -> String {
    format!(
        "z-index: {}; transform: translateY({});",
        index,
        offset.translate_y()
    )
}

#[derive(Props, Clone, PartialEq)]
pub struct SectionLayerProps {
    /// Position in the section list, also the stacking order
    pub index: usize,
    /// Whether the layer is slid into view
    pub offset: SectionOffset,
    pub children: Element,
}

/// Fixed, viewport-sized layer that slides vertically between pages
#[component]
pub fn SectionLayer(props: SectionLayerProps) -> Element {
    let style = layer_style(props.index, props.offset);
    let hidden = props.offset == SectionOffset::Hidden;

    rsx! {
        section {
            class: layer_class(props.index),
            style: "{style}",
            "aria-hidden": if hidden { "true" } else { "false" },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shown_layer_style() {
        assert_eq!(
            layer_style(0, SectionOffset::Shown),
            "z-index: 0; transform: translateY(0%);"
        );
    }

    #[test]
    fn only_first_layer_animates_on_load() {
        assert_eq!(layer_class(0), "page-section entering");
        assert_eq!(layer_class(1), "page-section");
        assert_eq!(layer_class(5), "page-section");
    }

    #[test]
    fn hidden_layer_style() {
        assert_eq!(
            layer_style(3, SectionOffset::Hidden),
            "z-index: 3; transform: translateY(100%);"
        );
    }
}
