//! Projects section - flip-card grid.

use dioxus::prelude::*;
use portfolio_ui::{CardFrame, FlipCard, FlipCardGrid};

use crate::context::use_portfolio;

#[component]
pub fn ProjectGallery(title: String) -> Element {
    let portfolio = use_portfolio();

    rsx! {
        CardFrame { title: title,
            FlipCardGrid {
                for project in portfolio.projects.iter() {
                    FlipCard {
                        key: "{project.link}",
                        project: project.clone(),
                    }
                }
            }
        }
    }
}
