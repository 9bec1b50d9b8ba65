//! The deck - every section stacked as a full-viewport layer.
//!
//! Sections at or before the current page are slid up into view, later
//! ones wait below the viewport, and each layer stacks above the previous.
//! Wheel and arrow-key input turn one page at a time; input arriving while
//! a slide is still animating is dropped. The fixed nav bar and theme
//! toggle sit inside the input handlers too, so wheel and keys work over
//! them and while they hold focus.
//!
//! The route only names the section on top; the deck resolves it to an
//! index with [`index_for`].

use dioxus::html::geometry::WheelDelta;
use dioxus::prelude::*;
use portfolio_core::{Direction, PageNavigator, Portfolio, SectionKind, TRANSITION};
use portfolio_ui::ContentCard;

use crate::app::{index_for, route_for, Route};
use crate::components::{Intro, NavBar, ProjectGallery, SectionLayer, ThemeToggle};
use crate::context::{use_page_navigator, use_portfolio};
use crate::timer::sleep;

/// Pixels per line for wheel events reported in line units
const LINE_HEIGHT_PX: f64 = 16.0;
/// Pixels per page for wheel events reported in page units
const PAGE_HEIGHT_PX: f64 = 800.0;

/// Vertical wheel movement in pixels, whatever unit the platform used.
fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(v) => v.y,
        WheelDelta::Lines(v) => v.y * LINE_HEIGHT_PX,
        WheelDelta::Pages(v) => v.y * PAGE_HEIGHT_PX,
    }
}

/// Route to `target` and release the transition lock once the slide ends.
fn turn_page(
    portfolio: &Portfolio,
    navigator: Navigator,
    mut nav: Signal<PageNavigator>,
    from: usize,
    target: usize,
) {
    tracing::debug!(
        from,
        to = target,
        "Turning to section '{}'",
        portfolio.sections[target].id
    );
    navigator.push(route_for(portfolio, target));
    spawn(async move {
        sleep(TRANSITION).await;
        nav.write().release();
    });
}

/// Full-viewport presentation, laid out around every route.
///
/// Staying mounted across route changes is what lets the layers animate
/// between pages instead of being rebuilt in place.
#[component]
pub fn Deck() -> Element {
    let portfolio = use_portfolio();
    let mut nav = use_page_navigator();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let index = index_for(&portfolio, &route);

    // Navigator snapshot at this route's index, for layer offsets
    let view = {
        let mut view: PageNavigator = *nav.peek();
        view.select(index);
        view
    };

    let portfolio_for_wheel = portfolio.clone();
    let onwheel = move |evt: WheelEvent| {
        let delta_y = wheel_delta_y(evt.data().delta());
        let target = {
            let mut n = nav.write();
            n.select(index);
            n.wheel(delta_y)
        };
        if let Some(target) = target {
            turn_page(&portfolio_for_wheel, navigator, nav, index, target);
        }
    };

    let portfolio_for_keys = portfolio.clone();
    let onkeydown = move |evt: KeyboardEvent| {
        let Some(direction) = Direction::from_key(&evt.key().to_string()) else {
            return;
        };
        evt.prevent_default();
        let target = {
            let mut n = nav.write();
            n.select(index);
            n.step(direction)
        };
        if let Some(target) = target {
            turn_page(&portfolio_for_keys, navigator, nav, index, target);
        }
    };

    let title = match portfolio.section(index) {
        Some(section) if index > 0 => format!("{} · {}", section.title, portfolio.owner),
        _ => portfolio.owner.clone(),
    };

    rsx! {
        document::Title { "{title}" }
        Outlet::<Route> {}
        div {
            class: "deck",
            tabindex: "0",
            autofocus: true,
            onwheel: onwheel,
            onkeydown: onkeydown,
            ThemeToggle {}
            NavBar { active: index }
            for (i, section) in portfolio.sections.iter().enumerate() {
                SectionLayer {
                    key: "{section.id}",
                    index: i,
                    offset: view.offset_for(i),
                    {match section.kind {
                        SectionKind::Intro => rsx! {
                            Intro {
                                owner: portfolio.owner.clone(),
                                tagline: portfolio.tagline.clone(),
                            }
                        },
                        SectionKind::Projects => rsx! {
                            ProjectGallery { title: section.title.clone() }
                        },
                        SectionKind::Text => rsx! {
                            ContentCard {
                                title: section.title.clone(),
                                lines: section.lines().map(str::to_string).collect::<Vec<_>>(),
                            }
                        },
                    }}
                }
            }
        }
    }
}
