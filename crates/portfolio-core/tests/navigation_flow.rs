//! Integration tests driving the navigator over the bundled content
//!
//! These mirror what the deck page does: resolve a section id, feed wheel
//! and key input, and read back which sections are slid into view.

use portfolio_core::{Direction, PageNavigator, Portfolio, SectionKind, SectionOffset, Typewriter};

fn builtin() -> Portfolio {
    Portfolio::builtin().expect("bundled content is valid")
}

#[test]
fn scroll_through_every_section() {
    let portfolio = builtin();
    let mut nav = PageNavigator::new(portfolio.len());

    let mut visited = vec![portfolio.sections[nav.index()].id.clone()];
    while let Some(index) = nav.wheel(100.0) {
        visited.push(portfolio.sections[index].id.clone());
        nav.release();
    }

    assert_eq!(
        visited,
        ["intro", "about", "skills", "experience", "projects", "contact"]
    );
    assert!(nav.is_last());
    assert!(!nav.is_busy());
}

#[test]
fn burst_of_wheel_events_turns_one_page() {
    let portfolio = builtin();
    let mut nav = PageNavigator::new(portfolio.len());

    let turns = (0..25).filter_map(|_| nav.wheel(60.0)).count();
    assert_eq!(turns, 1);
    assert_eq!(nav.index(), 1);
}

#[test]
fn nav_selection_by_section_id() {
    let portfolio = builtin();
    let mut nav = PageNavigator::new(portfolio.len());

    let projects = portfolio.section_index("projects").unwrap();
    nav.select(projects);

    let section = portfolio.section(nav.index()).unwrap();
    assert_eq!(section.kind, SectionKind::Projects);

    // Everything up to and including the projects page is stacked in view
    for i in 0..portfolio.len() {
        let expected = if i <= projects {
            SectionOffset::Shown
        } else {
            SectionOffset::Hidden
        };
        assert_eq!(nav.offset_for(i), expected, "section {}", i);
    }
}

#[test]
fn keyboard_and_wheel_share_the_lock() {
    let mut nav = PageNavigator::new(builtin().len());

    assert_eq!(nav.step(Direction::Next), Some(1));
    assert_eq!(nav.wheel(100.0), None);
    nav.release();
    assert_eq!(nav.wheel(-100.0), Some(0));
}

#[test]
fn tagline_types_out_completely() {
    let portfolio = builtin();
    let mut tw = Typewriter::new(portfolio.tagline.clone());

    let mut ticks = 0;
    while tw.advance().is_some() {
        ticks += 1;
    }

    assert_eq!(ticks, portfolio.tagline.chars().count());
    assert_eq!(tw.visible(), portfolio.tagline);
    assert!(tw.visible().contains('\n'));
}

#[test]
fn alternate_content_document() {
    let json = r#"{
        "owner": "Jane",
        "tagline": "hi",
        "sections": [
            {"id": "intro", "title": "Jane", "kind": "intro"},
            {"id": "work", "title": "Work", "kind": "projects"}
        ],
        "projects": [
            {"title": "Site", "description": "This site", "link": "https://example.com"}
        ]
    }"#;

    let portfolio = Portfolio::from_json(json).unwrap();
    assert_eq!(portfolio.section_index("work"), Some(1));
    assert_eq!(portfolio.projects[0].title, "Site");
}
