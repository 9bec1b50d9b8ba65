//! Page components for the portfolio.
//!
//! [`Deck`] is the layout around every route and does all the drawing;
//! the route components only correct bad or pending locations.

mod deck;
mod home;
mod not_found;
mod section_page;

pub use deck::Deck;
pub use home::Home;
pub use not_found::NotFound;
pub use section_page::SectionPage;
