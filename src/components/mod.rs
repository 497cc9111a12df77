//! UI Components
//!
//! Reusable Leptos components.

mod card_board;
mod order_notice;
mod project_card;
mod site_nav;

pub use card_board::{BoardSet, CardBoard};
pub use order_notice::OrderNotice;
pub use project_card::ProjectCard;
pub use site_nav::SiteNav;
