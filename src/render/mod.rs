// Render module: turns ranked records into cards and paints pages.

pub mod card;
pub mod container;
pub mod display;
pub mod page;

pub use card::render_card;
pub use container::ListingContainer;
pub use display::{Display, HtmlFileDisplay, MemoryDisplay};
pub use page::{render_page, PageView};

use crate::model::Restaurant;

/// Replaces the container's children with one card per record, in order.
pub fn render_listings(container: &mut ListingContainer, ranked: &[&Restaurant], fallback_image: &str) {
    container.replace_children(ranked.iter().map(|r| render_card(r, fallback_image)));
}
