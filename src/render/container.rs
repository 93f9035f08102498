// render/container.rs

/// The `restaurants` output element. Its children are replaced wholesale
/// on every update.
#[derive(Debug, Clone, Default)]
pub struct ListingContainer {
    cards: Vec<String>,
}

impl ListingContainer {
    pub const ELEMENT_ID: &'static str = "restaurants";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn append(&mut self, card: String) {
        self.cards.push(card);
    }

    pub fn replace_children(&mut self, cards: impl IntoIterator<Item = String>) {
        self.clear();
        for card in cards {
            self.append(card);
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div id=\"{}\">\n{}\n</div>",
            Self::ELEMENT_ID,
            self.cards.join("\n")
        )
    }
}
