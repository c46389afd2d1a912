//! Fixed page/card geometry for receipt-width media.
//!
//! The deck is printed as a single vertical column: one card per row, centered
//! on the paper, stacked top to bottom in input order. Paper height grows with
//! the card count and never goes below a printable minimum.

/// Immutable geometry constants for one rendering run. All fields are in mm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckGeometry {
    pub card_width: f64,
    pub card_height: f64,
    pub paper_width: f64,
    pub margin: f64,
    pub min_paper_height: f64,
}

/// Poker-card aspect ratio (2.5in x 3.5in), kept at any card width.
const CARD_ASPECT: f64 = 3.5 / 2.5;

impl Default for DeckGeometry {
    /// 26 mm cards on 30 mm thermal receipt paper.
    fn default() -> Self {
        Self::with_card_width(26.0)
    }
}

impl DeckGeometry {
    /// Geometry for a given card width in mm. Card height follows the 2.5:3.5
    /// aspect ratio; the paper leaves 2 mm on either side of the card.
    pub fn with_card_width(card_width: f64) -> Self {
        let margin = 2.0;
        Self {
            card_width,
            card_height: card_width * CARD_ASPECT,
            paper_width: card_width + 2.0 * margin,
            margin,
            min_paper_height: 100.0,
        }
    }

    /// Paper height for `card_count` stacked cards, clamped to the minimum.
    pub fn paper_height(&self, card_count: usize) -> f64 {
        let step = self.card_height + self.margin;
        let needed = card_count as f64 * step + self.margin;
        needed.max(self.min_paper_height)
    }

    /// Top-left origin of card `index` (0-based, card 0 nearest the top of the
    /// page) in a y-down coordinate system with the origin at the top-left of
    /// the paper.
    pub fn card_origin(&self, index: usize, card_count: usize) -> (f64, f64) {
        let paper_height = self.paper_height(card_count);
        let step = self.card_height + self.margin;
        // Bottom edge of the card measured from the bottom of the paper.
        let from_bottom = paper_height - self.margin - (index as f64 + 1.0) * step;
        let x = (self.paper_width - self.card_width) / 2.0;
        let y = paper_height - from_bottom - self.card_height;
        (x, y)
    }
}
