//! Document assembly: one deck, one vertical SVG page.
//!
//! The assembler derives the page height from the card count, walks the deck
//! in input order and hands each card to the composer at its computed origin.
//! Per-card degradation (a bad custom image) never aborts the document; the
//! only fatal inputs here are an empty deck.

use std::fmt::Write as _;

use cardstock_core::{Deck, DeckGeometry};

use crate::card::compose_card;
use crate::svgutil::fmt_number as fmt;
use crate::{Error, Result};

/// Options for one rendering run. The geometry is immutable for the run;
/// the text budget is the per-line character count the card zones wrap to.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub geometry: DeckGeometry,
    pub text_budget: usize,
    pub background: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            geometry: DeckGeometry::default(),
            text_budget: 15,
            background: true,
        }
    }
}

/// Renders the whole deck into a single-column SVG page.
///
/// Cards are stacked top to bottom in input order; instruction order in the
/// output matches input order, which is what gives the visual stacking
/// guarantee. Identical input yields byte-identical output.
pub fn render_deck_svg(deck: &Deck, options: &RenderOptions) -> Result<String> {
    if deck.is_empty() {
        return Err(Error::EmptyDeck);
    }

    let geom = &options.geometry;
    let n = deck.len();
    let paper_height = geom.paper_height(n);
    tracing::debug!(
        cards = n,
        paper_width_mm = geom.paper_width,
        paper_height_mm = paper_height,
        "assembling deck page"
    );

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}">"#,
        w = fmt(geom.paper_width),
        h = fmt(paper_height),
    );
    if options.background {
        let _ = writeln!(
            out,
            r#"  <rect width="{}" height="{}" fill="white"/>"#,
            fmt(geom.paper_width),
            fmt(paper_height),
        );
    }

    for (index, record) in deck.cards().iter().enumerate() {
        let origin = geom.card_origin(index, n);
        compose_card(&mut out, geom, origin, index, record, options);
        tracing::debug!(card = index, name = %record.name, "composed");
    }

    out.push_str("</svg>\n");
    Ok(out)
}
