#![forbid(unsafe_code)]

//! SVG-to-PDF conversion for the deck page (pure Rust, no browser).

use std::path::{Path, PathBuf};

use cardstock_core::Deck;
use cardstock_render::RenderOptions;

use crate::render::{DeckRenderError, Result, render_svg, write_artifact};

/// Converts a rendered page to PDF bytes. The page keeps its mm dimensions.
pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>> {
    let mut opt = svg2pdf::usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    // Card faces are tuned for a Helvetica-class sans stack; system selection
    // may vary, but this is best-effort.
    opt.font_family = "Helvetica".to_string();

    let tree =
        svg2pdf::usvg::Tree::from_str(svg, &opt).map_err(|_| DeckRenderError::SvgParse)?;

    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|_| DeckRenderError::PdfConvert)
}

/// Renders the deck and converts it to PDF bytes.
pub fn render_pdf(deck: &Deck, options: &RenderOptions) -> Result<Vec<u8>> {
    let svg = render_svg(deck, options)?;
    svg_to_pdf(&svg)
}

/// Renders the deck and writes the PDF artifact to `path`.
pub fn render_pdf_to_file(deck: &Deck, options: &RenderOptions, path: &Path) -> Result<PathBuf> {
    let pdf = render_pdf(deck, options)?;
    write_artifact(path, &pdf)?;
    Ok(path.to_path_buf())
}
