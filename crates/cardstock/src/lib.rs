#![forbid(unsafe_code)]

//! `cardstock` renders user-authored playing card decks onto a single
//! receipt-width page, headlessly.
//!
//! The facade re-exports the deck model from `cardstock-core` and the SVG
//! pipeline from `cardstock-render`, and adds artifact output: atomic file
//! writes and (behind the `pdf` feature) pure-Rust SVG-to-PDF conversion.
//!
//! # Features
//!
//! - `pdf`: enable PDF output via `svg2pdf`

pub use cardstock_core::*;

pub mod render {
    pub use cardstock_render::{ImageError, NormalizedImage, RenderOptions, render_deck_svg};

    use std::io::Write as _;
    use std::path::{Path, PathBuf};

    use cardstock_core::Deck;

    #[derive(Debug, thiserror::Error)]
    pub enum DeckRenderError {
        #[error(transparent)]
        Parse(#[from] cardstock_core::Error),

        #[error(transparent)]
        Render(#[from] cardstock_render::Error),

        /// The output artifact could not be created, written or finalized.
        /// Fatal; the atomic write guarantees no half-written file remains.
        #[error("failed to write artifact {path}: {source}")]
        Surface {
            path: PathBuf,
            source: std::io::Error,
        },

        #[cfg(feature = "pdf")]
        #[error("failed to parse generated SVG")]
        SvgParse,

        #[cfg(feature = "pdf")]
        #[error("failed to convert SVG to PDF")]
        PdfConvert,
    }

    pub type Result<T> = std::result::Result<T, DeckRenderError>;

    #[cfg(feature = "pdf")]
    pub mod pdf;

    /// Renders the deck to an SVG page description.
    pub fn render_svg(deck: &Deck, options: &RenderOptions) -> Result<String> {
        Ok(render_deck_svg(deck, options)?)
    }

    /// Writes `bytes` to `path` atomically: the data goes to a sibling
    /// temporary file first and is renamed into place only once fully
    /// written, so a failed render never leaves a partial artifact.
    pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
        let surface = |source: std::io::Error| DeckRenderError::Surface {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(surface)?;
        tmp.write_all(bytes).map_err(surface)?;
        tmp.flush().map_err(surface)?;
        tmp.persist(path).map_err(|err| surface(err.error))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "artifact written");
        Ok(())
    }

    /// Renders the deck and writes the SVG artifact to `path`.
    pub fn render_svg_to_file(
        deck: &Deck,
        options: &RenderOptions,
        path: &Path,
    ) -> Result<PathBuf> {
        let svg = render_svg(deck, options)?;
        write_artifact(path, svg.as_bytes())?;
        Ok(path.to_path_buf())
    }

    /// Convenience wrapper bundling render options, for callers that render
    /// several decks with the same fixed geometry.
    #[derive(Debug, Clone, Default)]
    pub struct DeckRenderer {
        pub options: RenderOptions,
    }

    impl DeckRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_options(options: RenderOptions) -> Self {
            Self { options }
        }

        pub fn render_svg(&self, deck: &Deck) -> Result<String> {
            render_svg(deck, &self.options)
        }

        pub fn render_svg_to_file(&self, deck: &Deck, path: &Path) -> Result<PathBuf> {
            render_svg_to_file(deck, &self.options, path)
        }

        #[cfg(feature = "pdf")]
        pub fn render_pdf(&self, deck: &Deck) -> Result<Vec<u8>> {
            pdf::render_pdf(deck, &self.options)
        }

        #[cfg(feature = "pdf")]
        pub fn render_pdf_to_file(&self, deck: &Deck, path: &Path) -> Result<PathBuf> {
            pdf::render_pdf_to_file(deck, &self.options, path)
        }
    }
}
