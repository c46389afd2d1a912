#![forbid(unsafe_code)]

//! Card composition + SVG page assembly for receipt-width card decks.
//!
//! The pipeline is strictly layered: the document assembler ([`render_deck_svg`])
//! positions cards, the card composer draws one card, and the leaves (icon
//! geometry, text wrapping, image normalization) are pure helpers with no
//! layout state of their own. The output is a single-column SVG page sized in
//! millimeters, suitable for PDF conversion or rasterization downstream.

pub mod card;
pub mod deck;
pub mod icon;
pub mod image_prep;
pub mod svgutil;
pub mod text;

pub use deck::{RenderOptions, render_deck_svg};
pub use image_prep::{ImageError, NormalizedImage};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("deck contains no cards")]
    EmptyDeck,
}

pub type Result<T> = std::result::Result<T, Error>;
