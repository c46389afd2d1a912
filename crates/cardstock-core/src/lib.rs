#![forbid(unsafe_code)]

//! Card deck data model + receipt-width page geometry (headless).
//!
//! Design goals:
//! - strict validation at the input boundary (unknown suits/colors are errors,
//!   never silent fallbacks)
//! - deterministic, testable geometry (paper height and card origins are pure
//!   functions of the card count and fixed constants)

pub mod error;
pub mod geom;
pub mod geometry;
pub mod model;

pub use error::{Error, Result};
pub use geometry::DeckGeometry;
pub use model::{CardRecord, ColorKind, Deck, SuitKind};
