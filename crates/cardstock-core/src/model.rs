//! Card records and deck-level validation.
//!
//! Decks arrive from the data-entry layer as JSON, one object per card. The
//! original authoring app wrote `Card_Name`/`Suit`/... keys; those are accepted
//! alongside snake_case. Suit and color names are validated here, at the input
//! boundary: an unknown name is an error, never a silent fallback.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuitKind {
    Diamond,
    Heart,
    Spade,
    Club,
    Star,
    Crown,
    Shield,
    Lightning,
}

impl SuitKind {
    pub const ALL: [SuitKind; 8] = [
        SuitKind::Diamond,
        SuitKind::Heart,
        SuitKind::Spade,
        SuitKind::Club,
        SuitKind::Star,
        SuitKind::Crown,
        SuitKind::Shield,
        SuitKind::Lightning,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "diamond" => Some(Self::Diamond),
            "heart" => Some(Self::Heart),
            "spade" => Some(Self::Spade),
            "club" => Some(Self::Club),
            "star" => Some(Self::Star),
            "crown" => Some(Self::Crown),
            "shield" => Some(Self::Shield),
            "lightning" => Some(Self::Lightning),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Diamond => "diamond",
            Self::Heart => "heart",
            Self::Spade => "spade",
            Self::Club => "club",
            Self::Star => "star",
            Self::Crown => "crown",
            Self::Shield => "shield",
            Self::Lightning => "lightning",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKind {
    Red,
    #[default]
    Black,
    Blue,
    Green,
    Purple,
    Orange,
}

impl ColorKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "red" => Some(Self::Red),
            "black" => Some(Self::Black),
            "blue" => Some(Self::Blue),
            "green" => Some(Self::Green),
            "purple" => Some(Self::Purple),
            "orange" => Some(Self::Orange),
            _ => None,
        }
    }

    /// SVG color keyword for this icon color.
    pub fn svg_color(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Black => "black",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
        }
    }
}

/// One user-authored card, immutable for the duration of a rendering pass.
///
/// Empty text fields are tolerated by the renderer (they become zero-length
/// text blocks); the authoring layer is expected to supply defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardRecord {
    pub name: String,
    pub suit: SuitKind,
    pub value: String,
    pub task: String,
    pub rules: String,
    pub icon_color: ColorKind,
    pub custom_image: Option<PathBuf>,
}

/// Wire form of a card as written by the authoring app.
#[derive(Debug, Deserialize)]
struct RawCard {
    #[serde(default, alias = "Card_Name", alias = "card_name")]
    name: String,
    #[serde(default, alias = "Suit")]
    suit: String,
    #[serde(default, alias = "Value")]
    value: String,
    #[serde(default, alias = "Task")]
    task: String,
    #[serde(default, alias = "Rules")]
    rules: String,
    #[serde(default, alias = "Icon_Color", alias = "icon_color")]
    color: Option<String>,
    #[serde(default, alias = "Custom_Image", alias = "custom_image")]
    custom_image: Option<PathBuf>,
}

/// Decks are saved either as a bare array of cards or wrapped in an object
/// with a `cards` key (the authoring app adds bookkeeping fields next to it).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DeckFile {
    Wrapped { cards: Vec<RawCard> },
    Bare(Vec<RawCard>),
}

/// An ordered, validated sequence of cards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deck {
    cards: Vec<CardRecord>,
}

impl Deck {
    pub fn from_records(cards: Vec<CardRecord>) -> Self {
        Self { cards }
    }

    /// Parses and validates a deck from JSON. Unknown suit or color names are
    /// rejected with the offending card index.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: DeckFile = serde_json::from_str(json)?;
        let raw = match file {
            DeckFile::Wrapped { cards } => cards,
            DeckFile::Bare(cards) => cards,
        };

        let mut cards = Vec::with_capacity(raw.len());
        for (index, card) in raw.into_iter().enumerate() {
            cards.push(validate_card(index, card)?);
        }
        tracing::debug!(cards = cards.len(), "parsed deck");
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

fn validate_card(index: usize, raw: RawCard) -> Result<CardRecord> {
    let suit = SuitKind::from_name(&raw.suit).ok_or_else(|| Error::Validation {
        index,
        message: format!("unknown suit {:?}", raw.suit),
    })?;

    let icon_color = match raw.color.as_deref() {
        None | Some("") => ColorKind::default(),
        Some(name) => ColorKind::from_name(name).ok_or_else(|| Error::Validation {
            index,
            message: format!("unknown icon color {name:?}"),
        })?,
    };

    Ok(CardRecord {
        name: raw.name,
        suit,
        value: raw.value,
        task: raw.task,
        rules: raw.rules,
        icon_color,
        custom_image: raw.custom_image,
    })
}
