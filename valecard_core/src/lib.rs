//! Ability-text layout engine for trading-card rendering.
//!
//! Turns free ability text with inline bracket codes (`{fire}`, `{2wp}`,
//! `{1камень}`, ...) into a wrapped sequence of text and icon tokens and
//! draws it into ability windows. The crate contains no image decoding,
//! font loading, or rasterization: those are supplied by the caller through
//! the traits in [`surface`].

#![deny(unsafe_code)]

pub mod card;
pub mod codeword;
pub mod icon;
pub mod style;
pub mod surface;
pub mod token;
pub mod tokenizer;
pub mod window;
pub mod wrap;

#[cfg(test)]
pub(crate) mod testing;

pub use card::{AbilityBlock, AbilityKind, Family};
pub use codeword::{Codeword, Keyword};
pub use icon::{IconCache, IconDescriptor, ValuedIconDescriptor};
pub use style::StyleConfig;
pub use surface::{
    Color, FontMetrics, IconKey, IconProvider, ImageHandle, Rect, Size, Stroke, Surface,
    TextMeasure, TextOutline,
};
pub use token::{Token, build_tokens};
pub use tokenizer::{Word, tokenize};
pub use window::{AbilityRenderer, draw_centered_icon};
pub use wrap::{Line, wrap};
