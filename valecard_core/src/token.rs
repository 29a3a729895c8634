//! Layout tokens: text runs and inline icons.
//!
//! Tokens are built fresh for every render from the tokenizer's words and
//! are never mutated afterwards. Each token knows its horizontal advance
//! and how to draw itself at a cursor position on a baseline.

use std::sync::Arc;

use crate::codeword::{self, Codeword};
use crate::icon::{IconCache, IconDescriptor, ValuedIconDescriptor};
use crate::surface::{Color, IconKey, IconProvider, Rect, Surface, TextMeasure, TextOutline};
use crate::tokenizer::Word;

/// The single-space separator between words.
pub const SEPARATOR: &str = " ";

/// Fill of the box drawn when an icon has no image.
const PLACEHOLDER_FILL: Color = Color::gray(255, 200);
const PLACEHOLDER_RADIUS: f32 = 4.0;

/// Value text size relative to the badge height.
const VALUE_TEXT_SCALE: f32 = 0.62;
/// Value outline width relative to the badge height.
const VALUE_OUTLINE_SCALE: f32 = 0.06;
const VALUE_OUTLINE: Color = Color::gray(0, 180);

/// One element of a laid-out ability line.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Literal text, including the separator.
    Text(String),
    Icon {
        icon: Arc<IconDescriptor>,
        gap: f32,
    },
    Valued {
        icon: ValuedIconDescriptor,
        gap: f32,
    },
}

/// Font state shared by every token on a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub ascent: f32,
    pub color: Color,
}

/// Inline icon height and trailing gap, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSizing {
    pub height: f32,
    pub gap: f32,
}

impl Token {
    pub fn separator() -> Self {
        Self::Text(SEPARATOR.to_owned())
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Text(t) if t == SEPARATOR)
    }

    /// Horizontal space this token occupies at font size `size`.
    pub fn advance(&self, measure: &dyn TextMeasure, size: f32) -> f32 {
        match self {
            Self::Text(text) => measure.text_width(text, size),
            Self::Icon { icon, gap } => icon.width + gap,
            Self::Valued { icon, gap } => icon.icon.width + gap,
        }
    }

    /// Draw at cursor `x` on `baseline`.
    ///
    /// Icons are centred on the line's visual midpoint (`baseline - ascent/2`)
    /// rather than resting on the baseline.
    pub fn draw(&self, surface: &mut dyn Surface, x: f32, baseline: f32, style: &TextStyle) {
        match self {
            Self::Text(text) => surface.draw_text(text, x, baseline, style.size, style.color),
            Self::Icon { icon, .. } => {
                draw_inline_icon(surface, icon, x, baseline, style.ascent);
            }
            Self::Valued { icon, .. } => {
                let rect = draw_inline_icon(surface, &icon.icon, x, baseline, style.ascent);
                let h = icon.icon.height;
                surface.draw_text_centered(
                    &icon.value,
                    rect.x + rect.w / 2.0,
                    rect.y + rect.h / 2.0,
                    h * VALUE_TEXT_SCALE,
                    Color::WHITE,
                    Some(TextOutline {
                        color: VALUE_OUTLINE,
                        width: (h * VALUE_OUTLINE_SCALE).max(1.0),
                    }),
                );
            }
        }
    }
}

/// Draw an icon (or its placeholder) and return the rectangle it occupies.
fn draw_inline_icon(
    surface: &mut dyn Surface,
    icon: &IconDescriptor,
    x: f32,
    baseline: f32,
    ascent: f32,
) -> Rect {
    let mid = baseline - ascent / 2.0;
    let rect = Rect::new(x, mid - icon.height / 2.0, icon.width, icon.height);
    match icon.image {
        Some(image) => surface.draw_image(image, rect),
        None => surface.fill_rounded_rect(rect, PLACEHOLDER_RADIUS, PLACEHOLDER_FILL, None),
    }
    rect
}

/// Resolve words into tokens, inserting a separator wherever the source had
/// whitespace between two words.
pub fn build_tokens(
    words: &[Word<'_>],
    sizing: IconSizing,
    cache: &mut IconCache,
    provider: &dyn IconProvider,
) -> Vec<Token> {
    let mut out = Vec::with_capacity(words.len() * 2);
    for word in words {
        if word.spaced {
            out.push(Token::separator());
        }
        let token = match codeword::resolve(word.text) {
            Some(Codeword::Family(family)) => Token::Icon {
                icon: cache.family_icon(family, sizing.height, provider),
                gap: sizing.gap,
            },
            Some(Codeword::Valued(value)) => Token::Valued {
                icon: ValuedIconDescriptor::new(
                    provider.icon_image(IconKey::Willpower),
                    sizing.height,
                    value,
                ),
                gap: sizing.gap,
            },
            Some(Codeword::Keyword(keyword)) => Token::Icon {
                icon: cache.keyword_icon(keyword, sizing.height, provider),
                gap: sizing.gap,
            },
            None => Token::Text(word.text.to_owned()),
        };
        out.push(token);
    }
    out
}
