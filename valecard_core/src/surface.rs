//! Collaborator seams: text measurement, icon images, and the drawing surface.
//!
//! The layout engine only talks to these traits. The `valecard` binary
//! implements them with swash, the `image` crate, and a software canvas;
//! tests implement them with fixed-advance fakes and a call recorder.

use serde::{Deserialize, Serialize};

use crate::card::Family;
use crate::codeword::Keyword;

/// Straight-alpha RGBA color. Serializes as `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    pub const WHITE: Self = Self([255, 255, 255, 255]);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    pub const fn gray(v: u8, a: u8) -> Self {
        Self([v, v, v, a])
    }

    pub fn alpha(self) -> u8 {
        self.0[3]
    }
}

/// Axis-aligned rectangle in surface pixels (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w`×`h` centred on (`cx`, `cy`).
    pub fn centered(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    /// True when the rectangle has no drawable area or non-finite fields.
    pub fn is_degenerate(&self) -> bool {
        !(self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite())
            || self.w <= 0.0
            || self.h <= 0.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Card dimensions in pixels. All style fractions are relative to these.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }

    pub fn is_degenerate(&self) -> bool {
        Rect::new(0.0, 0.0, self.w, self.h).is_degenerate()
    }
}

/// Vertical font metrics at one pixel size. Both values are positive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

/// Opaque reference to a decoded image owned by the caller.
///
/// The provider hands out `id`s; the surface maps them back to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle {
    pub id: u32,
    pub width: u32,
    pub height: u32,
}

impl ImageHandle {
    /// Intrinsic width / height, or `None` for an empty image.
    pub fn aspect(&self) -> Option<f32> {
        (self.width > 0 && self.height > 0).then(|| self.width as f32 / self.height as f32)
    }
}

/// Logical icon identity requested from an [`IconProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKey {
    Family(Family),
    Keyword(Keyword),
    /// Willpower badge behind valued codewords such as `{2wp}`.
    Willpower,
}

/// Measures text in the active ability font.
pub trait TextMeasure {
    /// Horizontal advance of `text` at `size` pixels.
    fn text_width(&self, text: &str, size: f32) -> f32;

    /// Ascent and descent at `size` pixels.
    fn metrics(&self, size: f32) -> FontMetrics;
}

/// Supplies icon images by logical key. Absence is not an error.
pub trait IconProvider {
    fn icon_image(&self, key: IconKey) -> Option<ImageHandle>;
}

/// Outline applied to text drawn with [`Surface::draw_text_centered`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOutline {
    pub color: Color,
    pub width: f32,
}

/// Stroke applied to [`Surface::fill_rounded_rect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// Drawing primitives the layout engine needs.
pub trait Surface {
    /// Fill a rounded rectangle, optionally stroking its border.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, fill: Color, stroke: Option<Stroke>);

    /// Blit an image scaled to `dest`.
    fn draw_image(&mut self, image: ImageHandle, dest: Rect);

    /// Draw left-aligned text with its baseline at `baseline`.
    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, size: f32, color: Color);

    /// Draw text centred both horizontally and vertically on (`cx`, `cy`).
    fn draw_text_centered(
        &mut self,
        text: &str,
        cx: f32,
        cy: f32,
        size: f32,
        fill: Color,
        outline: Option<TextOutline>,
    );
}
