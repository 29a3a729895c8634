//! Test doubles for the collaborator traits.

use std::cell::Cell;
use std::collections::HashMap;

use crate::surface::{
    Color, FontMetrics, IconKey, IconProvider, ImageHandle, Rect, Stroke, Surface, TextMeasure,
    TextOutline,
};

/// Every char advances by `char_width` per pixel of font size.
pub struct FixedMeasure {
    pub char_width: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl FixedMeasure {
    /// One pixel per char at size 1; ascent 0.8, descent 0.2 of the size.
    pub fn unit() -> Self {
        Self {
            char_width: 1.0,
            ascent: 0.8,
            descent: 0.2,
        }
    }
}

impl TextMeasure for FixedMeasure {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * self.char_width * size
    }

    fn metrics(&self, size: f32) -> FontMetrics {
        FontMetrics {
            ascent: self.ascent * size,
            descent: self.descent * size,
        }
    }
}

/// Hands out images from a fixed table and counts lookups.
#[derive(Default)]
pub struct FakeIcons {
    pub images: HashMap<IconKey, ImageHandle>,
    pub lookups: Cell<usize>,
}

impl FakeIcons {
    pub fn with(mut self, key: IconKey, width: u32, height: u32) -> Self {
        let id = self.images.len() as u32;
        self.images.insert(key, ImageHandle { id, width, height });
        self
    }
}

impl IconProvider for FakeIcons {
    fn icon_image(&self, key: IconKey) -> Option<ImageHandle> {
        self.lookups.set(self.lookups.get() + 1);
        self.images.get(&key).copied()
    }
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    RoundedRect {
        rect: Rect,
        radius: f32,
        fill: Color,
        stroke: Option<Stroke>,
    },
    Image {
        image: ImageHandle,
        dest: Rect,
    },
    Text {
        text: String,
        x: f32,
        baseline: f32,
        size: f32,
    },
    CenteredText {
        text: String,
        cx: f32,
        cy: f32,
        size: f32,
        outline: Option<TextOutline>,
    },
}

/// Surface that records calls instead of drawing.
#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn texts(&self) -> Vec<(&str, f32, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, x, baseline, .. } => Some((text.as_str(), *x, *baseline)),
                _ => None,
            })
            .collect()
    }

    pub fn panels(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::RoundedRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, fill: Color, stroke: Option<Stroke>) {
        self.ops.push(DrawOp::RoundedRect {
            rect,
            radius,
            fill,
            stroke,
        });
    }

    fn draw_image(&mut self, image: ImageHandle, dest: Rect) {
        self.ops.push(DrawOp::Image { image, dest });
    }

    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, size: f32, _color: Color) {
        self.ops.push(DrawOp::Text {
            text: text.to_owned(),
            x,
            baseline,
            size,
        });
    }

    fn draw_text_centered(
        &mut self,
        text: &str,
        cx: f32,
        cy: f32,
        size: f32,
        _fill: Color,
        outline: Option<TextOutline>,
    ) {
        self.ops.push(DrawOp::CenteredText {
            text: text.to_owned(),
            cx,
            cy,
            size,
            outline,
        });
    }
}
