//! Font loading, measurement, and glyph rasterization via swash.

use std::path::Path;

use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::Format;
use swash::{CacheKey, FontRef};

use valecard_core::{FontMetrics, TextMeasure};

use crate::error::{Error, Result};

/// A single font face: raw bytes plus swash identifiers for transient
/// `FontRef` creation.
pub struct Font {
    bytes: Vec<u8>,
    /// Byte offset to the table directory (from `FontRef::from_index`).
    offset: u32,
    /// Cache key for `ScaleContext` reuse across draws.
    key: CacheKey,
}

/// Alpha coverage for one glyph, positioned relative to the pen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphMask {
    /// Pen x offset of the glyph origin, in whole pixels.
    pub pen: i32,
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Font {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Self::from_bytes(bytes).ok_or_else(|| Error::Font {
            path: path.to_path_buf(),
        })?;
        log::debug!("font: loaded {}", path.display());
        Ok(font)
    }

    /// Parse the first face in `bytes`.
    pub fn from_bytes(bytes: Vec<u8>) -> Option<Self> {
        let fr = FontRef::from_index(&bytes, 0)?;
        let (offset, key) = (fr.offset, fr.key);
        Some(Self { bytes, offset, key })
    }

    fn font_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.bytes,
            offset: self.offset,
            key: self.key,
        }
    }

    /// Rasterize `text` at `size` into glyph masks. Glyphs with no coverage
    /// (spaces) advance the pen but produce no mask.
    pub fn rasterize(&self, ctx: &mut ScaleContext, text: &str, size: f32) -> Vec<GlyphMask> {
        let fr = self.font_ref();
        let charmap = fr.charmap();
        let glyph_metrics = fr.glyph_metrics(&[]).scale(size);
        let mut scaler = ctx.builder(fr).size(size).hint(true).build();

        let mut masks = Vec::with_capacity(text.len());
        let mut pen = 0.0_f32;
        for ch in text.chars() {
            let gid = charmap.map(ch);
            let image = Render::new(&[Source::Outline])
                .format(Format::Alpha)
                .render(&mut scaler, gid);
            if let Some(image) = image.filter(|i| i.placement.width > 0 && i.placement.height > 0) {
                masks.push(GlyphMask {
                    pen: pen.round() as i32,
                    left: image.placement.left,
                    top: image.placement.top,
                    width: image.placement.width,
                    height: image.placement.height,
                    data: image.data,
                });
            }
            pen += glyph_metrics.advance_width(gid);
        }
        masks
    }
}

impl TextMeasure for Font {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        let fr = self.font_ref();
        let charmap = fr.charmap();
        let glyph_metrics = fr.glyph_metrics(&[]).scale(size);
        text.chars()
            .map(|ch| glyph_metrics.advance_width(charmap.map(ch)))
            .sum()
    }

    fn metrics(&self, size: f32) -> FontMetrics {
        let m = self.font_ref().metrics(&[]).scale(size);
        FontMetrics {
            ascent: m.ascent,
            descent: m.descent.abs(),
        }
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("bytes", &self.bytes.len())
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

/// A system font if one is installed. Tests that need real outlines skip
/// themselves when this is `None`.
#[cfg(test)]
pub(crate) fn system_font() -> Option<Font> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/Library/Fonts/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .map(Path::new)
    .find(|p| p.exists())
    .and_then(|p| Font::load(p).ok())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use swash::scale::ScaleContext;
    use valecard_core::TextMeasure;

    use super::{Font, system_font};
    use crate::error::Error;

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(Font::from_bytes(b"not a font".to_vec()).is_none());
        assert!(Font::from_bytes(Vec::new()).is_none());
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = Font::load(Path::new("/nonexistent/valecard.ttf")).expect_err("missing");
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn width_scales_linearly_with_size() {
        let Some(font) = system_font() else { return };
        let small = font.text_width("Abilities", 10.0);
        let large = font.text_width("Abilities", 20.0);
        assert!(small > 0.0);
        assert!((large - small * 2.0).abs() < 0.01 * large);
        assert!(font.text_width("", 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn metrics_are_positive() {
        let Some(font) = system_font() else { return };
        let m = font.metrics(32.0);
        assert!(m.ascent > 0.0);
        assert!(m.descent > 0.0);
        assert!(m.ascent > m.descent);
    }

    #[test]
    fn space_has_no_mask_but_advances() {
        let Some(font) = system_font() else { return };
        let mut ctx = ScaleContext::new();
        let masks = font.rasterize(&mut ctx, "A A", 24.0);
        assert_eq!(masks.len(), 2);
        assert!(masks[1].pen > masks[0].pen);
        for m in &masks {
            assert_eq!(m.data.len(), (m.width * m.height) as usize);
        }
    }
}
