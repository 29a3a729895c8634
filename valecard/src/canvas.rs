//! Software RGBA canvas implementing the layout engine's `Surface`.
//!
//! Straight-alpha source-over blending. Rounded rectangles use
//! signed-distance coverage for a one-pixel anti-aliased edge; images are
//! sampled bilinearly; text comes from swash glyph masks.

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use swash::scale::ScaleContext;

use valecard_core::{Color, ImageHandle, Rect, Size, Stroke, Surface, TextMeasure, TextOutline};

use crate::assets::AssetStore;
use crate::error::{Error, Result};
use crate::font::{Font, GlyphMask};

/// Directions the outline mask is stamped in, scaled by the outline radius.
const OUTLINE_OFFSETS: [(f32, f32); 8] = [
    (-1.0, -1.0),
    (0.0, -1.0),
    (1.0, -1.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, 1.0),
    (0.0, 1.0),
    (1.0, 1.0),
];

pub struct Canvas<'a> {
    pixels: RgbaImage,
    assets: &'a AssetStore,
    font: Option<&'a Font>,
    scale: ScaleContext,
}

impl<'a> Canvas<'a> {
    /// Transparent canvas of `width`×`height` pixels (each at least 1).
    pub fn new(width: u32, height: u32, assets: &'a AssetStore) -> Self {
        Self {
            pixels: RgbaImage::new(width.max(1), height.max(1)),
            assets,
            font: None,
            scale: ScaleContext::new(),
        }
    }

    /// Font used by subsequent text draws.
    pub fn set_font(&mut self, font: &'a Font) {
        self.font = Some(font);
    }

    pub fn size(&self) -> Size {
        Size::new(self.pixels.width() as f32, self.pixels.height() as f32)
    }

    /// Overwrite every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        for p in self.pixels.pixels_mut() {
            *p = Rgba(color.0);
        }
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        (x < self.pixels.width() && y < self.pixels.height())
            .then(|| Color(self.pixels.get_pixel(x, y).0))
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.pixels
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| Error::Export {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!(
            "canvas: wrote {}x{} to {}",
            self.pixels.width(),
            self.pixels.height(),
            path.display()
        );
        Ok(())
    }

    fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.pixels.width() || y >= self.pixels.height() {
            return;
        }
        let [r, g, b, a] = color.0;
        let src = [
            f32::from(r),
            f32::from(g),
            f32::from(b),
            f32::from(a) / 255.0 * coverage,
        ];
        blend_over(self.pixels.get_pixel_mut(x, y), src);
    }

    /// Pixel bounds of `rect` grown by `pad`, clipped to the canvas.
    fn clip(&self, rect: Rect, pad: f32) -> Option<(i32, i32, i32, i32)> {
        let x0 = ((rect.x - pad).floor() as i32).max(0);
        let y0 = ((rect.y - pad).floor() as i32).max(0);
        let x1 = ((rect.right() + pad).ceil() as i32).min(self.pixels.width() as i32);
        let y1 = ((rect.bottom() + pad).ceil() as i32).min(self.pixels.height() as i32);
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }

    fn stamp(&mut self, masks: &[GlyphMask], x: i32, y: i32, color: Color) {
        for m in masks {
            let ox = x + m.pen + m.left;
            let oy = y - m.top;
            for row in 0..m.height {
                for col in 0..m.width {
                    let alpha = m.data[(row * m.width + col) as usize];
                    if alpha > 0 {
                        self.blend(
                            ox + col as i32,
                            oy + row as i32,
                            color,
                            f32::from(alpha) / 255.0,
                        );
                    }
                }
            }
        }
    }

    fn glyphs(&mut self, text: &str, size: f32) -> Vec<GlyphMask> {
        match self.font {
            Some(font) if size > 0.0 && size.is_finite() => font.rasterize(&mut self.scale, text, size),
            Some(_) => Vec::new(),
            None => {
                log::debug!("canvas: no font set, skipping {text:?}");
                Vec::new()
            }
        }
    }
}

/// Source-over blend of straight-alpha `src` (rgb 0–255, alpha 0–1) onto `dst`.
fn blend_over(dst: &mut Rgba<u8>, src: [f32; 4]) {
    let sa = src[3].clamp(0.0, 1.0);
    if sa <= 0.0 {
        return;
    }
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    for (d, s) in dst.0.iter_mut().zip(src).take(3) {
        let dv = f32::from(*d);
        *d = ((s * sa + dv * da * (1.0 - sa)) / out_a).round().clamp(0.0, 255.0) as u8;
    }
    dst.0[3] = (out_a * 255.0).round() as u8;
}

/// Signed distance from (`px`, `py`) to the rounded rectangle; negative inside.
fn rounded_rect_distance(px: f32, py: f32, rect: Rect, radius: f32) -> f32 {
    let hw = rect.w / 2.0;
    let hh = rect.h / 2.0;
    let r = radius.clamp(0.0, hw.min(hh));
    let qx = (px - (rect.x + hw)).abs() - (hw - r);
    let qy = (py - (rect.y + hh)).abs() - (hh - r);
    qx.max(0.0).hypot(qy.max(0.0)) + qx.max(qy).min(0.0) - r
}

/// Bilinear sample at continuous source coordinates, edge-clamped.
/// Interpolates premultiplied values and returns straight alpha.
fn sample_bilinear(img: &RgbaImage, u: f32, v: f32) -> [f32; 4] {
    let max_x = img.width() as f32 - 1.0;
    let max_y = img.height() as f32 - 1.0;
    let u = u.clamp(0.0, max_x);
    let v = v.clamp(0.0, max_y);
    let (x0, y0) = (u.floor(), v.floor());
    let (tx, ty) = (u - x0, v - y0);
    let (x0, y0) = (x0 as u32, y0 as u32);
    let x1 = (x0 + 1).min(img.width() - 1);
    let y1 = (y0 + 1).min(img.height() - 1);

    let mut acc = [0.0_f32; 4];
    for (x, y, w) in [
        (x0, y0, (1.0 - tx) * (1.0 - ty)),
        (x1, y0, tx * (1.0 - ty)),
        (x0, y1, (1.0 - tx) * ty),
        (x1, y1, tx * ty),
    ] {
        let p = img.get_pixel(x, y);
        let a = f32::from(p[3]) / 255.0;
        for (c, &v) in acc.iter_mut().zip(&p.0[..3]) {
            *c += f32::from(v) * a * w;
        }
        acc[3] += a * w;
    }
    let alpha = acc[3];
    if alpha > 0.0 {
        for c in &mut acc[..3] {
            *c /= alpha;
        }
    }
    acc
}

impl Surface for Canvas<'_> {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, fill: Color, stroke: Option<Stroke>) {
        if rect.is_degenerate() {
            return;
        }
        let stroke = stroke.filter(|s| s.width > 0.0 && s.color.alpha() > 0);
        let half = stroke.map_or(0.0, |s| s.width / 2.0);
        let Some((x0, y0, x1, y1)) = self.clip(rect, half + 1.0) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                let d = rounded_rect_distance(x as f32 + 0.5, y as f32 + 0.5, rect, radius);
                if fill.alpha() > 0 {
                    self.blend(x, y, fill, (0.5 - d).clamp(0.0, 1.0));
                }
                if let Some(s) = stroke {
                    self.blend(x, y, s.color, (half + 0.5 - d.abs()).clamp(0.0, 1.0));
                }
            }
        }
    }

    fn draw_image(&mut self, image: ImageHandle, dest: Rect) {
        if dest.is_degenerate() {
            return;
        }
        let assets = self.assets;
        let Some(src) = assets.pixels(image).filter(|p| p.width() > 0 && p.height() > 0) else {
            log::debug!("canvas: unknown image {}", image.id);
            return;
        };
        let Some((x0, y0, x1, y1)) = self.clip(dest, 0.0) else {
            return;
        };
        let sx = src.width() as f32 / dest.w;
        let sy = src.height() as f32 / dest.h;
        for y in y0..y1 {
            let cy = y as f32 + 0.5;
            if cy < dest.y || cy > dest.bottom() {
                continue;
            }
            let v = (cy - dest.y) * sy - 0.5;
            for x in x0..x1 {
                let cx = x as f32 + 0.5;
                if cx < dest.x || cx > dest.right() {
                    continue;
                }
                let u = (cx - dest.x) * sx - 0.5;
                let sample = sample_bilinear(src, u, v);
                if sample[3] > 0.0 {
                    blend_over(self.pixels.get_pixel_mut(x as u32, y as u32), sample);
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, size: f32, color: Color) {
        let masks = self.glyphs(text, size);
        self.stamp(&masks, x.round() as i32, baseline.round() as i32, color);
    }

    fn draw_text_centered(
        &mut self,
        text: &str,
        cx: f32,
        cy: f32,
        size: f32,
        fill: Color,
        outline: Option<TextOutline>,
    ) {
        let Some(font) = self.font else {
            log::debug!("canvas: no font set, skipping {text:?}");
            return;
        };
        let width = font.text_width(text, size);
        let m = font.metrics(size);
        let x = (cx - width / 2.0).round() as i32;
        let baseline = (cy + (m.ascent - m.descent) / 2.0).round() as i32;

        let masks = self.glyphs(text, size);
        if let Some(outline) = outline {
            let r = (outline.width / 2.0).max(1.0);
            for (dx, dy) in OUTLINE_OFFSETS {
                let ox = (dx * r).round() as i32;
                let oy = (dy * r).round() as i32;
                self.stamp(&masks, x + ox, baseline + oy, outline.color);
            }
        }
        self.stamp(&masks, x, baseline, fill);
    }
}
