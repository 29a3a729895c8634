//! Ability window rendering.
//!
//! One ability fills the whole ability area; two abilities split it into
//! equal stacked windows with a gap. Each window gets a rounded panel, and
//! its text is wrapped to the padded interior and centred vertically.
//! Font and icon sizes follow the card height, not the window, so one- and
//! two-ability cards share the same text size.

use crate::card::{AbilityBlock, AbilityKind};
use crate::codeword::Keyword;
use crate::icon::{IconCache, IconDescriptor, MIN_ASPECT};
use crate::style::StyleConfig;
use crate::surface::{
    Color, IconKey, IconProvider, ImageHandle, Rect, Size, Stroke, Surface, TextMeasure,
};
use crate::token::{IconSizing, TextStyle, build_tokens};
use crate::tokenizer::tokenize;
use crate::wrap::{Line, wrap};

/// Most abilities a card can show.
pub const MAX_ABILITIES: usize = 2;

const KIND_PLACEHOLDER_FILL: Color = Color::gray(255, 200);
const KIND_PLACEHOLDER_RADIUS: f32 = 6.0;

/// Wrapped and positioned text for one ability window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowLayout {
    pub lines: Vec<Line>,
    /// Padded interior the text is wrapped into.
    pub text_area: Rect,
    pub font_size: f32,
    pub ascent: f32,
    pub line_height: f32,
    /// Baseline of the first line, including the style's baseline shift.
    pub first_baseline: f32,
}

/// Render context for ability windows. Owns the icon cache.
#[derive(Debug)]
pub struct AbilityRenderer {
    style: StyleConfig,
    cache: IconCache,
}

impl AbilityRenderer {
    pub fn new(style: StyleConfig) -> Self {
        let cache = IconCache::with_gem_scale(style.icon_gem_mult);
        Self { style, cache }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replace the style. Cached icons are kept and re-validated by height.
    pub fn set_style(&mut self, style: StyleConfig) {
        self.cache.set_gem_scale(style.icon_gem_mult);
        self.style = style;
    }

    pub fn cache(&self) -> &IconCache {
        &self.cache
    }

    /// Window rectangles for `count` abilities on a card of size `card`.
    pub fn window_rects(&self, count: usize, card: Size) -> Vec<Rect> {
        let s = &self.style;
        match count {
            0 => Vec::new(),
            1 => vec![Rect::new(
                s.ability1_x_frac * card.w,
                s.ability1_y_frac * card.h,
                s.ability1_w_frac * card.w,
                s.ability1_h_frac * card.h,
            )],
            _ => {
                let x = s.ability2_total_x_frac * card.w;
                let y = s.ability2_total_y_frac * card.h;
                let w = s.ability2_total_w_frac * card.w;
                let h = s.ability2_total_h_frac * card.h;
                let gap = s.ability2_gap_y_frac * card.h;
                let each = (h - gap) / 2.0;
                vec![
                    Rect::new(x, y, w, each),
                    Rect::new(x, y + each + gap, w, each),
                ]
            }
        }
    }

    /// Blocks that will actually be drawn, paired with their windows.
    fn placed<'b>(&self, blocks: &'b [AbilityBlock], card: Size) -> Vec<(&'b AbilityBlock, Rect)> {
        if card.is_degenerate() {
            return Vec::new();
        }
        if blocks.len() > MAX_ABILITIES {
            log::warn!(
                "ability windows: {} abilities given, rendering the first {MAX_ABILITIES}",
                blocks.len()
            );
        }
        let blocks = &blocks[..blocks.len().min(MAX_ABILITIES)];
        blocks
            .iter()
            .zip(self.window_rects(blocks.len(), card))
            .filter(|(_, rect)| !rect.is_degenerate())
            .collect()
    }

    /// Draw the panels and text of every ability.
    pub fn render(
        &mut self,
        surface: &mut dyn Surface,
        measure: &dyn TextMeasure,
        provider: &dyn IconProvider,
        blocks: &[AbilityBlock],
        card: Size,
    ) {
        for (block, rect) in self.placed(blocks, card) {
            self.render_window(surface, measure, provider, &block.text, rect, card);
        }
    }

    /// Wrap and position `text` inside the window `rect`.
    pub fn layout(
        &mut self,
        measure: &dyn TextMeasure,
        provider: &dyn IconProvider,
        text: &str,
        rect: Rect,
        card: Size,
    ) -> WindowLayout {
        let s = &self.style;
        let pad_x = s.padding_x_frac * rect.w;
        let pad_y = s.padding_y_frac * rect.h;
        let indent = s.text_start_x_frac * rect.w;
        let text_area = Rect::new(
            rect.x + pad_x + indent,
            rect.y + pad_y,
            rect.w - pad_x * 2.0 - indent,
            rect.h - pad_y * 2.0,
        );

        let font_size = s.ability_text_size_frac * card.h;
        let sizing = IconSizing {
            height: s.icon_height_frac * card.h,
            gap: s.icon_extra_gap_frac * card.w,
        };
        let metrics = measure.metrics(font_size);
        let line_height = (metrics.ascent + metrics.descent) * s.line_spacing_mult
            + s.line_spacing_extra_frac * card.h
            + s.icon_height_frac * rect.h;
        let baseline_shift = s.baseline_shift_frac * rect.h;

        let tokens = build_tokens(&tokenize(text), sizing, &mut self.cache, provider);
        let lines = wrap(tokens, text_area.w, measure, font_size);

        let block_height = lines.len() as f32 * line_height;
        let first_baseline =
            text_area.y + (text_area.h - block_height) / 2.0 + metrics.ascent + baseline_shift;

        log::trace!(
            "ability window: {} line(s), font {font_size:.1}px, line height {line_height:.1}px",
            lines.len()
        );

        WindowLayout {
            lines,
            text_area,
            font_size,
            ascent: metrics.ascent,
            line_height,
            first_baseline,
        }
    }

    /// Draw one window: panel, then wrapped text.
    pub fn render_window(
        &mut self,
        surface: &mut dyn Surface,
        measure: &dyn TextMeasure,
        provider: &dyn IconProvider,
        text: &str,
        rect: Rect,
        card: Size,
    ) {
        if rect.is_degenerate() || card.is_degenerate() {
            return;
        }

        let s = &self.style;
        surface.fill_rounded_rect(
            rect,
            s.window_corner_frac * card.w,
            s.window_fill,
            Some(Stroke {
                color: s.window_stroke,
                width: s.window_stroke_weight_frac * card.w,
            }),
        );

        let layout = self.layout(measure, provider, text, rect, card);
        let style = TextStyle {
            size: layout.font_size,
            ascent: layout.ascent,
            color: self.style.ability_text_color,
        };

        let mut baseline = layout.first_baseline;
        for line in &layout.lines {
            let mut cursor = layout.text_area.x;
            for (token, advance) in line.items() {
                token.draw(surface, cursor, baseline, &style);
                cursor += advance;
            }
            baseline += layout.line_height;
        }
    }

    /// Draw the kind marker beside each ability window.
    pub fn render_kind_icons(
        &self,
        surface: &mut dyn Surface,
        provider: &dyn IconProvider,
        blocks: &[AbilityBlock],
        card: Size,
    ) {
        let s = &self.style;
        let width = s.kind_icon_width_frac * card.w;
        let offset = s.kind_icon_offset_x_frac * card.w;
        for (block, rect) in self.placed(blocks, card) {
            draw_kind_icon(
                surface,
                provider,
                block.kind,
                rect.x + offset,
                rect.y + rect.h / 2.0,
                width,
            );
        }
    }
}

fn draw_kind_icon(
    surface: &mut dyn Surface,
    provider: &dyn IconProvider,
    kind: AbilityKind,
    cx: f32,
    cy: f32,
    width: f32,
) {
    let image = provider.icon_image(IconKey::Keyword(Keyword::from(kind)));
    draw_centered_icon(surface, image, cx, cy, width);
}

/// Draw `image` centred on (`cx`, `cy`) at `width` pixels wide, keeping its
/// aspect ratio. A missing image becomes a translucent square.
pub fn draw_centered_icon(
    surface: &mut dyn Surface,
    image: Option<ImageHandle>,
    cx: f32,
    cy: f32,
    width: f32,
) {
    let icon = IconDescriptor::new(image, width);
    let w = width.max(1.0);
    let h = (w / icon.aspect.max(MIN_ASPECT)).max(1.0);
    let dest = Rect::centered(cx, cy, w, h);
    match icon.image {
        Some(image) => surface.draw_image(image, dest),
        None => surface.fill_rounded_rect(dest, KIND_PLACEHOLDER_RADIUS, KIND_PLACEHOLDER_FILL, None),
    }
}

#[cfg(test)]
mod tests;
