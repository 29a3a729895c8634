//! Full card composition.
//!
//! Layers, bottom to top: base, family background, creature, vertical fade,
//! name, ability windows, edge frame, cost badges, family marks, ability
//! kind markers.

use valecard_core::{
    AbilityRenderer, Color, Family, IconKey, IconProvider, ImageHandle, Rect, Size, Surface,
    TextMeasure, draw_centered_icon,
};

use crate::assets::AssetStore;
use crate::canvas::Canvas;
use crate::card::CardDoc;
use crate::font::Font;

const BASE_FILL: Color = Color::gray(40, 255);
const CREATURE_PLACEHOLDER_FILL: Color = Color::gray(0, 120);
const CREATURE_PLACEHOLDER_TEXT: Color = Color::gray(255, 90);
const CREATURE_PLACEHOLDER_TEXT_FRAC: f32 = 0.018;
const NAME_SHADOW: Color = Color::gray(0, 180);
const NAME_SHADOW_OFFSET_FRAC: (f32, f32) = (0.009, 0.007);

const FADE_TOP_FRAC: f32 = 0.7;

/// Top-left cost badge, as card fractions.
const COST_RECT_FRAC: Rect = Rect::new(0.02, 0.112_171_84, 0.193_333_34, 0.140_811_47);
/// Bottom-right cost badge: origin fractions and scale of the top-left size.
const COST_SECOND_ORIGIN_FRAC: (f32, f32) = (0.69, 0.85);
const COST_SECOND_SCALE: f32 = 0.8;

/// Family marks: centre fractions and width fraction.
const FAMILY_MARKS: [(f32, f32, f32); 2] = [(0.11, 0.083, 0.14), (0.87, 0.925, 0.115)];

/// Fonts used for a card.
#[derive(Debug, Clone, Copy)]
pub struct Fonts<'f> {
    pub ability: &'f Font,
    pub name: &'f Font,
}

/// Solid colour drawn when a family background image is missing.
pub fn fallback_color(family: Family) -> Color {
    match family {
        Family::Fire => Color::rgb(180, 60, 40),
        Family::Water => Color::rgb(40, 90, 170),
        Family::Air => Color::rgb(120, 160, 200),
        Family::Earth => Color::rgb(70, 140, 70),
        Family::Dragon => Color::rgb(130, 70, 170),
    }
}

/// Largest rectangle with `image`'s aspect ratio centred inside `frame`.
pub fn fit_contain(image: ImageHandle, frame: Rect) -> Rect {
    let Some(aspect) = image.aspect() else {
        return frame;
    };
    let (w, h) = if frame.w / frame.h > aspect {
        (frame.h * aspect, frame.h)
    } else {
        (frame.w, frame.w / aspect)
    };
    Rect::centered(frame.x + frame.w / 2.0, frame.y + frame.h / 2.0, w, h)
}

/// Draw the whole card onto `canvas`, filling it edge to edge.
pub fn draw_card<'a>(
    canvas: &mut Canvas<'a>,
    renderer: &mut AbilityRenderer,
    card: &CardDoc,
    assets: &AssetStore,
    fonts: Fonts<'a>,
) {
    let size = canvas.size();
    let full = Rect::new(0.0, 0.0, size.w, size.h);
    let corner = renderer.style().card_corner_radius;

    canvas.fill_rounded_rect(full, corner, BASE_FILL, None);
    match assets.background {
        Some(bg) => canvas.draw_image(bg, full),
        None => canvas.fill_rounded_rect(full, corner, fallback_color(card.family), None),
    }

    canvas.set_font(fonts.ability);
    draw_creature(canvas, renderer, card, assets, size);

    if let Some(fade) = assets.fade {
        let top = FADE_TOP_FRAC * size.h;
        canvas.draw_image(fade, Rect::new(0.0, top, size.w, size.h - top));
    }

    canvas.set_font(fonts.name);
    draw_name(canvas, renderer, card, fonts.name, size);

    canvas.set_font(fonts.ability);
    let blocks = card.ability_blocks();
    renderer.render(canvas, fonts.ability, assets, &blocks, size);

    if let Some(frame) = assets.frame {
        canvas.draw_image(frame, full);
    }

    if let Some(cost) = assets.cost {
        draw_cost(canvas, cost, size);
    } else {
        log::debug!("compose: no cost badge for {}", card.cost_image_name());
    }

    let family = assets.icon_image(IconKey::Family(card.family));
    for (cx, cy, w) in FAMILY_MARKS {
        draw_centered_icon(canvas, family, cx * size.w, cy * size.h, w * size.w);
    }

    renderer.render_kind_icons(canvas, assets, &blocks, size);
}

fn draw_creature(
    canvas: &mut Canvas<'_>,
    renderer: &AbilityRenderer,
    card: &CardDoc,
    assets: &AssetStore,
    size: Size,
) {
    let (cx, cy, w, h) = card.creature_box(renderer.style());
    let frame = Rect::centered(cx * size.w, cy * size.h, w * size.w, h * size.h);
    if frame.is_degenerate() {
        return;
    }
    match assets.creature {
        Some(img) => canvas.draw_image(img, fit_contain(img, frame)),
        None => {
            let radius = renderer.style().card_corner_radius;
            canvas.fill_rounded_rect(frame, radius, CREATURE_PLACEHOLDER_FILL, None);
            let text_size = CREATURE_PLACEHOLDER_TEXT_FRAC * size.h;
            let mid_x = frame.x + frame.w / 2.0;
            let mid_y = frame.y + frame.h / 2.0;
            for (text, dy) in [("Creature Image", -0.6), ("(placeholder)", 0.6)] {
                canvas.draw_text_centered(
                    text,
                    mid_x,
                    mid_y + dy * text_size,
                    text_size,
                    CREATURE_PLACEHOLDER_TEXT,
                    None,
                );
            }
        }
    }
}

fn draw_name(
    canvas: &mut Canvas<'_>,
    renderer: &AbilityRenderer,
    card: &CardDoc,
    font: &Font,
    size: Size,
) {
    if card.name.is_empty() {
        return;
    }
    let s = renderer.style();
    let text_size = s.name_size_frac * size.h;
    let x = s.name_x_frac * size.w - font.text_width(&card.name, text_size) / 2.0;
    let baseline = s.name_y_frac * size.h;
    let (dx, dy) = NAME_SHADOW_OFFSET_FRAC;
    canvas.draw_text(
        &card.name,
        x + dx * size.w,
        baseline + dy * size.w,
        text_size,
        NAME_SHADOW,
    );
    canvas.draw_text(&card.name, x, baseline, text_size, s.name_color);
}

fn draw_cost(canvas: &mut Canvas<'_>, cost: ImageHandle, size: Size) {
    let first = Rect::new(
        COST_RECT_FRAC.x * size.w,
        COST_RECT_FRAC.y * size.h,
        COST_RECT_FRAC.w * size.w,
        COST_RECT_FRAC.h * size.h,
    );
    canvas.draw_image(cost, first);

    let (ox, oy) = COST_SECOND_ORIGIN_FRAC;
    let second = Rect::new(
        ox * size.w,
        oy * size.h + first.h * (1.0 - COST_SECOND_SCALE) / 2.0,
        first.w * COST_SECOND_SCALE,
        first.h * COST_SECOND_SCALE,
    );
    canvas.draw_image(cost, second);
}
