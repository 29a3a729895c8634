use super::AbilityRenderer;
use crate::card::{AbilityBlock, AbilityKind};
use crate::codeword::Keyword;
use crate::style::StyleConfig;
use crate::surface::{IconKey, Rect, Size};
use crate::testing::{DrawOp, FakeIcons, FixedMeasure, Recorder};

const CARD: Size = Size::new(1000.0, 1000.0);

/// Style with no padding, 10px font, and line height equal to the font size.
fn flat_style() -> StyleConfig {
    StyleConfig {
        padding_x_frac: 0.0,
        padding_y_frac: 0.0,
        text_start_x_frac: 0.0,
        ability_text_size_frac: 0.01,
        line_spacing_mult: 1.0,
        line_spacing_extra_frac: 0.0,
        baseline_shift_frac: 0.0,
        icon_height_frac: 0.0,
        ..StyleConfig::default()
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn one_ability_uses_single_window() {
    let r = AbilityRenderer::new(StyleConfig::default());
    let rects = r.window_rects(1, CARD);
    assert_eq!(rects.len(), 1);
    let w = rects[0];
    assert!(approx(w.x, 95.0) && approx(w.y, 667.2) && approx(w.w, 900.0) && approx(w.h, 225.0));
}

#[test]
fn two_abilities_split_with_gap() {
    let r = AbilityRenderer::new(StyleConfig::default());
    let rects = r.window_rects(2, CARD);
    assert_eq!(rects.len(), 2);
    assert!(approx(rects[0].h, 107.5));
    assert!(approx(rects[1].h, 107.5));
    assert!(approx(rects[1].y - rects[0].bottom(), 10.0));
    assert!(r.window_rects(0, CARD).is_empty());
}

#[test]
fn text_is_centered_vertically() {
    let mut r = AbilityRenderer::new(flat_style());
    let mut rec = Recorder::default();
    let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    r.render_window(&mut rec, &FixedMeasure::unit(), &FakeIcons::default(), "aa bb", rect, CARD);

    assert_eq!(rec.panels(), [rect]);
    // Line height 10, block centred in 50: top 20, baseline 20 + ascent 8.
    assert_eq!(rec.texts(), [("aa", 0.0, 28.0), (" ", 20.0, 28.0), ("bb", 30.0, 28.0)]);
}

#[test]
fn wrapped_lines_advance_by_line_height() {
    let mut r = AbilityRenderer::new(flat_style());
    let mut rec = Recorder::default();
    let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    r.render_window(
        &mut rec,
        &FixedMeasure::unit(),
        &FakeIcons::default(),
        "aaaaa bbbbb",
        rect,
        CARD,
    );
    assert_eq!(rec.texts(), [("aaaaa", 0.0, 23.0), ("bbbbb", 0.0, 33.0)]);
}

#[test]
fn padding_and_indent_shrink_text_area() {
    let style = StyleConfig {
        padding_x_frac: 0.1,
        padding_y_frac: 0.2,
        text_start_x_frac: 0.05,
        ..flat_style()
    };
    let mut r = AbilityRenderer::new(style);
    let layout = r.layout(
        &FixedMeasure::unit(),
        &FakeIcons::default(),
        "",
        Rect::new(10.0, 20.0, 200.0, 100.0),
        CARD,
    );
    assert_eq!(layout.text_area, Rect::new(40.0, 40.0, 150.0, 60.0));
}

#[test]
fn empty_text_lays_out_one_empty_line() {
    let mut r = AbilityRenderer::new(flat_style());
    let layout = r.layout(
        &FixedMeasure::unit(),
        &FakeIcons::default(),
        "   ",
        Rect::new(0.0, 0.0, 100.0, 50.0),
        CARD,
    );
    assert_eq!(layout.lines.len(), 1);
    assert!(layout.lines[0].is_empty());
    assert_eq!(layout.first_baseline, 28.0);
}

#[test]
fn line_height_reserves_icon_room_and_shift() {
    let style = StyleConfig {
        icon_height_frac: 0.1,
        line_spacing_mult: 1.5,
        line_spacing_extra_frac: 0.002,
        baseline_shift_frac: 0.1,
        ..flat_style()
    };
    let mut r = AbilityRenderer::new(style);
    let layout = r.layout(
        &FixedMeasure::unit(),
        &FakeIcons::default(),
        "x",
        Rect::new(0.0, 0.0, 500.0, 200.0),
        CARD,
    );
    // (8 + 2) * 1.5 + 0.002 * 1000 + 0.1 * 200
    assert!(approx(layout.line_height, 37.0));
    // (200 - 37) / 2 + 8 + 0.1 * 200
    assert!(approx(layout.first_baseline, 109.5));
}

#[test]
fn font_size_follows_card_not_window() {
    let mut r = AbilityRenderer::new(StyleConfig::default());
    let rects = r.window_rects(2, CARD);
    let single = r.window_rects(1, CARD)[0];
    let measure = FixedMeasure::unit();
    let icons = FakeIcons::default();
    let a = r.layout(&measure, &icons, "x", single, CARD);
    let b = r.layout(&measure, &icons, "x", rects[1], CARD);
    assert_eq!(a.font_size, b.font_size);
    assert!(approx(a.font_size, 31.0));
}

#[test]
fn renders_at_most_two_abilities() {
    let mut r = AbilityRenderer::new(StyleConfig::default());
    let mut rec = Recorder::default();
    let blocks = [
        AbilityBlock::new(AbilityKind::Immediate, "one"),
        AbilityBlock::new(AbilityKind::Continuous, "two"),
        AbilityBlock::new(AbilityKind::Periodic, "three"),
    ];
    r.render(&mut rec, &FixedMeasure::unit(), &FakeIcons::default(), &blocks, CARD);
    assert_eq!(rec.panels().len(), 2);
    let words: Vec<&str> = rec.texts().into_iter().map(|(t, _, _)| t).collect();
    assert_eq!(words, ["one", "two"]);
}

#[test]
fn degenerate_geometry_draws_nothing() {
    let mut r = AbilityRenderer::new(StyleConfig::default());
    let mut rec = Recorder::default();
    let blocks = [AbilityBlock::new(AbilityKind::Immediate, "text")];
    let measure = FixedMeasure::unit();
    let icons = FakeIcons::default();

    r.render(&mut rec, &measure, &icons, &blocks, Size::new(0.0, 500.0));
    r.render(&mut rec, &measure, &icons, &blocks, Size::new(500.0, -1.0));
    r.render_kind_icons(&mut rec, &icons, &blocks, Size::new(f32::NAN, 10.0));
    r.render_window(&mut rec, &measure, &icons, "text", Rect::new(0.0, 0.0, 10.0, 0.0), CARD);
    assert!(rec.ops.is_empty());

    r.render(&mut rec, &measure, &icons, &[], CARD);
    assert!(rec.ops.is_empty());
}

#[test]
fn icon_cache_survives_between_renders() {
    let mut r = AbilityRenderer::new(StyleConfig::default());
    let icons = FakeIcons::default();
    let measure = FixedMeasure::unit();
    let blocks = [AbilityBlock::new(AbilityKind::Immediate, "{fire} {fire} {1gem}")];
    for _ in 0..3 {
        let mut rec = Recorder::default();
        r.render(&mut rec, &measure, &icons, &blocks, CARD);
    }
    assert_eq!(r.cache().len(), 2);
    assert_eq!(icons.lookups.get(), 2);
}

#[test]
fn kind_icon_keeps_aspect() {
    let r = AbilityRenderer::new(StyleConfig::default());
    let icons = FakeIcons::default().with(IconKey::Keyword(Keyword::Immediate), 20, 10);
    let mut rec = Recorder::default();
    let blocks = [AbilityBlock::new(AbilityKind::Immediate, "")];
    r.render_kind_icons(&mut rec, &icons, &blocks, CARD);
    match &rec.ops[..] {
        [DrawOp::Image { dest, .. }] => {
            // Centre (95 + 13, 667.2 + 112.5), width 148, height 74.
            assert!(approx(dest.x + dest.w / 2.0, 108.0));
            assert!(approx(dest.y + dest.h / 2.0, 779.7));
            assert!(approx(dest.w, 148.0));
            assert!(approx(dest.h, 74.0));
        }
        other => panic!("unexpected ops: {other:?}"),
    }
}

#[test]
fn missing_kind_icon_draws_placeholder() {
    let r = AbilityRenderer::new(StyleConfig::default());
    let mut rec = Recorder::default();
    let blocks = [
        AbilityBlock::new(AbilityKind::Periodic, ""),
        AbilityBlock::new(AbilityKind::Continuous, ""),
    ];
    r.render_kind_icons(&mut rec, &FakeIcons::default(), &blocks, CARD);
    let rects = rec.panels();
    assert_eq!(rects.len(), 2);
    assert!(rects.iter().all(|r| approx(r.w, 148.0) && approx(r.h, 148.0)));
}

#[test]
fn set_style_updates_gem_scale() {
    let mut r = AbilityRenderer::new(StyleConfig::default());
    r.set_style(StyleConfig {
        icon_gem_mult: 0.5,
        ..StyleConfig::default()
    });
    assert_eq!(r.cache().gem_scale(), 0.5);
    assert_eq!(r.style().icon_gem_mult, 0.5);
}
