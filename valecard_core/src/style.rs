//! Card style: every layout constant expressed as a fraction of card size.

use serde::{Deserialize, Serialize};

use crate::surface::Color;

/// Layout and color parameters for card rendering.
///
/// Fractions ending in `_frac` are relative to the card width or height
/// (noted per field) unless they describe padding, which is relative to the
/// ability window itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Card width / height (63 x 88 mm poker size).
    pub card_aspect: f32,
    pub card_corner_radius: f32,

    pub name_size_frac: f32,
    pub name_color: Color,
    pub name_x_frac: f32,
    pub name_y_frac: f32,

    /// Ability font size, fraction of card height.
    pub ability_text_size_frac: f32,
    pub ability_text_color: Color,

    pub creature_center_x_frac: f32,
    pub creature_center_y_frac: f32,
    pub creature_w_frac: f32,
    pub creature_h_frac: f32,

    // Single ability window.
    pub ability1_x_frac: f32,
    pub ability1_y_frac: f32,
    pub ability1_w_frac: f32,
    pub ability1_h_frac: f32,

    // Two stacked windows share this total area.
    pub ability2_total_x_frac: f32,
    pub ability2_total_y_frac: f32,
    pub ability2_total_w_frac: f32,
    pub ability2_total_h_frac: f32,
    pub ability2_gap_y_frac: f32,

    pub window_fill: Color,
    pub window_stroke: Color,
    /// Fraction of card width.
    pub window_stroke_weight_frac: f32,
    /// Fraction of card width.
    pub window_corner_frac: f32,

    /// Kind marker width, fraction of card width.
    pub kind_icon_width_frac: f32,
    /// Kind marker centre offset from the window's left edge, fraction of card width.
    pub kind_icon_offset_x_frac: f32,

    /// Fraction of window width.
    pub padding_x_frac: f32,
    /// Fraction of window height.
    pub padding_y_frac: f32,
    /// Extra left indent of the text area, fraction of window width.
    pub text_start_x_frac: f32,

    pub line_spacing_mult: f32,
    /// Fraction of card height.
    pub line_spacing_extra_frac: f32,
    /// Downward baseline nudge, fraction of window height.
    pub baseline_shift_frac: f32,

    /// Inline icon height, fraction of card height.
    pub icon_height_frac: f32,
    /// Height multiplier for the 1/3/6 gem icons.
    pub icon_gem_mult: f32,
    /// Gap after each inline icon, fraction of card width.
    pub icon_extra_gap_frac: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            card_aspect: 63.0 / 88.0,
            card_corner_radius: 18.0,

            name_size_frac: 0.065,
            name_color: Color::rgb(254, 238, 221),
            name_x_frac: 0.5,
            name_y_frac: 0.65,

            ability_text_size_frac: 0.031,
            ability_text_color: Color::BLACK,

            creature_center_x_frac: 0.50,
            creature_center_y_frac: 0.46,
            creature_w_frac: 0.90,
            creature_h_frac: 0.70,

            ability1_x_frac: 0.095,
            ability1_y_frac: 0.6672,
            ability1_w_frac: 0.90,
            ability1_h_frac: 0.225,

            ability2_total_x_frac: 0.095,
            ability2_total_y_frac: 0.6672,
            ability2_total_w_frac: 0.90,
            ability2_total_h_frac: 0.225,
            ability2_gap_y_frac: 0.01,

            window_fill: Color::rgba(254, 238, 221, 170),
            window_stroke: Color::gray(255, 0),
            window_stroke_weight_frac: 0.003,
            window_corner_frac: 0.04,

            kind_icon_width_frac: 0.148,
            kind_icon_offset_x_frac: 0.013,

            padding_x_frac: 0.05,
            padding_y_frac: 0.12,
            text_start_x_frac: 0.06,

            line_spacing_mult: 1.1,
            line_spacing_extra_frac: 0.0,
            baseline_shift_frac: 0.05,

            icon_height_frac: 0.068,
            icon_gem_mult: 0.9,
            icon_extra_gap_frac: 0.0,
        }
    }
}
