use serde::{Deserialize, Serialize};

use crate::{assets::bitmap::Bitmap, foundation::core::Rgb8, slot::kind::ColorRole};

/// Placeholder for "this slot's accent color".
pub const ACCENT_MARKER: Rgb8 = Rgb8::new(0xFF, 0x00, 0xFF);
/// Placeholder for "the theme's ink color".
pub const INK_MARKER: Rgb8 = Rgb8::new(0x00, 0xFF, 0xFF);
/// Placeholder for "the theme's background".
pub const BACKGROUND_MARKER: Rgb8 = Rgb8::new(0x00, 0xFF, 0x00);

/// Concrete colors a theme paints with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Screen and glyph background.
    pub background: Rgb8,
    /// Neutral text.
    pub ink: Rgb8,
    /// Hour digits.
    pub hour_accent: Rgb8,
    /// Minute digits.
    pub minute_accent: Rgb8,
}

/// Built-in themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    /// White ink on black.
    #[default]
    Dark,
    /// Black ink on white.
    Light,
}

impl ThemePreset {
    /// The preset's colors.
    pub fn colors(self) -> ThemeColors {
        match self {
            Self::Dark => ThemeColors {
                background: Rgb8::BLACK,
                ink: Rgb8::WHITE,
                hour_accent: Rgb8::new(0xFF, 0xAA, 0x00),
                minute_accent: Rgb8::new(0x55, 0xFF, 0xFF),
            },
            Self::Light => ThemeColors {
                background: Rgb8::WHITE,
                ink: Rgb8::BLACK,
                hour_accent: Rgb8::new(0xAA, 0x00, 0x00),
                minute_accent: Rgb8::new(0x00, 0x00, 0xAA),
            },
        }
    }
}

/// Theme as configured: a preset name or explicit colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeConfig {
    /// `"dark"` / `"light"`.
    Preset(ThemePreset),
    /// `{ "background": "#000000", "ink": …, "hour_accent": …, "minute_accent": … }`.
    Custom(ThemeColors),
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::Preset(ThemePreset::default())
    }
}

impl ThemeConfig {
    /// Colors to paint with on a panel with or without color support.
    ///
    /// Monochrome panels cannot show accents; both fall back to ink.
    pub fn resolve(self, color_panel: bool) -> ThemeColors {
        let colors = match self {
            Self::Preset(p) => p.colors(),
            Self::Custom(c) => c,
        };
        if color_panel {
            colors
        } else {
            ThemeColors {
                hour_accent: colors.ink,
                minute_accent: colors.ink,
                ..colors
            }
        }
    }
}

/// Rewrite placeholder palette entries of `bitmap` for `role`.
///
/// Always starts from the bitmap's source palette, so calling it again with
/// the same or a different theme never compounds. Non-marker entries pass
/// through untouched.
pub fn colorize(bitmap: &mut Bitmap, role: ColorRole, colors: &ThemeColors) {
    let accent = match role {
        ColorRole::HourAccent => colors.hour_accent,
        ColorRole::MinuteAccent => colors.minute_accent,
        ColorRole::NeutralText => colors.ink,
    };
    let palette = bitmap.source_palette().map(|c| match c {
        ACCENT_MARKER => accent,
        INK_MARKER => colors.ink,
        BACKGROUND_MARKER => colors.background,
        other => other,
    });
    bitmap.set_palette(palette);
}

#[cfg(test)]
#[path = "../../tests/unit/theme/colorize.rs"]
mod tests;
