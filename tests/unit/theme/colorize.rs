use super::*;
use serde_json::json;

fn glyph(set_color: Rgb8) -> Bitmap {
    Bitmap::from_fn(4, 4, [BACKGROUND_MARKER, set_color], |x, y| x == y)
}

#[test]
fn accent_marker_follows_role() {
    let colors = ThemePreset::Dark.colors();

    let mut hour = glyph(ACCENT_MARKER);
    colorize(&mut hour, ColorRole::HourAccent, &colors);
    assert_eq!(hour.palette(), [colors.background, colors.hour_accent]);

    let mut minute = glyph(ACCENT_MARKER);
    colorize(&mut minute, ColorRole::MinuteAccent, &colors);
    assert_eq!(minute.palette()[1], colors.minute_accent);

    let mut label = glyph(ACCENT_MARKER);
    colorize(&mut label, ColorRole::NeutralText, &colors);
    assert_eq!(label.palette()[1], colors.ink);
}

#[test]
fn ink_marker_is_ink_for_every_role() {
    let colors = ThemePreset::Light.colors();
    for role in [
        ColorRole::HourAccent,
        ColorRole::MinuteAccent,
        ColorRole::NeutralText,
    ] {
        let mut g = glyph(INK_MARKER);
        colorize(&mut g, role, &colors);
        assert_eq!(g.palette(), [colors.background, colors.ink]);
    }
}

#[test]
fn unrecognized_entries_are_untouched() {
    let odd = Rgb8::new(1, 2, 3);
    let mut g = Bitmap::new(2, 2, [odd, odd]);
    colorize(&mut g, ColorRole::HourAccent, &ThemePreset::Dark.colors());
    assert_eq!(g.palette(), [odd, odd]);
}

#[test]
fn repeated_and_switched_themes_do_not_compound() {
    let dark = ThemePreset::Dark.colors();
    let light = ThemePreset::Light.colors();
    let mut g = glyph(ACCENT_MARKER);

    colorize(&mut g, ColorRole::HourAccent, &dark);
    let once = g.clone();
    colorize(&mut g, ColorRole::HourAccent, &dark);
    assert_eq!(g, once);

    colorize(&mut g, ColorRole::HourAccent, &light);
    assert_eq!(g.palette(), [light.background, light.hour_accent]);
    assert_eq!(g.source_palette(), [BACKGROUND_MARKER, ACCENT_MARKER]);
}

#[test]
fn monochrome_collapses_accents_to_ink() {
    let theme = ThemeConfig::Preset(ThemePreset::Dark);
    let mono = theme.resolve(false);
    assert_eq!(mono.hour_accent, mono.ink);
    assert_eq!(mono.minute_accent, mono.ink);
    assert_eq!(theme.resolve(true), ThemePreset::Dark.colors());
}

#[test]
fn theme_config_accepts_preset_or_colors() {
    let t: ThemeConfig = serde_json::from_value(json!("light")).unwrap();
    assert_eq!(t, ThemeConfig::Preset(ThemePreset::Light));

    let t: ThemeConfig = serde_json::from_value(json!({
        "background": "#000000",
        "ink": "#ffffff",
        "hour_accent": "#ff0000",
        "minute_accent": "#00ff00",
    }))
    .unwrap();
    assert_eq!(t.resolve(true).hour_accent, Rgb8::new(255, 0, 0));

    assert!(serde_json::from_value::<ThemeConfig>(json!("sepia")).is_err());
}
