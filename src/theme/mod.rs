mod palette;

pub use palette::{
    ACCENT_MARKER, BACKGROUND_MARKER, INK_MARKER, ThemeColors, ThemeConfig, ThemePreset, colorize,
};
