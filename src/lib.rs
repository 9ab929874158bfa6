//! Ideoclock is the core of an ideogram clock face.
//!
//! The time is shown as four large Chinese numeral glyphs in a 2x2 grid and
//! the date as a row of small glyphs. This crate owns everything between a
//! clock notification and the pixels of each glyph slot:
//!
//! - Resolve hours, minutes and dates into glyph ids ([`resolve_time`], [`resolve_date`])
//! - Animate each slot from its old glyph to its new one (slide or pixel dissolve)
//! - Recolor glyph palettes for the active theme
//!
//! The platform supplies glyph images through [`GlyphSource`] and animation,
//! timers and redraws through [`Host`]. [`ClockFace`] ties it together.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod foundation;
mod glyph;
mod slot;

/// Capabilities borrowed from the platform.
pub mod host;
/// Theme colors and palette recoloring.
pub mod theme;

mod config;
mod face;

pub use crate::foundation::core::{Point, Rect, Rgb8, Size, Vec2};
pub use crate::foundation::error::{ClockError, ClockResult};

pub use crate::glyph::id::GlyphId;
pub use crate::glyph::resolve::{
    DateFields, DateGlyphs, HourFormat, TimeFields, TimeGlyphs, resolve_date, resolve_time,
};
pub use crate::glyph::tables;

pub use crate::slot::display::{DisplaySlot, SlotRegistry};
pub use crate::slot::kind::{ColorRole, SlotKind};
pub use crate::slot::layout::ScreenProfile;

pub use crate::assets::bitmap::{Bitmap, PALETTE_CLEAR, PALETTE_SET};
pub use crate::assets::source::{DirGlyphSource, GlyphSource, MemoryGlyphSource, decode_glyph};

pub use crate::animation::animator::{SLIDE_IN, SLIDE_OUT, TransitionAnimator};
pub use crate::animation::dissolve::{
    DISSOLVE_INTERVAL, DISSOLVE_STEPS, Dissolve, DissolvePattern, blend_step,
};
pub use crate::animation::ease::Ease;
pub use crate::animation::scheduler::FrameScheduler;
pub use crate::animation::state::{
    AnimationState, CompletionStep, Phase, Start, TransitionStyle, plan_completion, plan_start,
};

pub use crate::host::{AnimationHandle, Completion, GeometricAnimation, Host, TimerHandle};
pub use crate::theme::{ThemeColors, ThemeConfig, ThemePreset, colorize};

pub use crate::config::FaceConfig;
pub use crate::face::{ClockFace, TickUnits};

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
mod test_support;
