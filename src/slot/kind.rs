use serde::{Deserialize, Serialize};

use crate::glyph::{id::GlyphId, tables};

/// Every screen position that holds a glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    /// Hour tens (time grid, top left).
    HourTens,
    /// Hour ones (time grid, top right).
    HourOnes,
    /// Minute tens (time grid, bottom left).
    MinuteTens,
    /// Minute ones (time grid, bottom right).
    MinuteOnes,
    /// Month tens (date row).
    MonthTens,
    /// Month ones (date row).
    MonthOnes,
    /// Day tens (date row).
    DayTens,
    /// Day ones (date row).
    DayOnes,
    /// Weekday (date row, last).
    Weekday,
    /// Fixed 月 label.
    MonthLabel,
    /// Fixed 日 label.
    DayLabel,
    /// Fixed 週 label.
    WeekLabel,
}

/// How a slot's glyph placeholders are recolored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Accent color of the hour digits.
    HourAccent,
    /// Accent color of the minute digits.
    MinuteAccent,
    /// Plain ink.
    NeutralText,
}

impl SlotKind {
    /// Number of slots.
    pub const COUNT: usize = 12;

    /// All slots in registry order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::HourTens,
        Self::HourOnes,
        Self::MinuteTens,
        Self::MinuteOnes,
        Self::MonthTens,
        Self::MonthOnes,
        Self::DayTens,
        Self::DayOnes,
        Self::Weekday,
        Self::MonthLabel,
        Self::DayLabel,
        Self::WeekLabel,
    ];

    /// Registry index.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The fixed glyph of a label slot; `None` for dynamic slots.
    pub const fn label_glyph(self) -> Option<GlyphId> {
        match self {
            Self::MonthLabel => Some(tables::LABEL_MONTH),
            Self::DayLabel => Some(tables::LABEL_DAY),
            Self::WeekLabel => Some(tables::LABEL_WEEK),
            _ => None,
        }
    }

    /// Whether the slot's glyph never changes after construction.
    pub const fn is_label(self) -> bool {
        self.label_glyph().is_some()
    }

    /// Whether the slot sits in the large time grid.
    pub const fn is_time(self) -> bool {
        matches!(
            self,
            Self::HourTens | Self::HourOnes | Self::MinuteTens | Self::MinuteOnes
        )
    }

    /// Recolor role.
    pub const fn role(self) -> ColorRole {
        match self {
            Self::HourTens | Self::HourOnes => ColorRole::HourAccent,
            Self::MinuteTens | Self::MinuteOnes => ColorRole::MinuteAccent,
            _ => ColorRole::NeutralText,
        }
    }
}
