use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::Rect,
    foundation::error::{ClockError, ClockResult},
    slot::kind::SlotKind,
};

/// Screen capabilities and glyph metrics, resolved once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenProfile {
    /// Screen width in pixels.
    pub width: u32,
    /// Screen height in pixels.
    pub height: u32,
    /// Edge length of a square time glyph.
    pub time_glyph: u32,
    /// Edge length of a square date glyph.
    pub date_glyph: u32,
    /// Outer margin and gap of the time grid.
    pub margin: u32,
    /// Whether the panel shows color; monochrome panels collapse accents to ink.
    pub color: bool,
}

impl Default for ScreenProfile {
    fn default() -> Self {
        Self {
            width: 200,
            height: 228,
            time_glyph: 88,
            date_glyph: 22,
            margin: 8,
            color: true,
        }
    }
}

impl ScreenProfile {
    // f64 holds every u32 metric and their sums exactly; nothing can overflow.
    fn time_col(self, col: u32) -> f64 {
        let margin = f64::from(self.margin);
        margin + f64::from(col) * (f64::from(self.time_glyph) + margin)
    }

    fn time_row(self, row: u32) -> f64 {
        self.time_col(row)
    }

    fn date_row(self) -> f64 {
        (self.time_row(1) + f64::from(self.time_glyph) + f64::from(self.margin) - 1.0).max(0.0)
    }

    /// Date row order, left to right, with the gap that follows each slot.
    const DATE_ROW: [(SlotKind, u32); 8] = [
        (SlotKind::MonthTens, 1),
        (SlotKind::MonthOnes, 1),
        (SlotKind::MonthLabel, 1),
        (SlotKind::DayTens, 1),
        (SlotKind::DayOnes, 1),
        (SlotKind::DayLabel, 2),
        (SlotKind::WeekLabel, 1),
        (SlotKind::Weekday, 0),
    ];

    /// Home frame of a slot in screen coordinates.
    pub fn slot_frame(self, kind: SlotKind) -> Rect {
        let square = |x: f64, y: f64, edge: u32| {
            let edge = f64::from(edge);
            Rect::new(x, y, x + edge, y + edge)
        };

        match kind {
            SlotKind::HourTens => square(self.time_col(0), self.time_row(0), self.time_glyph),
            SlotKind::HourOnes => square(self.time_col(1), self.time_row(0), self.time_glyph),
            SlotKind::MinuteTens => square(self.time_col(0), self.time_row(1), self.time_glyph),
            SlotKind::MinuteOnes => square(self.time_col(1), self.time_row(1), self.time_glyph),
            _ => {
                let mut x = f64::from(self.margin);
                for (slot, gap) in Self::DATE_ROW {
                    if slot == kind {
                        break;
                    }
                    x += f64::from(self.date_glyph) + f64::from(gap);
                }
                square(x, self.date_row(), self.date_glyph)
            }
        }
    }

    /// Reject zero-sized glyphs and layouts that spill off the screen.
    pub fn validate(self) -> ClockResult<()> {
        if self.time_glyph == 0 || self.date_glyph == 0 {
            return Err(ClockError::config("glyph sizes must be > 0"));
        }
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        for kind in SlotKind::ALL {
            let r = self.slot_frame(kind);
            if r.x1 > w || r.y1 > h {
                return Err(ClockError::config(format!(
                    "{kind:?} frame {r:?} exceeds {}x{} screen",
                    self.width, self.height
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slot/layout.rs"]
mod tests;
