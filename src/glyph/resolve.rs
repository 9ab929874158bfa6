use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::{ClockError, ClockResult},
    glyph::id::GlyphId,
    glyph::tables::{
        self, COMMON_ONES, COMMON_TENS, DATE_COMMON_ONES, DATE_COMMON_TENS, DATE_FORMAL_ONES,
        FORMAL_ONES, FORMAL_TENS, lookup,
    },
    slot::kind::SlotKind,
};

/// Whether hours are shown on a 24- or 12-hour dial.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourFormat {
    /// 0–23.
    #[default]
    H24,
    /// 1–12; both midnight and noon show 12.
    H12,
}

/// Wall-clock time at minute granularity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeFields {
    /// 0–23.
    pub hour: u8,
    /// 0–59.
    pub minute: u8,
}

impl TimeFields {
    /// Validated constructor.
    pub fn new(hour: u8, minute: u8) -> ClockResult<Self> {
        let t = Self { hour, minute };
        t.validate()?;
        Ok(t)
    }

    /// Reject hours above 23 and minutes above 59.
    pub fn validate(self) -> ClockResult<()> {
        if self.hour > 23 {
            return Err(ClockError::invalid_input(format!(
                "hour {} out of range 0..=23",
                self.hour
            )));
        }
        if self.minute > 59 {
            return Err(ClockError::invalid_input(format!(
                "minute {} out of range 0..=59",
                self.minute
            )));
        }
        Ok(())
    }

    /// The hour as it appears on the dial.
    pub fn display_hour(self, format: HourFormat) -> u8 {
        match format {
            HourFormat::H24 => self.hour,
            HourFormat::H12 => match self.hour % 12 {
                0 => 12,
                h => h,
            },
        }
    }
}

/// Calendar date fields shown on the date row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateFields {
    /// 1–12.
    pub month: u8,
    /// 1–31, valid for `month`.
    pub day: u8,
    /// 0 = Sunday … 6 = Saturday.
    pub weekday: u8,
}

impl DateFields {
    /// Validated constructor.
    pub fn new(month: u8, day: u8, weekday: u8) -> ClockResult<Self> {
        let d = Self {
            month,
            day,
            weekday,
        };
        d.validate()?;
        Ok(d)
    }

    /// Reject months outside 1–12, days the month cannot have, and weekdays above 6.
    ///
    /// February accepts the 29th since no year is carried.
    pub fn validate(self) -> ClockResult<()> {
        let Some(max_day) = days_in_month(self.month) else {
            return Err(ClockError::invalid_input(format!(
                "month {} out of range 1..=12",
                self.month
            )));
        };
        if self.day == 0 || self.day > max_day {
            return Err(ClockError::invalid_input(format!(
                "day {} out of range 1..={max_day} for month {}",
                self.day, self.month
            )));
        }
        if self.weekday > 6 {
            return Err(ClockError::invalid_input(format!(
                "weekday {} out of range 0..=6",
                self.weekday
            )));
        }
        Ok(())
    }
}

fn days_in_month(month: u8) -> Option<u8> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => Some(29),
        _ => None,
    }
}

/// Glyphs for the four time slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeGlyphs {
    /// Hour tens slot.
    pub hour_tens: GlyphId,
    /// Hour ones slot.
    pub hour_ones: GlyphId,
    /// Minute tens slot.
    pub minute_tens: GlyphId,
    /// Minute ones slot.
    pub minute_ones: GlyphId,
}

impl TimeGlyphs {
    /// Target glyph per slot, in application order.
    pub fn assignments(self) -> [(SlotKind, GlyphId); 4] {
        [
            (SlotKind::HourTens, self.hour_tens),
            (SlotKind::HourOnes, self.hour_ones),
            (SlotKind::MinuteTens, self.minute_tens),
            (SlotKind::MinuteOnes, self.minute_ones),
        ]
    }
}

/// Glyphs for the five dynamic date slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateGlyphs {
    /// Month tens slot.
    pub month_tens: GlyphId,
    /// Month ones slot.
    pub month_ones: GlyphId,
    /// Day tens slot.
    pub day_tens: GlyphId,
    /// Day ones slot.
    pub day_ones: GlyphId,
    /// Weekday slot.
    pub weekday: GlyphId,
}

impl DateGlyphs {
    /// Target glyph per slot, in application order.
    pub fn assignments(self) -> [(SlotKind, GlyphId); 5] {
        [
            (SlotKind::MonthTens, self.month_tens),
            (SlotKind::MonthOnes, self.month_ones),
            (SlotKind::DayTens, self.day_tens),
            (SlotKind::DayOnes, self.day_ones),
            (SlotKind::Weekday, self.weekday),
        ]
    }
}

/// Resolve the time grid. Pure; out-of-range fields are an error.
pub fn resolve_time(time: TimeFields, format: HourFormat) -> ClockResult<TimeGlyphs> {
    time.validate()?;
    let (hour_tens, hour_ones) = resolve_hour(time.display_hour(format))?;
    let (minute_tens, minute_ones) = resolve_minute(time.minute)?;
    Ok(TimeGlyphs {
        hour_tens,
        hour_ones,
        minute_tens,
        minute_ones,
    })
}

/// Resolve the date row. Pure; out-of-range fields are an error.
pub fn resolve_date(date: DateFields) -> ClockResult<DateGlyphs> {
    date.validate()?;
    let (month_tens, month_ones) = resolve_month(date.month)?;
    let (day_tens, day_ones) = resolve_day(date.day)?;
    let weekday = resolve_weekday(date.weekday)?;
    Ok(DateGlyphs {
        month_tens,
        month_ones,
        day_tens,
        day_ones,
        weekday,
    })
}

fn resolve_hour(hour: u8) -> ClockResult<(GlyphId, GlyphId)> {
    let h = usize::from(hour);
    match hour {
        0 => Ok((GlyphId::BLANK, tables::FORMAL_0)),
        // 10 lands on FORMAL_ONES[0], which is already 拾.
        1..=10 => Ok((GlyphId::BLANK, lookup(&FORMAL_ONES, h % 10, "formal ones")?)),
        _ => Ok((
            lookup(&FORMAL_TENS, h / 10, "formal tens")?,
            lookup(&FORMAL_ONES, h % 10, "formal ones")?,
        )),
    }
}

fn resolve_minute(minute: u8) -> ClockResult<(GlyphId, GlyphId)> {
    let (d1, d2) = (usize::from(minute / 10), usize::from(minute % 10));
    match minute {
        0 => Ok((tables::POINT, tables::EXACT)),
        30 => Ok((tables::POINT, tables::HALF)),
        10 => Ok((
            lookup(&COMMON_ONES, 1, "common ones")?,
            lookup(&COMMON_TENS, 0, "common tens")?,
        )),
        _ if d2 != 0 => Ok((
            lookup(&COMMON_TENS, d1, "common tens")?,
            lookup(&COMMON_ONES, d2, "common ones")?,
        )),
        // 20, 40, 50: the ones register doubles as the multiplier.
        _ => Ok((
            lookup(&COMMON_ONES, d1, "common ones")?,
            lookup(&COMMON_ONES, 0, "common ones")?,
        )),
    }
}

fn resolve_month(month: u8) -> ClockResult<(GlyphId, GlyphId)> {
    let ones = lookup(&DATE_FORMAL_ONES, usize::from(month % 10), "date formal ones")?;
    let tens = if month > 10 {
        tables::DATE_FORMAL_10
    } else {
        GlyphId::BLANK
    };
    Ok((tens, ones))
}

fn resolve_day(day: u8) -> ClockResult<(GlyphId, GlyphId)> {
    let (d1, d2) = (usize::from(day / 10), usize::from(day % 10));
    if d1 == 0 {
        return Ok((
            GlyphId::BLANK,
            lookup(&DATE_COMMON_ONES, d2, "date common ones")?,
        ));
    }
    if d2 == 0 {
        return Ok((
            lookup(&DATE_COMMON_ONES, d1, "date common ones")?,
            GlyphId::BLANK,
        ));
    }
    Ok((
        lookup(&DATE_COMMON_TENS, d1, "date common tens")?,
        lookup(&DATE_COMMON_ONES, d2, "date common ones")?,
    ))
}

fn resolve_weekday(weekday: u8) -> ClockResult<GlyphId> {
    match weekday {
        0 => Ok(tables::SUNDAY),
        w => lookup(&DATE_COMMON_ONES, usize::from(w), "date common ones"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/resolve.rs"]
mod tests;
