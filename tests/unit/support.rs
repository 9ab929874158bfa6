//! Recording host and counting glyph source shared by unit tests.

use std::{collections::HashSet, time::Duration};

use crate::{
    assets::{bitmap::Bitmap, source::GlyphSource},
    foundation::{
        core::Rect,
        error::{ClockError, ClockResult},
    },
    glyph::id::GlyphId,
    host::{AnimationHandle, Completion, GeometricAnimation, Host, TimerHandle},
    theme::{BACKGROUND_MARKER, INK_MARKER},
};

#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    next_id: u64,
    pub running: Vec<(AnimationHandle, GeometricAnimation)>,
    pub started: Vec<GeometricAnimation>,
    pub cancelled: Vec<AnimationHandle>,
    pub timers: Vec<(TimerHandle, Duration)>,
    pub timers_scheduled: usize,
    pub dirty: Vec<Rect>,
    pub refuse_animations: bool,
    pub refuse_timers: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish every running animation and hand back their tokens.
    pub fn finish_all(&mut self) -> Vec<Completion> {
        self.running.drain(..).map(|(_, a)| a.completion).collect()
    }
}

impl Host for RecordingHost {
    fn start_animation(&mut self, animation: GeometricAnimation) -> ClockResult<AnimationHandle> {
        if self.refuse_animations {
            return Err(ClockError::animation_unavailable("refused"));
        }
        self.next_id += 1;
        let handle = AnimationHandle(self.next_id);
        self.running.push((handle, animation));
        self.started.push(animation);
        Ok(handle)
    }

    fn cancel_animation(&mut self, handle: AnimationHandle) {
        self.running.retain(|(h, _)| *h != handle);
        self.cancelled.push(handle);
    }

    fn schedule_timer(&mut self, delay: Duration) -> ClockResult<TimerHandle> {
        if self.refuse_timers {
            return Err(ClockError::animation_unavailable("no timers"));
        }
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.timers.push((handle, delay));
        self.timers_scheduled += 1;
        Ok(handle)
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        self.timers.retain(|(h, _)| *h != handle);
    }

    fn mark_dirty(&mut self, region: Rect) {
        self.dirty.push(region);
    }
}

/// Generates a distinct 8x8 pattern per glyph and counts loads.
#[derive(Debug, Default)]
pub(crate) struct CountingSource {
    pub loads: usize,
    pub failing: HashSet<GlyphId>,
}

impl CountingSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image_for(glyph: GlyphId) -> Bitmap {
        let seed = u32::from(glyph.raw());
        Bitmap::from_fn(8, 8, [BACKGROUND_MARKER, INK_MARKER], |x, y| {
            (x * 3 + y * 5 + seed) % 4 == 0
        })
    }
}

impl GlyphSource for CountingSource {
    fn load(&mut self, glyph: GlyphId) -> ClockResult<Bitmap> {
        self.loads += 1;
        if self.failing.contains(&glyph) {
            return Err(ClockError::resource_load(format!("{glyph:?} missing")));
        }
        Ok(Self::image_for(glyph))
    }
}
