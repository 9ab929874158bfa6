#![allow(dead_code)]

use std::{collections::HashSet, sync::Once, time::Duration};

use ideoclock::{
    AnimationHandle, Bitmap, ClockError, ClockFace, ClockResult, Completion, GeometricAnimation,
    GlyphId, GlyphSource, Host, Rect, TimerHandle, theme,
};

pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Synchronous host: animations and timers only move when the test says so.
#[derive(Debug, Default)]
pub struct MockHost {
    next_id: u64,
    pub running: Vec<(AnimationHandle, GeometricAnimation)>,
    pub started: usize,
    pub cancelled: usize,
    pub timers: Vec<TimerHandle>,
    pub timers_scheduled: usize,
    pub dirty: usize,
    pub refuse_animations: bool,
    pub refuse_timers: bool,
}

impl MockHost {
    pub fn take_completions(&mut self) -> Vec<Completion> {
        self.running.drain(..).map(|(_, a)| a.completion).collect()
    }

    /// Whether a timer was pending; it is consumed.
    pub fn fire_timer(&mut self) -> bool {
        let fired = !self.timers.is_empty();
        self.timers.clear();
        fired
    }
}

impl Host for MockHost {
    fn start_animation(&mut self, animation: GeometricAnimation) -> ClockResult<AnimationHandle> {
        if self.refuse_animations {
            return Err(ClockError::animation_unavailable("mock host refused"));
        }
        self.next_id += 1;
        let handle = AnimationHandle(self.next_id);
        self.running.push((handle, animation));
        self.started += 1;
        Ok(handle)
    }

    fn cancel_animation(&mut self, handle: AnimationHandle) {
        self.running.retain(|(h, _)| *h != handle);
        self.cancelled += 1;
    }

    fn schedule_timer(&mut self, _delay: Duration) -> ClockResult<TimerHandle> {
        if self.refuse_timers {
            return Err(ClockError::animation_unavailable("mock host has no timers"));
        }
        assert!(self.timers.is_empty(), "second timer while one is pending");
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.timers.push(handle);
        self.timers_scheduled += 1;
        Ok(handle)
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        self.timers.retain(|h| *h != handle);
    }

    fn mark_dirty(&mut self, _region: Rect) {
        self.dirty += 1;
    }
}

/// Draws a distinct pattern per glyph with marker colors; counts loads.
#[derive(Debug, Default)]
pub struct MockSource {
    pub loads: usize,
    pub failing: HashSet<GlyphId>,
}

impl MockSource {
    pub fn image_for(glyph: GlyphId) -> Bitmap {
        let seed = u32::from(glyph.raw());
        Bitmap::from_fn(
            22,
            22,
            [theme::BACKGROUND_MARKER, theme::INK_MARKER],
            |x, y| (x * 7 + y * 3 + seed) % 5 < 2,
        )
    }
}

impl GlyphSource for MockSource {
    fn load(&mut self, glyph: GlyphId) -> ClockResult<Bitmap> {
        self.loads += 1;
        if self.failing.contains(&glyph) {
            return Err(ClockError::resource_load(format!("{glyph:?} missing")));
        }
        Ok(Self::image_for(glyph))
    }
}

pub type Face = ClockFace<MockSource, MockHost>;

/// Deliver completions and fire timers until nothing is in flight.
pub fn settle<S: GlyphSource>(face: &mut ClockFace<S, MockHost>) {
    for _ in 0..1000 {
        let completions = face.host_mut().take_completions();
        let fired = face.host_mut().fire_timer();
        if completions.is_empty() && !fired {
            return;
        }
        for c in completions {
            face.animation_finished(c);
        }
        if fired {
            face.tick();
        }
    }
    panic!("face never settled");
}
