//! Capabilities the clock face borrows from its host.
//!
//! The host owns the screen, the animation primitive and the timer wheel.
//! It never calls back into the face while one of these methods is running;
//! finished animations and fired timers are reported later through
//! [`ClockFace::animation_finished`](crate::ClockFace::animation_finished) and
//! [`ClockFace::tick`](crate::ClockFace::tick).

use std::time::Duration;

use crate::{
    animation::ease::Ease,
    foundation::{core::Rect, error::ClockResult},
    slot::kind::SlotKind,
};

/// Host-side id of a running geometric animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationHandle(pub u64);

/// Host-side id of a pending one-shot timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Token returned to the face when a geometric animation finishes.
///
/// Carries the slot generation at the time the animation was started; a
/// token whose generation no longer matches is stale and ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Completion {
    /// Slot the animation moved.
    pub slot: SlotKind,
    /// Slot generation when the animation was armed.
    pub generation: u64,
}

/// A request to move a slot's layer from one frame to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometricAnimation {
    /// Frame at t = 0.
    pub from: Rect,
    /// Frame at t = 1.
    pub to: Rect,
    /// Total duration.
    pub duration: Duration,
    /// Easing curve.
    pub ease: Ease,
    /// Token to hand back on completion.
    pub completion: Completion,
}

impl GeometricAnimation {
    /// Frame the layer should occupy `elapsed` after the animation started.
    ///
    /// Progress is `elapsed / duration` shaped by [`Ease::apply`]; a zero
    /// duration jumps straight to `to`.
    pub fn frame_at(&self, elapsed: Duration) -> Rect {
        let t = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f64() / self.duration.as_secs_f64()
        };
        let k = self.ease.apply(t);
        let lerp = |a: f64, b: f64| a + (b - a) * k;
        Rect::new(
            lerp(self.from.x0, self.to.x0),
            lerp(self.from.y0, self.to.y0),
            lerp(self.from.x1, self.to.x1),
            lerp(self.from.y1, self.to.y1),
        )
    }
}

/// Platform services used by the animator and frame scheduler.
pub trait Host {
    /// Start a geometric animation. An error means the primitive could not be
    /// allocated; the face then swaps instantly.
    fn start_animation(&mut self, animation: GeometricAnimation) -> ClockResult<AnimationHandle>;

    /// Cancel a running animation. Its completion must not be delivered afterwards,
    /// though a completion already queued is tolerated.
    fn cancel_animation(&mut self, handle: AnimationHandle);

    /// Arrange for [`ClockFace::tick`](crate::ClockFace::tick) to be called once after `delay`.
    fn schedule_timer(&mut self, delay: Duration) -> ClockResult<TimerHandle>;

    /// Cancel a pending timer.
    fn cancel_timer(&mut self, handle: TimerHandle);

    /// Request a redraw of `region`.
    fn mark_dirty(&mut self, region: Rect);
}

impl<H: Host + ?Sized> Host for &mut H {
    fn start_animation(&mut self, animation: GeometricAnimation) -> ClockResult<AnimationHandle> {
        (**self).start_animation(animation)
    }

    fn cancel_animation(&mut self, handle: AnimationHandle) {
        (**self).cancel_animation(handle);
    }

    fn schedule_timer(&mut self, delay: Duration) -> ClockResult<TimerHandle> {
        (**self).schedule_timer(delay)
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        (**self).cancel_timer(handle);
    }

    fn mark_dirty(&mut self, region: Rect) {
        (**self).mark_dirty(region);
    }
}

#[cfg(test)]
#[path = "../tests/unit/host.rs"]
mod tests;
