use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::{
    animation::{
        dissolve::{Dissolve, DissolvePattern},
        ease::Ease,
        scheduler::FrameScheduler,
        state::{AnimationState, CompletionStep, Start, TransitionStyle, plan_completion, plan_start},
    },
    assets::{bitmap::Bitmap, source::GlyphSource},
    glyph::id::GlyphId,
    host::{Completion, GeometricAnimation, Host},
    slot::display::DisplaySlot,
    theme::{ThemeColors, colorize},
};

/// Duration of the slide-out phase.
pub const SLIDE_OUT: Duration = Duration::from_millis(200);
/// Duration of the slide-in phase.
pub const SLIDE_IN: Duration = Duration::from_millis(200);

/// Drives one slot at a time through its transitions.
///
/// Holds only settings; all per-slot state lives in [`DisplaySlot`].
#[derive(Clone, Debug)]
pub struct TransitionAnimator {
    pattern: DissolvePattern,
    colors: ThemeColors,
}

impl TransitionAnimator {
    /// Animator painting loaded glyphs with `colors`.
    pub fn new(pattern: DissolvePattern, colors: ThemeColors) -> Self {
        Self { pattern, colors }
    }

    /// Colors applied to freshly loaded glyphs.
    pub fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    pub(crate) fn set_colors(&mut self, colors: ThemeColors) {
        self.colors = colors;
    }

    /// Request that `slot` show `target`.
    ///
    /// Any in-flight transition is cancelled first, settling the slot at its
    /// current glyph. Returns `false` when neither a cancellation nor a new
    /// transition happened.
    pub fn update<S, H>(
        &self,
        slot: &mut DisplaySlot,
        target: GlyphId,
        style: TransitionStyle,
        source: &mut S,
        host: &mut H,
        scheduler: &mut FrameScheduler,
    ) -> bool
    where
        S: GlyphSource + ?Sized,
        H: Host + ?Sized,
    {
        if slot.retired {
            return false;
        }
        let heading_to = match &slot.state {
            AnimationState::Idle => None,
            AnimationState::GeometricOut { target, .. } => Some(*target),
            AnimationState::GeometricIn { .. } => Some(slot.glyph),
            AnimationState::DissolveRunning(d) => Some(d.target()),
        };
        if heading_to == Some(target) {
            trace!(slot = ?slot.kind, ?target, "already heading to target");
            return false;
        }
        let cancelled = slot.state.is_active();
        if cancelled {
            cancel(slot, host, scheduler);
        }

        let start = plan_start(slot.glyph, slot.image.is_some(), target, style);
        debug!(slot = ?slot.kind, from = ?slot.glyph, to = ?target, ?start, "slot update");
        match start {
            Start::Nothing => return cancelled,
            Start::Swap => self.swap(slot, target, source, host),
            Start::SlideIn => self.slide_in(slot, target, source, host),
            Start::SlideOut => self.slide_out(slot, target, source, host),
            Start::Dissolve => self.dissolve(slot, target, source, host, scheduler),
        }
        true
    }

    /// Handle a geometric completion token. Returns `false` for stale tokens.
    pub fn complete<S, H>(
        &self,
        slot: &mut DisplaySlot,
        completion: Completion,
        source: &mut S,
        host: &mut H,
    ) -> bool
    where
        S: GlyphSource + ?Sized,
        H: Host + ?Sized,
    {
        match plan_completion(slot.state.phase(), completion.generation, slot.generation) {
            CompletionStep::Stale => {
                debug!(
                    slot = ?slot.kind,
                    token = completion.generation,
                    current = slot.generation,
                    "ignoring stale completion"
                );
                false
            }
            CompletionStep::BeginIn => {
                let AnimationState::GeometricOut { target, .. } =
                    std::mem::take(&mut slot.state)
                else {
                    return false;
                };
                // The old pixels are off screen; release them before loading.
                slot.image = None;
                self.slide_in(slot, target, source, host);
                true
            }
            CompletionStep::Settle => {
                slot.state = AnimationState::Idle;
                slot.frame = slot.home;
                host.mark_dirty(slot.home);
                debug!(slot = ?slot.kind, glyph = ?slot.glyph, "slot settled");
                true
            }
        }
    }

    /// Re-apply theme colors to everything the slot holds.
    pub fn recolor(&self, slot: &mut DisplaySlot) {
        let role = slot.kind.role();
        if let Some(image) = slot.image.as_mut() {
            colorize(image, role, &self.colors);
        }
        if let AnimationState::DissolveRunning(d) = &mut slot.state {
            d.recolor(role, &self.colors);
        }
    }

    pub(crate) fn load<S>(&self, slot: &DisplaySlot, glyph: GlyphId, source: &mut S) -> Option<Bitmap>
    where
        S: GlyphSource + ?Sized,
    {
        if glyph.is_blank() {
            return None;
        }
        match source.load(glyph) {
            Ok(mut image) => {
                colorize(&mut image, slot.kind.role(), &self.colors);
                Some(image)
            }
            Err(err) => {
                warn!(slot = ?slot.kind, ?glyph, %err, "glyph failed to load; slot shows blank");
                None
            }
        }
    }

    pub(crate) fn swap<S, H>(&self, slot: &mut DisplaySlot, target: GlyphId, source: &mut S, host: &mut H)
    where
        S: GlyphSource + ?Sized,
        H: Host + ?Sized,
    {
        slot.image = None;
        slot.image = self.load(slot, target, source);
        slot.glyph = target;
        slot.frame = slot.home;
        slot.state = AnimationState::Idle;
        host.mark_dirty(slot.home);
    }

    fn slide_in<S, H>(&self, slot: &mut DisplaySlot, target: GlyphId, source: &mut S, host: &mut H)
    where
        S: GlyphSource + ?Sized,
        H: Host + ?Sized,
    {
        slot.image = self.load(slot, target, source);
        slot.glyph = target;
        if slot.image.is_none() {
            slot.frame = slot.home;
            slot.state = AnimationState::Idle;
            host.mark_dirty(slot.home);
            return;
        }

        let generation = slot.bump_generation();
        slot.frame = slot.entry_frame();
        let request = GeometricAnimation {
            from: slot.entry_frame(),
            to: slot.home,
            duration: SLIDE_IN,
            ease: Ease::EaseOut,
            completion: Completion {
                slot: slot.kind,
                generation,
            },
        };
        match host.start_animation(request) {
            Ok(handle) => slot.state = AnimationState::GeometricIn { handle },
            Err(err) => {
                warn!(slot = ?slot.kind, %err, "slide-in unavailable; showing glyph in place");
                slot.frame = slot.home;
                slot.state = AnimationState::Idle;
            }
        }
        host.mark_dirty(slot.home);
    }

    fn slide_out<S, H>(&self, slot: &mut DisplaySlot, target: GlyphId, source: &mut S, host: &mut H)
    where
        S: GlyphSource + ?Sized,
        H: Host + ?Sized,
    {
        let generation = slot.bump_generation();
        let request = GeometricAnimation {
            from: slot.home,
            to: slot.exit_frame(),
            duration: SLIDE_OUT,
            ease: Ease::EaseIn,
            completion: Completion {
                slot: slot.kind,
                generation,
            },
        };
        match host.start_animation(request) {
            Ok(handle) => slot.state = AnimationState::GeometricOut { target, handle },
            Err(err) => {
                warn!(slot = ?slot.kind, %err, "slide-out unavailable; swapping instantly");
                self.swap(slot, target, source, host);
            }
        }
    }

    fn dissolve<S, H>(
        &self,
        slot: &mut DisplaySlot,
        target: GlyphId,
        source: &mut S,
        host: &mut H,
        scheduler: &mut FrameScheduler,
    ) where
        S: GlyphSource + ?Sized,
        H: Host + ?Sized,
    {
        let to = self.load(slot, target, source);
        let from = slot.image.take();
        let generation = slot.bump_generation();
        let seed = generation ^ ((slot.kind.index() as u64) << 32);

        let dissolve = match Dissolve::new(from, to, target, self.pattern, seed) {
            Ok(d) => d,
            Err((_, to)) => {
                debug!(slot = ?slot.kind, "nothing to dissolve; swapping instantly");
                settle_at(slot, target, to, host);
                return;
            }
        };

        slot.image = Some(dissolve.initial_frame());
        slot.state = AnimationState::DissolveRunning(Box::new(dissolve));
        if let Err(err) = scheduler.register(slot.kind, host) {
            warn!(slot = ?slot.kind, %err, "no frame timer; finishing dissolve at once");
            scheduler.forget(slot.kind, host);
            if let AnimationState::DissolveRunning(d) = std::mem::take(&mut slot.state) {
                settle_at(slot, target, d.into_target(), host);
            }
        }
    }
}

fn settle_at<H>(slot: &mut DisplaySlot, target: GlyphId, image: Option<Bitmap>, host: &mut H)
where
    H: Host + ?Sized,
{
    slot.image = image;
    slot.glyph = target;
    slot.frame = slot.home;
    slot.state = AnimationState::Idle;
    host.mark_dirty(slot.home);
}

/// Cancel whatever `slot` has in flight and settle it at its current glyph.
///
/// Bumps the generation so that a completion already queued by the host is
/// recognised as stale. Host resources are released before returning.
pub fn cancel<H>(slot: &mut DisplaySlot, host: &mut H, scheduler: &mut FrameScheduler)
where
    H: Host + ?Sized,
{
    slot.bump_generation();
    match std::mem::take(&mut slot.state) {
        AnimationState::Idle => return,
        AnimationState::GeometricOut { handle, .. } | AnimationState::GeometricIn { handle } => {
            host.cancel_animation(handle);
        }
        AnimationState::DissolveRunning(d) => {
            scheduler.forget(slot.kind, host);
            slot.image = d.into_source();
        }
    }
    slot.frame = slot.home;
    host.mark_dirty(slot.home);
    debug!(slot = ?slot.kind, glyph = ?slot.glyph, "transition cancelled");
}

/// Cancel anything in flight and release the slot's pixels. Safe to call
/// in any state and more than once.
pub fn teardown<H>(slot: &mut DisplaySlot, host: &mut H, scheduler: &mut FrameScheduler)
where
    H: Host + ?Sized,
{
    if slot.retired {
        return;
    }
    cancel(slot, host, scheduler);
    slot.image = None;
    slot.retired = true;
}

/// Step a dissolving slot once. Returns `true` when the slot is no longer
/// dissolving, including when it never was.
pub fn advance_dissolve<H>(slot: &mut DisplaySlot, host: &mut H) -> bool
where
    H: Host + ?Sized,
{
    let AnimationState::DissolveRunning(d) = &mut slot.state else {
        return true;
    };
    let live = slot.image.get_or_insert_with(|| d.initial_frame());

    let finished = match d.advance(live) {
        Ok(finished) => finished,
        Err(err) => {
            warn!(slot = ?slot.kind, %err, "dissolve step failed; finishing at once");
            true
        }
    };
    host.mark_dirty(slot.home);
    trace!(slot = ?slot.kind, step = d.step(), "dissolve step");

    if finished && let AnimationState::DissolveRunning(d) = std::mem::take(&mut slot.state) {
        let target = d.target();
        let image = d.into_target();
        settle_at(slot, target, image, host);
        debug!(slot = ?slot.kind, glyph = ?target, "dissolve finished");
    }
    finished
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
