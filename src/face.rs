//! The host-facing clock face.

use tracing::debug;

use crate::{
    animation::{
        animator::{self, TransitionAnimator},
        scheduler::FrameScheduler,
        state::TransitionStyle,
    },
    assets::source::GlyphSource,
    config::FaceConfig,
    foundation::{
        core::Rect,
        error::{ClockError, ClockResult},
    },
    glyph::{
        id::GlyphId,
        resolve::{self, DateFields, DateGlyphs, HourFormat, TimeFields, TimeGlyphs},
        tables::glyph_stem,
    },
    host::{Completion, Host},
    slot::{
        display::{DisplaySlot, SlotRegistry},
        kind::SlotKind,
    },
    theme::{ThemeColors, ThemeConfig},
};

/// Which clock units changed since the previous tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TickUnits {
    /// The minute changed; refresh the time grid.
    pub minute: bool,
    /// The day changed; refresh the date row too.
    pub day: bool,
}

impl TickUnits {
    /// A minute boundary.
    pub const MINUTE: Self = Self {
        minute: true,
        day: false,
    };
    /// A day boundary, which is also a minute boundary.
    pub const DAY: Self = Self {
        minute: true,
        day: true,
    };
}

/// Nine animated glyph slots plus three static labels, driven by a [`Host`].
///
/// All methods are synchronous. The host reports finished geometric
/// animations through [`ClockFace::animation_finished`] and fired frame
/// timers through [`ClockFace::tick`].
pub struct ClockFace<S: GlyphSource, H: Host> {
    config: FaceConfig,
    slots: SlotRegistry,
    animator: TransitionAnimator,
    scheduler: FrameScheduler,
    source: S,
    host: H,
    time_applied: bool,
    date_applied: bool,
    torn_down: bool,
}

impl<S: GlyphSource, H: Host> std::fmt::Debug for ClockFace<S, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockFace")
            .field("config", &self.config)
            .field("slots", &self.slots)
            .field("scheduler", &self.scheduler)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

impl<S: GlyphSource, H: Host> ClockFace<S, H> {
    /// Build a face and load its static labels.
    pub fn new(config: FaceConfig, source: S, host: H) -> ClockResult<Self> {
        config.validate()?;
        let colors = config.theme.resolve(config.screen.color);
        let mut face = Self {
            slots: SlotRegistry::new(config.screen),
            animator: TransitionAnimator::new(config.dissolve_pattern, colors),
            scheduler: FrameScheduler::default(),
            config,
            source,
            host,
            time_applied: false,
            date_applied: false,
            torn_down: false,
        };

        for kind in SlotKind::ALL {
            if let Some(label) = kind.label_glyph() {
                let slot = face.slots.get_mut(kind);
                face.animator
                    .swap(slot, label, &mut face.source, &mut face.host);
            }
        }
        debug!(screen = ?face.config.screen, "clock face ready");
        Ok(face)
    }

    /// Active configuration.
    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    /// Colors in use after monochrome collapsing.
    pub fn colors(&self) -> &ThemeColors {
        self.animator.colors()
    }

    /// One slot.
    pub fn slot(&self, kind: SlotKind) -> &DisplaySlot {
        self.slots.get(kind)
    }

    /// Every slot.
    pub fn slots(&self) -> &SlotRegistry {
        &self.slots
    }

    /// Dissolve frame scheduler.
    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, e.g. to pump its event queue.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The glyph source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Whether [`ClockFace::teardown`] has run.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Time glyphs under the configured hour format.
    pub fn resolve_time(&self, time: TimeFields) -> ClockResult<TimeGlyphs> {
        resolve::resolve_time(time, self.config.hour_format)
    }

    /// Date glyphs.
    pub fn resolve_date(&self, date: DateFields) -> ClockResult<DateGlyphs> {
        resolve::resolve_date(date)
    }

    /// Apply a clock notification.
    ///
    /// The time grid is updated before the date row. The date row is only
    /// touched on a day change or when it has never been filled. Both sets of
    /// fields are validated before any slot changes.
    #[tracing::instrument(skip(self))]
    pub fn on_clock_tick(
        &mut self,
        time: TimeFields,
        date: DateFields,
        units: TickUnits,
    ) -> ClockResult<()> {
        self.ensure_live()?;
        let time_glyphs = self.resolve_time(time)?;
        let date_glyphs = self.resolve_date(date)?;
        let style = self.config.transition;

        if units.minute || units.day || !self.time_applied {
            for (kind, glyph) in time_glyphs.assignments() {
                self.apply(kind, glyph, style);
            }
            self.time_applied = true;
        }
        if units.day || !self.date_applied {
            for (kind, glyph) in date_glyphs.assignments() {
                self.apply(kind, glyph, style);
            }
            self.date_applied = true;
        }
        Ok(())
    }

    /// Ask one dynamic slot to show `glyph`.
    ///
    /// Returns `false` when the slot is settled on `glyph` or already heading to it.
    /// Label slots and unknown glyph ids are rejected.
    pub fn update_slot(
        &mut self,
        kind: SlotKind,
        glyph: GlyphId,
        style: TransitionStyle,
    ) -> ClockResult<bool> {
        self.ensure_live()?;
        if kind.is_label() {
            return Err(ClockError::invalid_input(format!(
                "{kind:?} is a static label slot"
            )));
        }
        if !glyph.is_blank() && glyph_stem(glyph).is_none() {
            return Err(ClockError::invalid_input(format!(
                "unknown glyph id {}",
                glyph.raw()
            )));
        }
        Ok(self.apply(kind, glyph, style))
    }

    /// Frame timer fired: advance every dissolve by one step.
    ///
    /// Returns how many slots were advanced.
    pub fn tick(&mut self) -> usize {
        if self.torn_down {
            return 0;
        }
        self.scheduler.tick(&mut self.slots, &mut self.host)
    }

    /// A geometric animation finished. Returns `false` for stale tokens.
    pub fn animation_finished(&mut self, completion: Completion) -> bool {
        if self.torn_down {
            debug!(?completion, "completion after teardown ignored");
            return false;
        }
        let slot = self.slots.get_mut(completion.slot);
        self.animator
            .complete(slot, completion, &mut self.source, &mut self.host)
    }

    /// Switch themes and recolor every loaded glyph in place.
    pub fn apply_theme(&mut self, theme: ThemeConfig) -> ClockResult<()> {
        self.ensure_live()?;
        self.config.theme = theme;
        self.animator
            .set_colors(theme.resolve(self.config.screen.color));
        for slot in self.slots.iter_mut() {
            self.animator.recolor(slot);
        }
        let screen = self.config.screen;
        self.host.mark_dirty(Rect::new(
            0.0,
            0.0,
            f64::from(screen.width),
            f64::from(screen.height),
        ));
        debug!(?theme, "theme applied");
        Ok(())
    }

    /// Hour format used from the next clock tick on.
    pub fn set_hour_format(&mut self, format: HourFormat) {
        self.config.hour_format = format;
    }

    /// Transition used from the next clock tick on.
    pub fn set_transition(&mut self, style: TransitionStyle) {
        self.config.transition = style;
    }

    /// Cancel every transition, stop the frame timer and release all pixels.
    ///
    /// Idempotent. Afterwards every other operation reports
    /// [`ClockError::InvalidInput`] or does nothing.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        for slot in self.slots.iter_mut() {
            animator::teardown(slot, &mut self.host, &mut self.scheduler);
        }
        self.scheduler.stop(&mut self.host);
        self.torn_down = true;
        debug!("clock face torn down");
    }

    fn apply(&mut self, kind: SlotKind, glyph: GlyphId, style: TransitionStyle) -> bool {
        let slot = self.slots.get_mut(kind);
        self.animator.update(
            slot,
            glyph,
            style,
            &mut self.source,
            &mut self.host,
            &mut self.scheduler,
        )
    }

    fn ensure_live(&self) -> ClockResult<()> {
        if self.torn_down {
            return Err(ClockError::invalid_input("clock face has been torn down"));
        }
        Ok(())
    }
}

impl<S: GlyphSource, H: Host> Drop for ClockFace<S, H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "../tests/unit/face.rs"]
mod tests;
