use std::time::Duration;

use tracing::{debug, warn};

use crate::{
    animation::{animator::advance_dissolve, dissolve::DISSOLVE_INTERVAL},
    foundation::error::ClockResult,
    host::{Host, TimerHandle},
    slot::{display::SlotRegistry, kind::SlotKind},
};

/// Shared frame timer for every dissolving slot.
///
/// One timer runs while at least one slot is registered and none runs when
/// the set is empty. Each tick advances every registered slot by one step.
#[derive(Debug)]
pub struct FrameScheduler {
    active: Vec<SlotKind>,
    timer: Option<TimerHandle>,
    interval: Duration,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(DISSOLVE_INTERVAL)
    }
}

impl FrameScheduler {
    /// Scheduler ticking every `interval` while active.
    pub fn new(interval: Duration) -> Self {
        Self {
            active: Vec::new(),
            timer: None,
            interval,
        }
    }

    /// Whether any slot is registered.
    pub fn is_active(&self) -> bool {
        !self.active.is_empty()
    }

    /// Whether a timer is currently outstanding.
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Registered slots in registration order.
    pub fn active_slots(&self) -> &[SlotKind] {
        &self.active
    }

    /// Whether `kind` is registered.
    pub fn is_registered(&self, kind: SlotKind) -> bool {
        self.active.contains(&kind)
    }

    /// Register `kind` and make sure the timer is running.
    pub fn register<H>(&mut self, kind: SlotKind, host: &mut H) -> ClockResult<()>
    where
        H: Host + ?Sized,
    {
        if !self.is_registered(kind) {
            self.active.push(kind);
        }
        self.ensure_timer(host)
    }

    /// Drop `kind`; the timer stops once nothing is left.
    pub fn forget<H>(&mut self, kind: SlotKind, host: &mut H)
    where
        H: Host + ?Sized,
    {
        self.active.retain(|k| *k != kind);
        if self.active.is_empty() {
            self.stop(host);
        }
    }

    /// Cancel the timer and drop every registration.
    pub fn stop<H>(&mut self, host: &mut H)
    where
        H: Host + ?Sized,
    {
        self.active.clear();
        if let Some(timer) = self.timer.take() {
            host.cancel_timer(timer);
        }
    }

    /// Handle a timer fire: advance every registered slot one step.
    ///
    /// Returns how many slots were advanced.
    pub fn tick<H>(&mut self, slots: &mut SlotRegistry, host: &mut H) -> usize
    where
        H: Host + ?Sized,
    {
        // The fired timer is spent.
        self.timer = None;
        let advanced = self.active.len();

        self.active
            .retain(|kind| !advance_dissolve(slots.get_mut(*kind), host));

        if self.active.is_empty() {
            debug!("frame scheduler idle");
            return advanced;
        }
        if let Err(err) = self.ensure_timer(host) {
            warn!(%err, "frame timer unavailable; finishing dissolves at once");
            for kind in std::mem::take(&mut self.active) {
                let slot = slots.get_mut(kind);
                while !advance_dissolve(slot, host) {}
            }
        }
        advanced
    }

    fn ensure_timer<H>(&mut self, host: &mut H) -> ClockResult<()>
    where
        H: Host + ?Sized,
    {
        if self.timer.is_none() {
            self.timer = Some(host.schedule_timer(self.interval)?);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scheduler.rs"]
mod tests;
