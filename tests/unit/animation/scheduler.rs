use super::*;
use crate::{
    animation::{
        animator::TransitionAnimator, dissolve::DissolvePattern, state::TransitionStyle,
    },
    glyph::{
        id::GlyphId,
        tables::{COMMON_1, COMMON_2, COMMON_5, COMMON_6},
    },
    slot::layout::ScreenProfile,
    test_support::{CountingSource, RecordingHost},
    theme::ThemePreset,
};

fn start(
    kinds: &[(SlotKind, GlyphId, GlyphId)],
) -> (SlotRegistry, FrameScheduler, RecordingHost) {
    let animator = TransitionAnimator::new(DissolvePattern::Noise, ThemePreset::Dark.colors());
    let mut slots = SlotRegistry::new(ScreenProfile::default());
    let mut scheduler = FrameScheduler::default();
    let mut host = RecordingHost::new();
    let mut source = CountingSource::new();
    for &(kind, from, to) in kinds {
        let slot = slots.get_mut(kind);
        animator.update(slot, from, TransitionStyle::Instant, &mut source, &mut host, &mut scheduler);
        animator.update(slot, to, TransitionStyle::Dissolve, &mut source, &mut host, &mut scheduler);
    }
    (slots, scheduler, host)
}

#[test]
fn one_timer_serves_every_dissolve() {
    let (_, scheduler, host) = start(&[
        (SlotKind::HourOnes, COMMON_1, COMMON_2),
        (SlotKind::MinuteOnes, COMMON_5, COMMON_6),
    ]);
    assert_eq!(scheduler.active_slots(), &[SlotKind::HourOnes, SlotKind::MinuteOnes]);
    assert_eq!(host.timers.len(), 1);
    assert_eq!(host.timers[0].1, DISSOLVE_INTERVAL);
}

#[test]
fn ticks_run_until_every_slot_finishes() {
    let (mut slots, mut scheduler, mut host) = start(&[
        (SlotKind::HourOnes, COMMON_1, COMMON_2),
        (SlotKind::MinuteOnes, COMMON_5, COMMON_6),
    ]);
    let mut ticks = 0;
    while scheduler.is_active() {
        host.timers.clear();
        assert_eq!(scheduler.tick(&mut slots, &mut host), 2);
        ticks += 1;
        assert!(ticks <= crate::animation::dissolve::DISSOLVE_STEPS);
    }
    assert_eq!(ticks, crate::animation::dissolve::DISSOLVE_STEPS);
    assert!(host.timers.is_empty());
    assert!(!scheduler.has_timer());
    assert_eq!(slots.get(SlotKind::HourOnes).glyph(), COMMON_2);
    assert_eq!(slots.get(SlotKind::MinuteOnes).glyph(), COMMON_6);
    assert_eq!(slots.animating(), 0);
}

#[test]
fn forgetting_the_last_slot_stops_the_timer() {
    let (_, mut scheduler, mut host) = start(&[(SlotKind::DayOnes, COMMON_1, COMMON_2)]);
    assert!(scheduler.has_timer());
    scheduler.forget(SlotKind::DayOnes, &mut host);
    assert!(!scheduler.is_active());
    assert!(host.timers.is_empty());
}

#[test]
fn lost_timer_finishes_everything() {
    let (mut slots, mut scheduler, mut host) = start(&[(SlotKind::HourTens, COMMON_1, COMMON_2)]);
    host.timers.clear();
    host.refuse_timers = true;
    scheduler.tick(&mut slots, &mut host);
    assert!(!scheduler.is_active());
    let slot = slots.get(SlotKind::HourTens);
    assert!(!slot.is_animating());
    assert_eq!(slot.glyph(), COMMON_2);
}

#[test]
fn tick_with_nothing_registered_is_harmless() {
    let mut slots = SlotRegistry::new(ScreenProfile::default());
    let mut scheduler = FrameScheduler::default();
    let mut host = RecordingHost::new();
    assert_eq!(scheduler.tick(&mut slots, &mut host), 0);
    assert_eq!(host.timers_scheduled, 0);
}
