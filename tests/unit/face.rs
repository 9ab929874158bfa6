use super::*;
use crate::{
    glyph::tables,
    test_support::{CountingSource, RecordingHost},
};

fn face(cfg: FaceConfig) -> ClockFace<CountingSource, RecordingHost> {
    ClockFace::new(cfg, CountingSource::new(), RecordingHost::new()).unwrap()
}

fn instant() -> FaceConfig {
    FaceConfig {
        transition: TransitionStyle::Instant,
        ..FaceConfig::default()
    }
}

#[test]
fn labels_are_loaded_at_construction() {
    let f = face(FaceConfig::default());
    assert_eq!(f.source().loads, 3);
    for kind in [SlotKind::MonthLabel, SlotKind::DayLabel, SlotKind::WeekLabel] {
        let slot = f.slot(kind);
        assert_eq!(Some(slot.glyph()), kind.label_glyph());
        assert!(slot.image().is_some());
        assert!(!slot.is_animating());
    }
}

#[test]
fn first_tick_fills_time_and_date() {
    let mut f = face(instant());
    f.on_clock_tick(
        TimeFields::new(15, 40).unwrap(),
        DateFields::new(12, 25, 3).unwrap(),
        TickUnits::default(),
    )
    .unwrap();
    assert_eq!(f.slot(SlotKind::HourTens).glyph(), tables::FORMAL_10);
    assert_eq!(f.slot(SlotKind::HourOnes).glyph(), tables::FORMAL_5);
    assert_eq!(f.slot(SlotKind::MinuteTens).glyph(), tables::COMMON_4);
    assert_eq!(f.slot(SlotKind::Weekday).glyph(), tables::DATE_COMMON_3);
    assert_eq!(f.slot(SlotKind::DayTens).glyph(), tables::DATE_COMMON_20);
}

#[test]
fn date_row_waits_for_a_day_change() {
    let mut f = face(instant());
    let time = TimeFields::new(9, 5).unwrap();
    f.on_clock_tick(time, DateFields::new(3, 1, 0).unwrap(), TickUnits::MINUTE)
        .unwrap();
    f.on_clock_tick(time, DateFields::new(3, 2, 1).unwrap(), TickUnits::MINUTE)
        .unwrap();
    assert_eq!(f.slot(SlotKind::Weekday).glyph(), tables::SUNDAY);

    f.on_clock_tick(time, DateFields::new(3, 2, 1).unwrap(), TickUnits::DAY)
        .unwrap();
    assert_eq!(f.slot(SlotKind::Weekday).glyph(), tables::DATE_COMMON_1);
}

#[test]
fn invalid_fields_touch_nothing() {
    let mut f = face(instant());
    let bad = TimeFields { hour: 24, minute: 0 };
    let err = f
        .on_clock_tick(bad, DateFields::new(1, 1, 1).unwrap(), TickUnits::DAY)
        .unwrap_err();
    assert!(matches!(err, ClockError::InvalidInput(_)));
    assert_eq!(f.source().loads, 3);
    assert_eq!(f.slot(SlotKind::DayOnes).glyph(), GlyphId::BLANK);
}

#[test]
fn labels_and_unknown_ids_are_rejected() {
    let mut f = face(FaceConfig::default());
    assert!(matches!(
        f.update_slot(SlotKind::DayLabel, tables::COMMON_1, TransitionStyle::Slide),
        Err(ClockError::InvalidInput(_))
    ));
    assert!(matches!(
        f.update_slot(SlotKind::HourOnes, GlyphId::new(999), TransitionStyle::Slide),
        Err(ClockError::InvalidInput(_))
    ));
}

#[test]
fn teardown_is_idempotent_and_final() {
    let mut f = face(FaceConfig::default());
    f.update_slot(SlotKind::HourOnes, tables::FORMAL_3, TransitionStyle::Slide)
        .unwrap();
    f.teardown();
    f.teardown();
    assert!(f.is_torn_down());
    assert!(f.host().running.is_empty());
    assert!(f.slots().iter().all(|s| s.image().is_none() && s.is_retired()));
    assert!(f.update_slot(SlotKind::HourOnes, tables::FORMAL_4, TransitionStyle::Slide).is_err());
    assert_eq!(f.tick(), 0);
}
