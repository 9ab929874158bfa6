use super::*;

#[test]
fn default_profile_fits() {
    ScreenProfile::default().validate().unwrap();
}

#[test]
fn time_grid_positions() {
    let p = ScreenProfile::default();
    assert_eq!(
        p.slot_frame(SlotKind::HourTens),
        Rect::new(8.0, 8.0, 96.0, 96.0)
    );
    assert_eq!(
        p.slot_frame(SlotKind::HourOnes),
        Rect::new(104.0, 8.0, 192.0, 96.0)
    );
    assert_eq!(
        p.slot_frame(SlotKind::MinuteOnes),
        Rect::new(104.0, 104.0, 192.0, 192.0)
    );
}

#[test]
fn date_row_positions() {
    let p = ScreenProfile::default();
    let x0 = |k| p.slot_frame(k).x0;

    assert_eq!(p.slot_frame(SlotKind::MonthTens).y0, 199.0);
    assert_eq!(x0(SlotKind::MonthTens), 8.0);
    assert_eq!(x0(SlotKind::MonthOnes), 31.0);
    assert_eq!(x0(SlotKind::MonthLabel), 54.0);
    assert_eq!(x0(SlotKind::DayTens), 77.0);
    assert_eq!(x0(SlotKind::DayOnes), 100.0);
    assert_eq!(x0(SlotKind::DayLabel), 123.0);
    assert_eq!(x0(SlotKind::WeekLabel), 147.0);
    assert_eq!(x0(SlotKind::Weekday), 170.0);
    assert_eq!(p.slot_frame(SlotKind::Weekday).x1, 192.0);
}

#[test]
fn oversized_glyphs_are_rejected() {
    let p = ScreenProfile {
        time_glyph: 120,
        ..ScreenProfile::default()
    };
    assert!(matches!(p.validate(), Err(ClockError::Config(_))));

    let p = ScreenProfile {
        date_glyph: 0,
        ..ScreenProfile::default()
    };
    assert!(p.validate().is_err());
}
