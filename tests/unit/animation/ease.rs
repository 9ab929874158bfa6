use super::*;

const ALL: [Ease; 2] = [Ease::EaseIn, Ease::EaseOut];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn in_lags_and_out_leads_linear() {
    assert!(Ease::EaseIn.apply(0.5) < 0.5);
    assert!(Ease::EaseOut.apply(0.5) > 0.5);
}
