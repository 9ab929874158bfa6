use super::*;

const PAL: [Rgb8; 2] = [Rgb8::WHITE, Rgb8::BLACK];

#[test]
fn stride_rounds_up_to_whole_bytes() {
    assert_eq!(Bitmap::new(8, 2, PAL).stride(), 1);
    assert_eq!(Bitmap::new(9, 2, PAL).stride(), 2);
    assert_eq!(Bitmap::new(22, 22, PAL).pixels().len(), 3 * 22);
}

#[test]
fn get_set_are_msb_first() {
    let mut b = Bitmap::new(10, 2, PAL);
    b.set(0, 0, true);
    b.set(9, 1, true);
    assert_eq!(b.pixels()[0], 0x80);
    assert_eq!(b.pixels()[3], 0x40);
    assert!(b.get(0, 0));
    assert!(b.get(9, 1));
    assert!(!b.get(1, 0));
    assert_eq!(b.count_set(), 2);

    b.set(0, 0, false);
    assert_eq!(b.count_set(), 1);
}

#[test]
fn out_of_bounds_access_is_ignored() {
    let mut b = Bitmap::new(4, 4, PAL);
    b.set(4, 0, true);
    b.set(0, 4, true);
    assert_eq!(b.count_set(), 0);
    assert!(!b.get(100, 100));
}

#[test]
fn from_fn_and_color_at() {
    let b = Bitmap::from_fn(3, 3, PAL, |x, y| x == y);
    assert_eq!(b.count_set(), 3);
    assert_eq!(b.color_at(1, 1), Rgb8::BLACK);
    assert_eq!(b.color_at(0, 1), Rgb8::WHITE);
}
