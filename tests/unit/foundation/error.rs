use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ClockError::invalid_input("x")
            .to_string()
            .contains("invalid input:")
    );
    assert!(
        ClockError::resource_load("x")
            .to_string()
            .contains("resource load failure:")
    );
    assert!(
        ClockError::animation_unavailable("x")
            .to_string()
            .contains("animation unavailable:")
    );
    assert!(
        ClockError::config("x")
            .to_string()
            .contains("configuration error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ClockError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
