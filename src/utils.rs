pub fn mix(x: f64, y: f64, a: f64) -> f64 {
    x * (1.0 - a) + y * a
}

/// Convert to a color channel by truncating toward zero, saturating outside `0..=255`.
pub fn truncate_channel(val: f64) -> u8 {
    // `as` truncates and saturates, NaN becomes 0.
    val as u8
}

#[test]
fn test_mix() {
    assert_eq!(mix(15., 49., 0.), 15.);
    assert_eq!(mix(15., 49., 0.5), 32.);
    assert_eq!(mix(42., 129., 0.5), 85.5);
}

#[test]
fn test_truncate_channel() {
    assert_eq!(truncate_channel(85.5), 85);
    assert_eq!(truncate_channel(85.999), 85);
    assert_eq!(truncate_channel(0.2), 0);
    assert_eq!(truncate_channel(-3.0), 0);
    assert_eq!(truncate_channel(300.0), 255);
}
