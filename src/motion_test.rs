use super::*;

#[test]
fn hero_parallax_is_linear_below_the_range() {
    let frame = hero_parallax(200.0);
    assert!((frame.translate_y_px - 7.5).abs() < 1e-9);
    assert!((frame.opacity - 0.9).abs() < 1e-9);
}

#[test]
fn hero_parallax_clamps_at_the_range() {
    let at_range = hero_parallax(400.0);
    let far_past = hero_parallax(4000.0);
    assert_eq!(at_range, far_past);
    assert!((at_range.translate_y_px - 15.0).abs() < 1e-9);
    assert!((at_range.opacity - 0.8).abs() < 1e-9);
}

#[test]
fn hero_parallax_holds_the_rest_frame_on_overscroll() {
    let frame = hero_parallax(-80.0);
    assert!((frame.translate_y_px).abs() < 1e-9);
    assert!((frame.opacity - 1.0).abs() < 1e-9);
}

#[test]
fn card_tilt_is_zero_at_the_center() {
    let frame = card_tilt(150.0, 100.0, 300.0, 200.0);
    assert!(frame.rotate_x_deg.abs() < 1e-9);
    assert!(frame.rotate_y_deg.abs() < 1e-9);
    assert!((frame.glow_x_pct - 50.0).abs() < 1e-9);
    assert!((frame.glow_y_pct - 50.0).abs() < 1e-9);
}

#[test]
fn card_tilt_sign_follows_the_pointer_quadrant() {
    // Top-right quadrant: card leans back and to the right.
    let frame = card_tilt(300.0, 0.0, 300.0, 200.0);
    assert!((frame.rotate_y_deg - 12.5).abs() < 1e-9);
    assert!((frame.rotate_x_deg - 12.5).abs() < 1e-9);

    // Bottom-left quadrant: both rotations flip sign.
    let frame = card_tilt(0.0, 200.0, 300.0, 200.0);
    assert!((frame.rotate_y_deg + 12.5).abs() < 1e-9);
    assert!((frame.rotate_x_deg + 12.5).abs() < 1e-9);
}

#[test]
fn card_tilt_tracks_the_glow_position() {
    let frame = card_tilt(75.0, 150.0, 300.0, 200.0);
    assert!((frame.glow_x_pct - 25.0).abs() < 1e-9);
    assert!((frame.glow_y_pct - 75.0).abs() < 1e-9);
}

#[test]
fn card_tilt_neutralizes_a_degenerate_box() {
    assert_eq!(card_tilt(10.0, 10.0, 0.0, 200.0), TiltFrame::neutral());
    assert_eq!(card_tilt(10.0, 10.0, 300.0, 0.0), TiltFrame::neutral());
}

#[test]
fn chip_delays_scale_with_position() {
    assert_eq!(chip_delay_ms(0), 0);
    assert_eq!(chip_delay_ms(1), 90);
    assert_eq!(chip_delay_ms(4), 360);
}

#[test]
fn ease_toward_covers_a_tenth_of_the_remaining_distance() {
    assert!((ease_toward(0.0, 100.0) - 10.0).abs() < 1e-9);
    assert!((ease_toward(90.0, 100.0) - 91.0).abs() < 1e-9);
}

#[test]
fn ease_toward_is_a_fixed_point_at_the_target() {
    assert!((ease_toward(42.0, 42.0) - 42.0).abs() < 1e-12);
}
