// Host-side tests for hex color parsing and interpolation.

use dotfield_core::color::Rgb;

#[test]
fn parses_hex_with_and_without_hash() {
    let expected = Rgb { r: 0x20, g: 0x0e, b: 0x56 };
    assert_eq!(Rgb::from_hex("#200e56").unwrap(), expected);
    assert_eq!(Rgb::from_hex("200e56").unwrap(), expected);
    assert_eq!(Rgb::from_hex("#FF0FFF").unwrap(), Rgb { r: 255, g: 15, b: 255 });
}

#[test]
fn malformed_hex_falls_back_to_black() {
    assert!(Rgb::from_hex("#zz0fff").is_err());
    assert!(Rgb::from_hex("#fff").is_err());
    assert!(Rgb::from_hex("").is_err());
    assert_eq!(Rgb::from_hex_or_black("not a color"), Rgb::BLACK);
    assert_eq!(Rgb::from_hex_or_black("#12345"), Rgb::BLACK);
}

#[test]
fn lerp_endpoints_are_exact() {
    let base = Rgb::from_hex("#200e56").unwrap();
    let active = Rgb::from_hex("#ff0fff").unwrap();
    assert_eq!(base.lerp(active, 0.0), base);
    assert_eq!(base.lerp(active, 1.0), active);
    // t outside [0,1] clamps to the endpoints
    assert_eq!(base.lerp(active, -2.0), base);
    assert_eq!(base.lerp(active, 3.0), active);
}

#[test]
fn lerp_midpoint_rounds_per_channel() {
    let base = Rgb { r: 32, g: 14, b: 86 };
    let active = Rgb { r: 255, g: 15, b: 255 };
    let mid = base.lerp(active, 0.5);
    assert_eq!(mid, Rgb { r: 144, g: 15, b: 171 });
}

#[test]
fn css_form_matches_canvas_fill_syntax() {
    assert_eq!(Rgb { r: 32, g: 14, b: 86 }.css(), "rgb(32,14,86)");
    assert_eq!(Rgb::BLACK.css(), "rgb(0,0,0)");
}
