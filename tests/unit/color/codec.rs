use super::*;

fn close(a: Rgb, b: Rgb) -> bool {
    (a.r - b.r).abs() < 1e-12 && (a.g - b.g).abs() < 1e-12 && (a.b - b.b).abs() < 1e-12
}

#[test]
fn decodes_six_digit_hex() {
    assert_eq!(decode("#ff0000"), Rgb::new(1.0, 0.0, 0.0));
    assert_eq!(decode("00ff00"), Rgb::new(0.0, 1.0, 0.0));
    let c = decode("#6750A4");
    assert!((c.r - 103.0 / 255.0).abs() < 1e-12);
    assert!((c.g - 80.0 / 255.0).abs() < 1e-12);
    assert!((c.b - 164.0 / 255.0).abs() < 1e-12);
}

#[test]
fn shorthand_expands_each_digit() {
    assert!(close(decode("#abc"), decode("#aabbcc")));
    assert!(close(decode("F0a"), decode("#ff00AA")));
}

#[test]
fn malformed_lengths_fall_back_to_black() {
    for hex in ["", "#", "#12", "#1234", "#12345", "#1234567", "#12345678"] {
        assert_eq!(decode(hex), Rgb::BLACK, "{hex:?}");
        assert!(try_decode(hex).is_none(), "{hex:?}");
    }
}

#[test]
fn invalid_digits_fall_back_to_black() {
    assert_eq!(decode("#gg0000"), Rgb::BLACK);
    assert_eq!(decode("#+f0000"), Rgb::BLACK);
    assert_eq!(decode("#ééé"), Rgb::BLACK);
}

#[test]
fn encode_decode_round_trips_case_insensitively() {
    for hex in ["#000000", "#ffffff", "#6750a4", "#D0BCFF", "#1D1B20", "#7f7f80"] {
        assert_eq!(encode(decode(hex)), hex.to_ascii_lowercase());
        assert_eq!(normalize(hex), hex.to_ascii_lowercase());
    }
    assert_eq!(normalize("#abc"), "#aabbcc");
    assert_eq!(normalize("nonsense"), "#000000");
}

#[test]
fn luminance_uses_601_weights() {
    assert_eq!(luminance(0.0, 0.0, 0.0), 0.0);
    assert!((luminance(1.0, 1.0, 1.0) - 1.0).abs() < 1e-12);
    assert!((luminance(1.0, 0.0, 0.0) - 0.299).abs() < 1e-12);
    assert!((decode("#00ff00").luminance() - 0.587).abs() < 1e-12);
}

#[test]
fn contrast_threshold_is_per_call_site() {
    // luminance ~0.52: dark text under 0.5, white text under 0.55
    let fill = Rgb::new(0.52, 0.52, 0.52);
    assert_eq!(contrast_text(fill, 0.5), ContrastText::Dark);
    assert_eq!(contrast_text(fill, 0.55), ContrastText::White);

    let t = ContrastThresholds::default();
    assert_eq!(contrast_text(Rgb::BLACK, t.badge), ContrastText::White);
    assert_eq!(contrast_text(Rgb::WHITE, t.panel), ContrastText::Dark);
}

#[test]
fn rgba_quantizes_with_alpha() {
    let c = decode("#6750a4").with_alpha(0.5);
    assert_eq!(c.to_rgba8(), [0x67, 0x50, 0xa4, 128]);
    assert_eq!(Rgb::WHITE.with_alpha(3.0).a, 1.0);
}
