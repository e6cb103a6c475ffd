use super::*;

#[test]
fn square_canvas_validates_size() {
    let c = Canvas::square(64).unwrap();
    assert_eq!(c.width, 64);
    assert_eq!(c.height, 64);
    assert_eq!(c.rgba_len(), 64 * 64 * 4);

    assert!(Canvas::square(0).is_err());
    assert!(Canvas::square(70_000).is_err());
}

#[test]
fn css_alpha_rounds_to_nearest() {
    assert_eq!(Rgba8::css(1, 2, 3, 1.0).a, 255);
    assert_eq!(Rgba8::css(1, 2, 3, 0.0).a, 0);
    assert_eq!(Rgba8::css(1, 2, 3, 0.98).a, 250);
    assert_eq!(Rgba8::css(1, 2, 3, 0.28).a, 71);
}

#[test]
fn lerp_hits_endpoints_and_clamps() {
    let a = Rgba8::css(0, 0, 0, 0.0);
    let b = Rgba8::css(200, 100, 50, 1.0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 7.0), b);
    assert_eq!(a.lerp(b, 0.5).r, 100);
}

#[test]
fn premultiply_scales_color_channels() {
    let p = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(p.to_array(), [128, 64, 0, 128]);
    assert_eq!(
        Rgba8::css(255, 255, 255, 0.0).premultiplied().to_array(),
        [0, 0, 0, 0]
    );
}
