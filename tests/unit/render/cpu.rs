use super::*;

fn surface() -> CloudSurface {
    CloudSurface::new(Canvas::square(64).unwrap())
}

fn border_is_transparent(s: &CloudSurface, ring: u16) -> bool {
    let Canvas { width, height } = s.canvas();
    for y in 0..height {
        for x in 0..width {
            let on_ring = x < ring || y < ring || x >= width - ring || y >= height - ring;
            if on_ring && s.pixel(x, y).map(|px| px[3]) != Some(0) {
                return false;
            }
        }
    }
    true
}

#[test]
fn new_surface_is_transparent() {
    let s = surface();
    assert_eq!(s.pixels().len(), 64 * 64 * 4);
    assert!(s.pixels().iter().all(|&b| b == 0));
}

#[test]
fn frame_paints_a_violet_blue_cloud_at_the_center() {
    let mut s = surface();
    s.render_frame(0.0).unwrap();
    let [r, _g, b, a] = s.pixel(32, 34).unwrap();
    assert!(a > 200, "alpha {a}");
    assert!(b > r, "expected blue-dominant fill, got r={r} b={b}");
}

#[test]
fn motion_changes_pixels_but_stays_in_frame() {
    let mut s = surface();
    s.render_frame(0.0).unwrap();
    let first = s.pixels().to_vec();
    assert!(border_is_transparent(&s, 2));

    s.render_frame(1000.0).unwrap();
    assert_ne!(first, s.pixels());
    assert!(border_is_transparent(&s, 2));
}

#[test]
fn render_clears_previous_frame_first() {
    let mut fresh = surface();
    fresh.render_frame(1000.0).unwrap();

    let mut reused = surface();
    reused.render_frame(0.0).unwrap();
    reused.render_frame(4321.0).unwrap();
    reused.render_frame(1000.0).unwrap();

    assert_eq!(fresh.pixels(), reused.pixels());
}

#[test]
fn long_running_clock_stays_in_frame() {
    let mut s = surface();
    for t in [0.0, 16.7, 2_500.0, 60_000.0, 3_600_000.0] {
        s.render_frame(t).unwrap();
        assert!(border_is_transparent(&s, 2), "border painted at {t}");
    }
}

#[test]
fn scene_scales_with_canvas_size() {
    for (size, ring) in [(32, 1), (128, 4)] {
        let mut s = CloudSurface::new(Canvas::square(size).unwrap());
        for t in [0.0, 1000.0, 2_500.0, 60_000.0] {
            s.render_frame(t).unwrap();
            assert!(border_is_transparent(&s, ring), "size {size}: border painted at {t}");
        }
        let half = (size / 2) as u16;
        assert!(s.pixel(half, half).unwrap()[3] > 0, "size {size}: center empty");
    }
}

#[test]
fn non_finite_time_is_rejected() {
    let mut s = surface();
    assert!(s.render_frame(f64::NAN).is_err());
    assert!(s.render_frame(f64::INFINITY).is_err());
}

#[test]
fn pixel_outside_surface_is_none() {
    let s = surface();
    assert_eq!(s.pixel(64, 0), None);
    assert_eq!(s.pixel(0, 64), None);
}
