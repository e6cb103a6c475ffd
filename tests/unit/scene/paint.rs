use super::*;

const STOPS: &[ColorStop] = &[
    ColorStop {
        offset: 0.0,
        color: Rgba8::css(0, 0, 0, 1.0),
    },
    ColorStop {
        offset: 0.5,
        color: Rgba8::css(100, 0, 0, 1.0),
    },
    ColorStop {
        offset: 1.0,
        color: Rgba8::css(200, 0, 0, 0.0),
    },
];

#[test]
fn linear_projects_onto_axis_and_pads() {
    let g = Gradient::Linear {
        start: Point::new(0.0, 0.0),
        end: Point::new(10.0, 0.0),
        stops: STOPS,
    };
    assert_eq!(g.offset_at(Point::new(5.0, 99.0)), 0.5);
    assert_eq!(g.offset_at(Point::new(-3.0, 0.0)), 0.0);
    assert_eq!(g.offset_at(Point::new(30.0, 0.0)), 1.0);
    assert_eq!(g.color_at(Point::new(5.0, 0.0)).r, 100);
    assert_eq!(g.color_at(Point::new(2.5, 0.0)).r, 50);
}

#[test]
fn radial_uses_distance_from_center() {
    let g = Gradient::Radial {
        center: Point::new(1.0, 1.0),
        radius: 4.0,
        stops: STOPS,
    };
    assert_eq!(g.offset_at(Point::new(1.0, 1.0)), 0.0);
    assert_eq!(g.offset_at(Point::new(1.0, 3.0)), 0.5);
    assert_eq!(g.sample_premul(Point::new(9.0, 9.0)).a, 0);
}

#[test]
fn degenerate_geometry_does_not_divide_by_zero() {
    let lin = Gradient::Linear {
        start: Point::new(2.0, 2.0),
        end: Point::new(2.0, 2.0),
        stops: STOPS,
    };
    assert_eq!(lin.offset_at(Point::new(7.0, 7.0)), 0.0);

    let rad = Gradient::Radial {
        center: Point::ORIGIN,
        radius: 0.0,
        stops: STOPS,
    };
    assert_eq!(rad.offset_at(Point::ORIGIN), 1.0);
}
