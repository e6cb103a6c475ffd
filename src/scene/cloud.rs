//! Procedural cloud scene.
//!
//! A frame is two overlapping clouds (a dimmer back layer and a larger front layer) plus one small
//! bright puff. All motion is a sum of sines and cosines of the clock, so it is bounded and
//! quasi-periodic: the clouds float around the canvas center and never leave the frame.

use kurbo::{Circle, Shape};

use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rgba8, Vec2};
use crate::scene::paint::{ColorStop, Gradient};

/// Edge length of the square the scene is laid out in; other sizes are scaled from it.
pub const REFERENCE_SIZE: f64 = 64.0;

/// Peak horizontal drift in reference units.
pub const DRIFT_X_AMPLITUDE: f64 = 2.5;
/// Peak vertical drift in reference units.
pub const DRIFT_Y_AMPLITUDE: f64 = 2.0;

const DRIFT_X_RATE: f64 = 0.8;
const DRIFT_Y_RATE: f64 = 1.1;

const PUFF_X_AMPLITUDE: f64 = 1.6;
const PUFF_Y_AMPLITUDE: f64 = 1.2;
const PUFF_X_RATE: f64 = 1.9;
const PUFF_Y_RATE: f64 = 2.3;
const PUFF_LIFT: f64 = 6.0;

/// Puff disc radius in pixels.
pub const PUFF_RADIUS: f64 = 2.6;
/// Radius at which the puff gradient fades out completely.
pub const PUFF_GLOW_RADIUS: f64 = 8.0;

// Lobes of the cloud outline in local units: (center x, center y, radius).
const CLOUD_LOBES: [(f64, f64, f64); 4] = [
    (-6.0, 0.0, 8.0),
    (4.0, -4.0, 8.5),
    (14.0, 0.0, 8.5),
    (6.0, 6.0, 7.5),
];

const HIGHLIGHT_CENTER: (f64, f64) = (4.0, -2.0);
const HIGHLIGHT_RADIUS: f64 = 10.0;

const PATH_TOLERANCE: f64 = 0.05;

const CLOUD_FILL_STOPS: &[ColorStop] = &[
    ColorStop {
        offset: 0.0,
        color: Rgba8::css(122, 92, 255, 0.98),
    },
    ColorStop {
        offset: 0.6,
        color: Rgba8::css(106, 122, 255, 0.95),
    },
    ColorStop {
        offset: 1.0,
        color: Rgba8::css(58, 160, 255, 0.95),
    },
];

const CLOUD_HIGHLIGHT_STOPS: &[ColorStop] = &[
    ColorStop {
        offset: 0.0,
        color: Rgba8::css(255, 255, 255, 0.28),
    },
    ColorStop {
        offset: 1.0,
        color: Rgba8::css(255, 255, 255, 0.0),
    },
];

const PUFF_STOPS: &[ColorStop] = &[
    ColorStop {
        offset: 0.0,
        color: Rgba8::css(255, 255, 255, 0.95),
    },
    ColorStop {
        offset: 1.0,
        color: Rgba8::css(255, 255, 255, 0.0),
    },
];

/// Violet-to-blue body fill, in local cloud units.
pub const CLOUD_FILL: Gradient = Gradient::Linear {
    start: Point::new(-16.0, -8.0),
    end: Point::new(24.0, 12.0),
    stops: CLOUD_FILL_STOPS,
};

/// Soft white inner highlight, in local cloud units.
pub const CLOUD_HIGHLIGHT: Gradient = Gradient::Radial {
    center: Point::new(2.0, -2.0),
    radius: 18.0,
    stops: CLOUD_HIGHLIGHT_STOPS,
};

/// Uniform scale from the [`REFERENCE_SIZE`] layout to `canvas` pixels.
pub fn reference_to_canvas(canvas: Canvas) -> Affine {
    Affine::scale(f64::from(canvas.width.min(canvas.height)) / REFERENCE_SIZE)
}

/// Center of the reference layout.
pub fn reference_center() -> Point {
    Point::new(REFERENCE_SIZE * 0.5, REFERENCE_SIZE * 0.5)
}

/// Convert a clock reading in milliseconds to animation seconds.
pub fn seconds(time_ms: f64) -> f64 {
    time_ms * 0.001
}

/// Drift of the cloud layers at `t` seconds.
///
/// `|x| <= DRIFT_X_AMPLITUDE` and `|y| <= DRIFT_Y_AMPLITUDE` for every `t`.
pub fn drift(t: f64) -> Vec2 {
    Vec2::new(
        (t * DRIFT_X_RATE).sin() * DRIFT_X_AMPLITUDE,
        (t * DRIFT_Y_RATE).cos() * DRIFT_Y_AMPLITUDE,
    )
}

/// Offset of the highlight puff from the scene center at `t` seconds.
///
/// Oscillates faster than [`drift`].
pub fn puff_offset(t: f64) -> Vec2 {
    Vec2::new(
        (t * PUFF_X_RATE).sin() * PUFF_X_AMPLITUDE,
        -PUFF_LIFT + (t * PUFF_Y_RATE).cos() * PUFF_Y_AMPLITUDE,
    )
}

/// Union of the four lobes, in local cloud units.
pub fn cloud_outline() -> BezPath {
    let mut path = BezPath::new();
    for (x, y, r) in CLOUD_LOBES {
        path.extend(Circle::new((x, y), r).path_elements(PATH_TOLERANCE));
    }
    path
}

/// Highlight disc drawn on top of the body, in local cloud units.
pub fn cloud_highlight() -> BezPath {
    let (x, y) = HIGHLIGHT_CENTER;
    Circle::new((x, y), HIGHLIGHT_RADIUS).to_path(PATH_TOLERANCE)
}

/// Local-space bounding box of [`cloud_outline`] as `(min, max)`.
pub fn cloud_extent() -> (Point, Point) {
    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for (x, y, r) in CLOUD_LOBES {
        min.x = min.x.min(x - r);
        min.y = min.y.min(y - r);
        max.x = max.x.max(x + r);
        max.y = max.y.max(y + r);
    }
    (min, max)
}

/// One cloud placed on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudLayer {
    /// Reference-space position of the local origin.
    pub origin: Point,
    /// Uniform scale from local units to pixels.
    pub scale: f64,
    /// Layer opacity in `[0, 1]`.
    pub alpha: f32,
}

impl CloudLayer {
    /// Local cloud units to reference units.
    pub fn local_to_reference(&self) -> Affine {
        Affine::translate(self.origin.to_vec2()) * Affine::scale(self.scale)
    }
}

/// The small bright blob drawn last.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Puff {
    /// Reference-space position of the puff center.
    pub center: Point,
}

impl Puff {
    /// Disc outline in reference units.
    pub fn outline(&self) -> BezPath {
        Circle::new(self.center, PUFF_RADIUS).to_path(PATH_TOLERANCE)
    }

    /// Radial white glow centered on the puff, in reference units.
    pub fn glow(&self) -> Gradient {
        Gradient::Radial {
            center: self.center,
            radius: PUFF_GLOW_RADIUS,
            stops: PUFF_STOPS,
        }
    }
}

/// Everything drawn for one clock reading, back to front.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudScene {
    /// Dimmer, smaller cloud behind.
    pub back: CloudLayer,
    /// Brighter, larger cloud in front.
    pub front: CloudLayer,
    /// Highlight blob on top.
    pub puff: Puff,
}

impl CloudScene {
    /// Lay out the scene at `time_ms` around `center`.
    pub fn at(time_ms: f64, center: Point) -> Self {
        let t = seconds(time_ms);
        let d = drift(t);
        Self {
            back: CloudLayer {
                origin: center + Vec2::new(-6.0, 6.0) + d * 0.6,
                scale: 0.92,
                alpha: 0.85,
            },
            front: CloudLayer {
                origin: center + d,
                scale: 1.15,
                alpha: 0.98,
            },
            puff: Puff {
                center: center + puff_offset(t),
            },
        }
    }

    /// Cloud layers in paint order.
    pub fn layers(&self) -> [CloudLayer; 2] {
        [self.back, self.front]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/cloud.rs"]
mod tests;
