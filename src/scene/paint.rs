use crate::foundation::core::{Point, Rgba8, Rgba8Premul};

/// A gradient color stop at `offset` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient.
    pub offset: f32,
    /// Straight-alpha color at this position.
    pub color: Rgba8,
}

/// Gradient geometry, expressed in the local coordinates of the shape it fills.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gradient {
    /// Colors vary along the segment `start -> end`; points are projected onto it.
    Linear {
        /// Offset 0.
        start: Point,
        /// Offset 1.
        end: Point,
        /// Stops in increasing offset order.
        stops: &'static [ColorStop],
    },
    /// Colors vary with distance from `center`, reaching offset 1 at `radius`.
    Radial {
        /// Offset 0.
        center: Point,
        /// Distance of offset 1.
        radius: f64,
        /// Stops in increasing offset order.
        stops: &'static [ColorStop],
    },
}

impl Gradient {
    /// Gradient offset at `p`, clamped to `[0, 1]` (pad extend).
    pub fn offset_at(&self, p: Point) -> f32 {
        let t = match *self {
            Gradient::Linear { start, end, .. } => {
                let axis = end - start;
                let len2 = axis.hypot2();
                if len2 <= f64::EPSILON {
                    0.0
                } else {
                    (p - start).dot(axis) / len2
                }
            }
            Gradient::Radial { center, radius, .. } => {
                if radius <= f64::EPSILON {
                    1.0
                } else {
                    (p - center).hypot() / radius
                }
            }
        };
        t.clamp(0.0, 1.0) as f32
    }

    /// Straight-alpha color at `p`.
    pub fn color_at(&self, p: Point) -> Rgba8 {
        let stops = match self {
            Gradient::Linear { stops, .. } | Gradient::Radial { stops, .. } => *stops,
        };
        color_for_offset(stops, self.offset_at(p))
    }

    /// Premultiplied color at `p`.
    pub fn sample_premul(&self, p: Point) -> Rgba8Premul {
        self.color_at(p).premultiplied()
    }
}

fn color_for_offset(stops: &[ColorStop], t: f32) -> Rgba8 {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Rgba8::css(0, 0, 0, 0.0);
    };
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= f32::EPSILON {
                return b.color;
            }
            return a.color.lerp(b.color, (t - a.offset) / span);
        }
    }
    last.color
}

#[cfg(test)]
#[path = "../../tests/unit/scene/paint.rs"]
mod tests;
