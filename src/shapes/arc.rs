use crate::collision::AABB;
use crate::math::tolerance::approx_eq;
use crate::math::vec2::Vec2;

/// Number of chords used to approximate curved outlines.
pub(crate) const CURVE_SEGMENTS: usize = 32;

/// A circular arc: the curve only, no enclosed area.
///
/// Angles are radians; the arc sweeps from `start_angle` towards
/// `end_angle` in the positive direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Vec2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Arc {
    pub fn new(center: Vec2, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius: radius.abs(),
            start_angle,
            end_angle,
        }
    }

    /// Swept angle in [0, 2*PI].
    pub fn sweep(&self) -> f64 {
        sweep_between(self.start_angle, self.end_angle)
    }

    pub fn sample_points(&self) -> Vec<Vec2> {
        sample_arc(self.center, self.radius, self.start_angle, self.sweep())
    }

    pub fn bounds(&self) -> AABB {
        AABB::from_points(&self.sample_points()).unwrap_or_else(|| AABB::new(self.center, self.center))
    }

    /// True when `point` lies on the curve.
    pub fn contains_point(&self, point: Vec2) -> bool {
        approx_eq(point.distance(self.center), self.radius)
            && angle_in_sweep((point - self.center).angle(), self.start_angle, self.sweep())
    }
}

pub(crate) fn sweep_between(start: f64, end: f64) -> f64 {
    let tau = std::f64::consts::TAU;
    let sweep = (end - start).rem_euclid(tau);
    if sweep == 0.0 && end != start {
        tau
    } else {
        sweep
    }
}

pub(crate) fn angle_in_sweep(angle: f64, start: f64, sweep: f64) -> bool {
    (angle - start).rem_euclid(std::f64::consts::TAU) <= sweep + crate::math::EPSILON
}

pub(crate) fn sample_arc(center: Vec2, radius: f64, start: f64, sweep: f64) -> Vec<Vec2> {
    (0..=CURVE_SEGMENTS)
        .map(|i| {
            let angle = start + sweep * (i as f64 / CURVE_SEGMENTS as f64);
            center + Vec2::from_polar(radius, angle)
        })
        .collect()
}
