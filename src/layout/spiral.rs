//! Candidate point generation along an outward spiral

use super::types::Point;

/// Source of candidate centers for the placement search
pub trait SpiralPointGenerator {
    /// Produce the next point. Calls never fail and never run out.
    fn next_point(&mut self) -> Point;
}

/// Archimedean spiral `r = radius_step * θ` around a fixed center
///
/// Each call emits the point at the current angle and then advances the
/// angle by `angle_step`. Coordinates are rounded half-to-even, so two
/// generators built with the same parameters emit the same sequence.
#[derive(Debug, Clone)]
pub struct ArchimedeanSpiral {
    center: Point,
    angle_step: f64,
    radius_step: f64,
    angle: f64,
}

impl ArchimedeanSpiral {
    pub const DEFAULT_ANGLE_STEP: f64 = 0.1;
    pub const DEFAULT_RADIUS_STEP: f64 = 0.5;

    /// Spiral with the default steps
    pub fn new(center: Point) -> Self {
        Self::with_steps(center, Self::DEFAULT_ANGLE_STEP, Self::DEFAULT_RADIUS_STEP)
    }

    pub fn with_steps(center: Point, angle_step: f64, radius_step: f64) -> Self {
        Self {
            center,
            angle_step,
            radius_step,
            angle: 0.0,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Angle the next call will use
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

impl SpiralPointGenerator for ArchimedeanSpiral {
    fn next_point(&mut self) -> Point {
        let radius = self.radius_step * self.angle;
        let dx = (radius * self.angle.cos()).round_ties_even() as i32;
        let dy = (radius * self.angle.sin()).round_ties_even() as i32;
        let x = self.center.x.saturating_add(dx);
        let y = self.center.y.saturating_add(dy);
        self.angle += self.angle_step;
        Point::new(x, y)
    }
}
