//! Circular cloud layouter
//!
//! Places shapes one at a time around a fixed center. The first shape sits
//! exactly on the center. Every later shape is found by walking the spiral
//! until a candidate overlaps nothing, then pulled toward the center one
//! unit per step until the next step would overlap something.

use super::config::LayoutConfig;
use super::error::LayoutError;
use super::factory::{RectangleFactory, ShapeFactory};
use super::shape::CloudShape;
use super::spiral::{ArchimedeanSpiral, SpiralPointGenerator};
use super::types::{BoundingBox, Point, Size};

/// Places shapes around a center so that no two overlap
///
/// Placed shapes are kept in request order and are never moved or removed.
#[derive(Debug)]
pub struct CircularCloudLayouter<G = ArchimedeanSpiral, F = RectangleFactory> {
    center: Point,
    generator: G,
    factory: F,
    shapes: Vec<Box<dyn CloudShape>>,
    max_search_steps: Option<usize>,
}

impl CircularCloudLayouter {
    /// Layouter with the default spiral and rectangle shapes
    pub fn new(center: Point) -> Self {
        Self::with_config(center, &LayoutConfig::default())
    }

    pub fn with_config(center: Point, config: &LayoutConfig) -> Self {
        let generator =
            ArchimedeanSpiral::with_steps(center, config.angle_step, config.radius_step);
        Self {
            max_search_steps: config.max_search_steps,
            ..Self::with_collaborators(center, generator, RectangleFactory)
        }
    }
}

impl<G: SpiralPointGenerator, F: ShapeFactory> CircularCloudLayouter<G, F> {
    /// Layouter with an injected point generator and shape factory
    pub fn with_collaborators(center: Point, generator: G, factory: F) -> Self {
        Self {
            center,
            generator,
            factory,
            shapes: Vec::new(),
            max_search_steps: None,
        }
    }

    /// Fail a placement after trying this many spiral points
    pub fn with_max_search_steps(mut self, steps: usize) -> Self {
        self.max_search_steps = Some(steps);
        self
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// All placed shapes in the order they were requested
    pub fn shapes(&self) -> &[Box<dyn CloudShape>] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Bounding box of the whole cloud, `None` while empty
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.shapes
            .iter()
            .map(|shape| shape.bounding_box())
            .reduce(|acc, bbox| acc.union(&bbox))
    }

    /// Unit step from `point` toward the center on each axis (-1, 0 or 1)
    pub fn step_toward_center(&self, point: Point) -> (i32, i32) {
        (
            self.center.x.cmp(&point.x) as i32,
            self.center.y.cmp(&point.y) as i32,
        )
    }

    /// Place a shape of the given size and return it
    ///
    /// On error the placed collection is left exactly as it was.
    pub fn put_next_shape(&mut self, size: Size) -> Result<&dyn CloudShape, LayoutError> {
        if !size.is_positive() {
            return Err(LayoutError::invalid_size(size.width, size.height));
        }

        let shape = if self.shapes.is_empty() {
            self.factory.create(self.center, size)
        } else {
            let candidate = self.find_free_spot(size)?;
            self.compact(candidate)?
        };

        self.shapes.push(shape);
        let placed = &self.shapes[self.shapes.len() - 1];
        Ok(placed.as_ref())
    }

    /// Walk the spiral until a candidate overlaps nothing already placed
    fn find_free_spot(&mut self, size: Size) -> Result<Box<dyn CloudShape>, LayoutError> {
        let mut steps = 0;
        loop {
            if self.max_search_steps.is_some_and(|limit| steps >= limit) {
                return Err(LayoutError::search_exhausted(steps));
            }
            steps += 1;

            let point = self.generator.next_point();
            let candidate = self.factory.create(point, size);
            if !self.collides(candidate.as_ref())? {
                return Ok(candidate);
            }
        }
    }

    /// Move the shape toward the center one unit at a time while it stays free
    fn compact(&self, mut shape: Box<dyn CloudShape>) -> Result<Box<dyn CloudShape>, LayoutError> {
        loop {
            let (dx, dy) = self.step_toward_center(shape.center());
            if dx == 0 && dy == 0 {
                return Ok(shape);
            }

            let shifted = shape.shift(dx, dy);
            if self.collides(shifted.as_ref())? {
                return Ok(shape);
            }
            shape = shifted;
        }
    }

    fn collides(&self, candidate: &dyn CloudShape) -> Result<bool, LayoutError> {
        for placed in &self.shapes {
            if placed.intersects(candidate)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
