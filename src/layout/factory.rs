//! Construction of candidate shapes

use super::shape::{CloudShape, RectangleShape};
use super::types::{BoundingBox, Point, Size};

/// Builds a shape of a given footprint around a center point
///
/// Sizes are not validated here; the layouter checks them before asking
/// for a shape.
pub trait ShapeFactory {
    fn create(&self, center: Point, size: Size) -> Box<dyn CloudShape>;
}

/// Factory for [`RectangleShape`] footprints
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleFactory;

impl ShapeFactory for RectangleFactory {
    fn create(&self, center: Point, size: Size) -> Box<dyn CloudShape> {
        Box::new(RectangleShape::new(BoundingBox::centered_at(center, size)))
    }
}
