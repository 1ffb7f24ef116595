//! Placeable shapes and the rectangle variant

use std::any::Any;
use std::fmt;

use super::error::LayoutError;
use super::types::{BoundingBox, Point};

/// A footprint that can be placed in a cloud
///
/// Shapes are immutable values: moving one with [`CloudShape::shift`]
/// yields a new shape and leaves the receiver untouched.
pub trait CloudShape: fmt::Debug + Send + Sync {
    /// Short name of the shape variant, used in error messages
    fn kind(&self) -> &'static str;

    /// Center of the footprint, rounded toward the top-left
    fn center(&self) -> Point;

    /// Smallest axis-aligned box enclosing the footprint
    fn bounding_box(&self) -> BoundingBox;

    /// Whether the two footprints overlap
    ///
    /// Returns [`LayoutError::UnsupportedShapeKind`] when `other` is a
    /// variant this shape does not know how to compare against.
    fn intersects(&self, other: &dyn CloudShape) -> Result<bool, LayoutError>;

    /// A copy of this shape translated by the given offsets
    fn shift(&self, dx: i32, dy: i32) -> Box<dyn CloudShape>;

    /// Access to the concrete type for variant dispatch
    fn as_any(&self) -> &dyn Any;
}

/// Axis-aligned rectangle footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangleShape {
    bounds: BoundingBox,
}

impl RectangleShape {
    pub const KIND: &'static str = "rectangle";

    pub fn new(bounds: BoundingBox) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }
}

impl CloudShape for RectangleShape {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn center(&self) -> Point {
        self.bounds.center()
    }

    fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    fn intersects(&self, other: &dyn CloudShape) -> Result<bool, LayoutError> {
        match other.as_any().downcast_ref::<RectangleShape>() {
            Some(rect) => Ok(self.bounds.intersects(&rect.bounds)),
            None => Err(LayoutError::unsupported_kind(Self::KIND, other.kind())),
        }
    }

    fn shift(&self, dx: i32, dy: i32) -> Box<dyn CloudShape> {
        Box::new(RectangleShape::new(self.bounds.translate(dx, dy)))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Dot(Point);

    impl CloudShape for Dot {
        fn kind(&self) -> &'static str {
            "dot"
        }

        fn center(&self) -> Point {
            self.0
        }

        fn bounding_box(&self) -> BoundingBox {
            BoundingBox::new(self.0.x, self.0.y, 1, 1)
        }

        fn intersects(&self, _other: &dyn CloudShape) -> Result<bool, LayoutError> {
            Ok(false)
        }

        fn shift(&self, dx: i32, dy: i32) -> Box<dyn CloudShape> {
            Box::new(Dot(Point::new(self.0.x + dx, self.0.y + dy)))
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_rectangle_center() {
        let rect = RectangleShape::new(BoundingBox::new(95, 90, 10, 20));
        assert_eq!(rect.center(), Point::new(100, 100));
    }

    #[test]
    fn test_rectangles_intersect() {
        let a = RectangleShape::new(BoundingBox::new(0, 0, 10, 10));
        let b = RectangleShape::new(BoundingBox::new(9, 9, 10, 10));
        assert_eq!(a.intersects(&b), Ok(true));
    }

    #[test]
    fn test_touching_rectangles_do_not_intersect() {
        let a = RectangleShape::new(BoundingBox::new(0, 0, 10, 10));
        let b = RectangleShape::new(BoundingBox::new(10, 0, 10, 10));
        assert_eq!(a.intersects(&b), Ok(false));
        assert_eq!(b.intersects(&a), Ok(false));
    }

    #[test]
    fn test_shift_returns_new_shape() {
        let rect = RectangleShape::new(BoundingBox::new(0, 0, 10, 20));
        let moved = rect.shift(3, -4);
        assert_eq!(moved.bounding_box(), BoundingBox::new(3, -4, 10, 20));
        assert_eq!(rect.bounds(), BoundingBox::new(0, 0, 10, 20));
    }

    #[test]
    fn test_shifted_shape_keeps_kind() {
        let rect = RectangleShape::new(BoundingBox::new(0, 0, 10, 20));
        let moved = rect.shift(1, 1);
        assert_eq!(moved.kind(), RectangleShape::KIND);
        assert!(moved.as_any().downcast_ref::<RectangleShape>().is_some());
    }

    #[test]
    fn test_foreign_kind_is_unsupported() {
        let rect = RectangleShape::new(BoundingBox::new(0, 0, 10, 10));
        let dot = Dot(Point::new(5, 5));
        assert_eq!(
            rect.intersects(&dot),
            Err(LayoutError::unsupported_kind("rectangle", "dot"))
        );
    }
}
