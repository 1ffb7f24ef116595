//! Core geometric types for the cloud layouter

/// A 2D integer point in canvas coordinates (y grows downward)
///
/// Derived coordinates (box edges, centers, spiral offsets) saturate at the
/// `i32` bounds instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Requested footprint of a shape
///
/// Values are not validated on construction; the layouter rejects
/// non-positive dimensions when a shape is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Both dimensions strictly positive
    pub fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// An axis-aligned box given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Box of the given size whose center (as reported by [`BoundingBox::center`]) is `center`
    pub fn centered_at(center: Point, size: Size) -> Self {
        Self::new(
            center.x.saturating_sub(size.width / 2),
            center.y.saturating_sub(size.height / 2),
            size.width,
            size.height,
        )
    }

    /// Right edge x-coordinate (exclusive)
    pub fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    /// Bottom edge y-coordinate (exclusive)
    pub fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Center point, rounded toward the top-left corner
    pub fn center(&self) -> Point {
        Point::new(
            self.left.saturating_add(self.width / 2),
            self.top.saturating_add(self.height / 2),
        )
    }

    /// Check if this box overlaps another
    ///
    /// Both axes are treated as half-open ranges, so boxes that only share
    /// an edge or a corner do not intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        other.left < self.right()
            && self.left < other.right()
            && other.top < self.bottom()
            && self.top < other.bottom()
    }

    /// Copy of this box moved by the given offsets
    pub fn translate(&self, dx: i32, dy: i32) -> BoundingBox {
        BoundingBox::new(
            self.left.saturating_add(dx),
            self.top.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    /// Smallest box containing both
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox::new(
            left,
            top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
    }

    /// Longer side divided by shorter side (1.0 for a square)
    pub fn aspect_ratio(&self) -> f64 {
        let long = self.width.max(self.height) as f64;
        let short = self.width.min(self.height) as f64;
        long / short
    }
}
