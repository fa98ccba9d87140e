use std::fmt;

use super::point::Point;
use super::scalar::Scalar;

/// Axis-aligned rectangle in screen coordinates (y grows downward).
///
/// No normalization happens on construction: a rectangle whose corners are
/// swapped or coincide is representable, it is just not `is_valid()`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect<T: Scalar = i64> {
    pub top_left: Point<T>,
    pub bottom_right: Point<T>,
}

impl<T: Scalar> Rect<T> {
    pub fn new(top_left: Point<T>, bottom_right: Point<T>) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Rectangle from its top-left corner and its size.
    pub fn from_origin_size(x: T, y: T, width: T, height: T) -> Self {
        let top_left = Point::new(x, y);
        Self::new(top_left, top_left.add(Point::new(width, height)))
    }

    pub fn top(&self) -> T {
        self.top_left.y
    }

    pub fn bottom(&self) -> T {
        self.bottom_right.y
    }

    pub fn left(&self) -> T {
        self.top_left.x
    }

    pub fn right(&self) -> T {
        self.bottom_right.x
    }

    pub fn bottom_left(&self) -> Point<T> {
        Point::new(self.left(), self.bottom())
    }

    pub fn top_right(&self) -> Point<T> {
        Point::new(self.right(), self.top())
    }

    pub fn size(&self) -> Point<T> {
        self.bottom_right.subtract(self.top_left)
    }

    pub fn width(&self) -> T {
        self.size().x
    }

    pub fn height(&self) -> T {
        self.size().y
    }

    /// Width times height, in the widened kind so extreme corners cannot
    /// overflow.
    pub fn area(&self) -> T::Wide {
        let width = T::wide_sub(self.right().widen(), self.left().widen());
        let height = T::wide_sub(self.bottom().widen(), self.top().widen());
        T::wide_mul(width, height)
    }

    /// Strictly positive width and height.
    pub fn is_valid(&self) -> bool {
        self.left() < self.right() && self.top() < self.bottom()
    }

    /// Strict interior containment; points on an edge are outside.
    pub fn point_inside(&self, point: Point<T>) -> bool {
        self.left() < point.x
            && point.x < self.right()
            && self.top() < point.y
            && point.y < self.bottom()
    }

    /// Open-rectangle overlap; rectangles that only share an edge do not
    /// intersect.
    pub fn intersects_with(&self, other: &Rect<T>) -> bool {
        other.left() < self.right()
            && other.top() < self.bottom()
            && other.right() > self.left()
            && other.bottom() > self.top()
    }

    /// Containment within `other`, edges included.
    pub fn is_inside(&self, other: &Rect<T>) -> bool {
        self.left() >= other.left()
            && self.right() <= other.right()
            && self.top() >= other.top()
            && self.bottom() <= other.bottom()
    }

    /// Whether a region of `size` fits inside, comparing width and height.
    pub fn can_hold(&self, size: Point<T>) -> bool {
        let own = self.size();
        own.x >= size.x && own.y >= size.y
    }
}

impl<T: Scalar> fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R({},{},{},{})",
            self.left(),
            self.top(),
            self.right(),
            self.bottom()
        )
    }
}
