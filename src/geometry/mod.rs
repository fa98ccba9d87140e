//! Point and rectangle value types.
//!
//! Both are generic over a [`Scalar`] numeric kind; the placement pipeline
//! works in [`Coord`].

mod point;
mod rect;
mod scalar;

pub use point::{Point, PointLike, line_to_point_distance};
pub use rect::Rect;
pub use scalar::Scalar;

/// Coordinate type used for screens, windows and free spaces.
pub type Coord = i64;
