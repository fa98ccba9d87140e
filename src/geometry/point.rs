use std::fmt;
use std::str::FromStr;

use super::scalar::Scalar;
use crate::error::GeometryError;

// Tried in order; space goes last so that "(4, 2)" splits on the comma.
const DELIMITERS: [char; 6] = [',', ';', ':', '-', '|', ' '];

/// Anything that exposes an `x` and a `y` of the same numeric kind.
pub trait PointLike<T: Scalar> {
    fn x(&self) -> T;
    fn y(&self) -> T;
}

/// A 2D point or vector. Every operation returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<T: Scalar = i64> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }

    pub fn from_slice(values: &[T]) -> Result<Self, GeometryError> {
        match values {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(GeometryError::Shape(values.len())),
        }
    }

    pub fn from_point_like<P: PointLike<T> + ?Sized>(point: &P) -> Self {
        Self::new(point.x(), point.y())
    }

    pub fn cast<U: Scalar>(self) -> Point<U> {
        Point::new(U::from_f64(self.x.to_f64()), U::from_f64(self.y.to_f64()))
    }

    pub fn map(self, f: impl Fn(T) -> T) -> Self {
        Self::new(f(self.x), f(self.y))
    }

    pub fn map2(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        Self::new(f(self.x, other.x), f(self.y, other.y))
    }

    pub fn add(self, other: Self) -> Self {
        self.map2(other, T::add)
    }

    pub fn add_scalar(self, value: T) -> Self {
        self.map(|c| c.add(value))
    }

    pub fn subtract(self, other: Self) -> Self {
        self.map2(other, T::sub)
    }

    pub fn subtract_scalar(self, value: T) -> Self {
        self.map(|c| c.sub(value))
    }

    pub fn multiply(self, other: Self) -> Self {
        self.map2(other, T::mul)
    }

    pub fn scale(self, factor: T) -> Self {
        self.map(|c| c.mul(factor))
    }

    /// Scale by a real factor, coercing the result back to this point's kind.
    pub fn scale_by(self, factor: f64) -> Self {
        self.map(|c| T::from_f64(c.to_f64() * factor))
    }

    pub fn divide(self, other: Self) -> Result<Self, GeometryError> {
        let x = self.x.checked_div(other.x).ok_or(GeometryError::DivisionByZero)?;
        let y = self.y.checked_div(other.y).ok_or(GeometryError::DivisionByZero)?;
        Ok(Self::new(x, y))
    }

    pub fn divide_scalar(self, divisor: T) -> Result<Self, GeometryError> {
        self.divide(Self::new(divisor, divisor))
    }

    pub fn pow(self, other: Self) -> Self {
        self.map2(other, T::pow)
    }

    pub fn pow_scalar(self, exp: T) -> Self {
        self.map(|c| c.pow(exp))
    }

    pub fn negate(self) -> Self {
        self.map(T::neg)
    }

    pub fn dot(self, other: Self) -> T {
        self.x.mul(other.x).add(self.y.mul(other.y))
    }

    /// Euclidean length, always real regardless of kind.
    pub fn magnitude(self) -> f64 {
        self.x.to_f64().hypot(self.y.to_f64())
    }

    pub fn distance_to(self, other: Self) -> f64 {
        self.subtract(other).magnitude()
    }

    /// Rescale so that `magnitude()` equals `value`.
    pub fn with_magnitude(self, value: f64) -> Result<Self, GeometryError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(self.scale_by(value / magnitude))
    }

    /// Round both coordinates to `places` decimal places.
    pub fn round(self, places: i32) -> Self {
        self.map(|c| c.round_to(places))
    }

    pub fn floor(self) -> Self {
        self.map(T::floor)
    }

    /// The `x y` form, which `FromStr` reads back.
    pub fn coords_string(&self) -> String {
        format!("{} {}", self.x, self.y)
    }
}

impl<T: Scalar> PointLike<T> for Point<T> {
    fn x(&self) -> T {
        self.x
    }

    fn y(&self) -> T {
        self.y
    }
}

impl<T: Scalar> PointLike<T> for (T, T) {
    fn x(&self) -> T {
        self.0
    }

    fn y(&self) -> T {
        self.1
    }
}

impl<T: Scalar> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> From<[T; 2]> for Point<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Scalar> FromStr for Point<T> {
    type Err = GeometryError;

    /// Two numbers separated by one of `, ; : - |` or whitespace, optionally
    /// wrapped in parentheses or brackets.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || GeometryError::InvalidFormat(input.to_string());
        let text = input
            .trim()
            .trim_matches(|c: char| c.is_whitespace() || matches!(c, '(' | ')' | '[' | ']'));

        let parts = DELIMITERS
            .iter()
            .find_map(|&delimiter| split_on(text, delimiter))
            .ok_or_else(invalid)?;
        let [x, y] = parts.as_slice() else {
            return Err(invalid());
        };
        let x = x.trim().parse::<T>().map_err(|_| invalid())?;
        let y = y.trim().parse::<T>().map_err(|_| invalid())?;
        Ok(Self::new(x, y))
    }
}

fn split_on(text: &str, delimiter: char) -> Option<Vec<&str>> {
    if delimiter == ' ' {
        let parts: Vec<&str> = text.split_whitespace().collect();
        return text.contains(char::is_whitespace).then_some(parts);
    }

    let positions: Vec<usize> = text
        .char_indices()
        .filter(|&(idx, c)| c == delimiter && (delimiter != '-' || is_separating_dash(text, idx)))
        .map(|(idx, _)| idx)
        .collect();
    if positions.is_empty() {
        return None;
    }

    let mut parts = Vec::with_capacity(positions.len() + 1);
    let mut start = 0;
    for idx in positions {
        parts.push(&text[start..idx]);
        start = idx + delimiter.len_utf8();
    }
    parts.push(&text[start..]);
    Some(parts)
}

// A dash right after a digit separates; anywhere else it is a sign.
fn is_separating_dash(text: &str, idx: usize) -> bool {
    text[..idx]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_digit() || c == '.')
}

/// Distance from `p` to the segment `p1 -> p2`.
///
/// Fails when `p1 == p2`, since the segment has no direction.
pub fn line_to_point_distance<T: Scalar>(
    p1: Point<T>,
    p2: Point<T>,
    p: Point<T>,
) -> Result<f64, GeometryError> {
    let (p1, p2, p) = (p1.cast::<f64>(), p2.cast::<f64>(), p.cast::<f64>());
    let segment = p2.subtract(p1);
    let length_sq = segment.dot(segment);
    if length_sq == 0.0 {
        return Err(GeometryError::DivisionByZero);
    }

    let u = p.subtract(p1).dot(segment) / length_sq;
    let distance = if u <= 0.0 {
        p.distance_to(p1)
    } else if u >= 1.0 {
        p.distance_to(p2)
    } else {
        p.subtract(p1).subtract(segment.scale(u)).magnitude()
    };
    Ok(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wrapped_and_delimited_points() {
        assert_eq!("(3, 4)".parse::<Point>(), Ok(Point::new(3, 4)));
        assert_eq!("  [10;20] ".parse::<Point>(), Ok(Point::new(10, 20)));
        assert_eq!("7:8".parse::<Point>(), Ok(Point::new(7, 8)));
        assert_eq!("7|8".parse::<Point>(), Ok(Point::new(7, 8)));
        assert_eq!("7-8".parse::<Point>(), Ok(Point::new(7, 8)));
        assert_eq!("5 6".parse::<Point>(), Ok(Point::new(5, 6)));
        assert_eq!("1.5, 2".parse::<Point<f64>>(), Ok(Point::new(1.5, 2.0)));
    }

    #[test]
    fn leading_minus_is_a_sign() {
        assert_eq!("-3 4".parse::<Point>(), Ok(Point::new(-3, 4)));
        assert_eq!("3 -4".parse::<Point>(), Ok(Point::new(3, -4)));
        assert_eq!("(-3, -4)".parse::<Point>(), Ok(Point::new(-3, -4)));
        assert_eq!("3--4".parse::<Point>(), Ok(Point::new(3, -4)));
    }

    #[test]
    fn rejects_malformed_points() {
        for bad in ["", "34", "(1, 2, 3)", "a,b", "1.5,2", "1,"] {
            assert_eq!(
                bad.parse::<Point>(),
                Err(GeometryError::InvalidFormat(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn coords_string_round_trips() {
        let point: Point = "(3, 4)".parse().unwrap();
        assert_eq!(point, Point::new(3, 4));
        assert_eq!(point.coords_string(), "3 4");
        assert_eq!(point.coords_string().parse::<Point>(), Ok(point));
        assert_eq!(point.to_string(), "(3, 4)");

        let negative = Point::new(-12, 7);
        assert_eq!(negative.coords_string().parse::<Point>(), Ok(negative));
    }

    #[test]
    fn builds_from_pairs_and_point_likes() {
        assert_eq!(Point::from((1, 2)), Point::new(1, 2));
        assert_eq!(Point::from([1, 2]), Point::new(1, 2));
        assert_eq!(Point::from_point_like(&(5i64, 6i64)), Point::new(5, 6));
        assert_eq!(Point::from_slice(&[1i64, 2]), Ok(Point::new(1, 2)));
        assert_eq!(Point::<i64>::from_slice(&[1, 2, 3]), Err(GeometryError::Shape(3)));
    }

    #[test]
    fn pointwise_and_scalar_arithmetic() {
        let a: Point = Point::new(6, 8);
        let b: Point = Point::new(2, 3);
        assert_eq!(a.add(b), Point::new(8, 11));
        assert_eq!(a.add_scalar(1), Point::new(7, 9));
        assert_eq!(a.subtract(b), Point::new(4, 5));
        assert_eq!(a.subtract_scalar(2), Point::new(4, 6));
        assert_eq!(a.multiply(b), Point::new(12, 24));
        assert_eq!(a.scale(3), Point::new(18, 24));
        assert_eq!(a.divide(b), Ok(Point::new(3, 2)));
        assert_eq!(a.divide_scalar(4), Ok(Point::new(1, 2)));
        assert_eq!(b.pow(Point::new(2, 2)), Point::new(4, 9));
        assert_eq!(b.pow_scalar(3), Point::new(8, 27));
        assert_eq!(a.negate(), Point::new(-6, -8));
        assert_eq!(a.dot(b), 36);
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let a: Point = Point::new(1, 1);
        assert_eq!(a.divide_scalar(0), Err(GeometryError::DivisionByZero));
        assert_eq!(a.divide(Point::new(1, 0)), Err(GeometryError::DivisionByZero));
        assert_eq!(
            Point::<i64>::origin().with_magnitude(5.0),
            Err(GeometryError::DivisionByZero)
        );
    }

    #[test]
    fn magnitude_and_distance() {
        let a: Point = Point::new(3, 4);
        assert_eq!(a.magnitude(), 5.0);
        assert_eq!(a.with_magnitude(10.0), Ok(Point::new(6, 8)));
        assert_eq!(
            Point::new(6.0, 8.0).with_magnitude(5.0),
            Ok(Point::new(3.0, 4.0))
        );

        let b = Point::new(-1, 1);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(a.distance_to(b), b.distance_to(a));

        let c: Point = Point::new(7, -3);
        assert_eq!(c.distance_to(Point::origin()), Point::origin().distance_to(c));
    }

    #[test]
    fn rounding_keeps_kind() {
        assert_eq!(Point::new(1.26, -1.24).round(1), Point::new(1.3, -1.2));
        assert_eq!(Point::new(1.5, -1.5).floor(), Point::new(1.0, -2.0));
        assert_eq!(Point::<i64>::new(3, 4).floor(), Point::new(3, 4));
        assert_eq!(Point::new(1.9, -1.9).cast::<i64>(), Point::new(1, -1));
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let p1: Point = Point::new(0, 0);
        let p2: Point = Point::new(10, 0);
        assert_eq!(line_to_point_distance(p1, p2, Point::new(5, 3)), Ok(3.0));
        assert_eq!(line_to_point_distance(p1, p2, Point::new(-3, 4)), Ok(5.0));
        assert_eq!(line_to_point_distance(p1, p2, Point::new(13, 4)), Ok(5.0));
        assert_eq!(
            line_to_point_distance(p1, p1, Point::new(1, 1)),
            Err(GeometryError::DivisionByZero)
        );
    }
}
