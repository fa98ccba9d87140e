use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Numeric kind shared by both coordinates of a point.
///
/// Implemented for `i64` (the integer kind used by the placement pipeline)
/// and `f64`. Every operation that can produce a value outside the kind
/// goes through `from_f64`, which truncates toward zero for integers.
/// Integer arithmetic saturates at the bounds of `i64`.
pub trait Scalar:
    Copy + PartialEq + PartialOrd + Debug + Display + FromStr + Default + Send + Sync + 'static
{
    /// Wide enough to hold the product of two coordinate differences.
    type Wide: Copy + PartialOrd + Debug + Display;

    fn zero() -> Self;
    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;

    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    fn neg(self) -> Self;

    /// Kind-appropriate division. `None` when `rhs` is zero.
    fn checked_div(self, rhs: Self) -> Option<Self>;
    fn pow(self, exp: Self) -> Self;
    fn round_to(self, places: i32) -> Self;
    fn floor(self) -> Self;

    fn widen(self) -> Self::Wide;
    fn wide_sub(lhs: Self::Wide, rhs: Self::Wide) -> Self::Wide;
    fn wide_mul(lhs: Self::Wide, rhs: Self::Wide) -> Self::Wide;
}

impl Scalar for i64 {
    type Wide = i128;

    fn zero() -> Self {
        0
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value.trunc() as i64
    }

    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }

    fn sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }

    fn mul(self, rhs: Self) -> Self {
        self.saturating_mul(rhs)
    }

    fn neg(self) -> Self {
        self.saturating_neg()
    }

    // Floor division, so -7 / 2 == -4.
    fn checked_div(self, rhs: Self) -> Option<Self> {
        match rhs {
            0 => return None,
            -1 => return Some(self.saturating_neg()),
            _ => {}
        }
        let quotient = self / rhs;
        if self % rhs != 0 && ((self < 0) != (rhs < 0)) {
            Some(quotient - 1)
        } else {
            Some(quotient)
        }
    }

    fn pow(self, exp: Self) -> Self {
        if exp < 0 {
            return Self::from_f64(self.to_f64().powf(exp.to_f64()));
        }
        let exp = u32::try_from(exp).unwrap_or(u32::MAX);
        self.saturating_pow(exp)
    }

    fn round_to(self, places: i32) -> Self {
        if places >= 0 {
            return self;
        }
        let factor = 10f64.powi(-places);
        Self::from_f64((self.to_f64() / factor).round() * factor)
    }

    fn floor(self) -> Self {
        self
    }

    fn widen(self) -> i128 {
        i128::from(self)
    }

    fn wide_sub(lhs: i128, rhs: i128) -> i128 {
        lhs.saturating_sub(rhs)
    }

    fn wide_mul(lhs: i128, rhs: i128) -> i128 {
        lhs.saturating_mul(rhs)
    }
}

impl Scalar for f64 {
    type Wide = f64;

    fn zero() -> Self {
        0.0
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }

    fn mul(self, rhs: Self) -> Self {
        self * rhs
    }

    fn neg(self) -> Self {
        -self
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs == 0.0 { None } else { Some(self / rhs) }
    }

    fn pow(self, exp: Self) -> Self {
        self.powf(exp)
    }

    fn round_to(self, places: i32) -> Self {
        let factor = 10f64.powi(places);
        (self * factor).round() / factor
    }

    fn floor(self) -> Self {
        f64::floor(self)
    }

    fn widen(self) -> f64 {
        self
    }

    fn wide_sub(lhs: f64, rhs: f64) -> f64 {
        lhs - rhs
    }

    fn wide_mul(lhs: f64, rhs: f64) -> f64 {
        lhs * rhs
    }
}
