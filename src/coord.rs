//! This module contains a struct, [`Coord`](coord::Coord), that holds the three non-alpha channels of
//! a color in whatever space it happens to live in. Every color space in this crate converts to and
//! from a `Coord`, which lets channel clamping and scaling be written once instead of per space.

use std::ops::{Add, Div, Mul, Sub};
use num;
use num::{Num, NumCast};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can be multiplied by a [`Coord`] to scale
/// it. This has no added functionality: it's just for convenience.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// Three channels of a color. The axes carry no meaning of their own: a color that converts to a
/// `Coord` maps its components onto `x`, `y`, and `z` in the order of the letters in its name, so
/// `HSLColor` puts hue on `x`, saturation on `y`, and lightness on `z`.
///
/// # Examples
/// ```
/// # use tinct::coord::Coord;
/// let unit = Coord{x: 1., y: 0.5, z: 0.25};
/// // scale unit-interval channels up to bytes
/// let bytes = unit * 255u8;
/// assert_eq!(bytes, Coord{x: 255., y: 127.5, z: 63.75});
/// let back = bytes / 255.;
/// assert_eq!(back, unit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first channel.
    pub x: f64,
    /// The second channel.
    pub y: f64,
    /// The third channel.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// Scalar multiplication and division: (a, b, c) * s = (sa, sb, sc). Not commutative, but it'll do.
impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        // every Scalar we use is a primitive number, so the cast can't fail; NaN keeps bad input
        // visible instead of hiding it
        let r: f64 = num::cast(rhs).unwrap_or(f64::NAN);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl<U: Scalar> Div<U> for Coord {
    type Output = Coord;
    fn div(self, rhs: U) -> Coord {
        let r: f64 = num::cast(rhs).unwrap_or(f64::NAN);
        Coord {
            x: self.x / r,
            y: self.y / r,
            z: self.z / r,
        }
    }
}

impl Coord {
    /// Returns `true` if every channel is a finite number. Conversions that go through a division or
    /// a power can produce NaN on degenerate input, and the formatter checks this before it writes
    /// anything out.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Applies a function to each channel, returning a new `Coord`.
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Coord {
        Coord {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// The channels as an array, in axis order.
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Coord {
    fn from(arr: [f64; 3]) -> Coord {
        Coord {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }
}
