//! This module describes the Bound trait, which allows for a description of the legal range of each
//! channel in a color space. Every arithmetic adjustment in this crate ends with a clamp through this
//! trait, so no channel ever leaves its range: sRGB stays within 0-1, saturation and lightness within
//! 0-1, hue within 0-360.

use color::Color;
use coord::Coord;

/// Describes a color space in which each channel has explicit bounds. Spaces without a natural upper
/// bound on some channel (OKLCH chroma, for example) can use infinity there.
/// # Example
/// Bound a clearly-problematic color within sRGB.
///
/// ```
/// # use tinct::prelude::*;
/// let out_of_bounds = RGBColor{r: 1.3, g: -0.1, b: 0.5};
/// let in_bounds = out_of_bounds.clamp();
/// assert_eq!(in_bounds, RGBColor{r: 1., g: 0., b: 0.5});
/// ```
pub trait Bound: Color + Into<Coord> + From<Coord> + Copy {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component of the color space, in the order that they appear in the Coord representation.
    fn bounds() -> [(f64, f64); 3];
    /// Given a Coord, returns a Coord such that each component has been clamped to the correct
    /// bounds. NaN stays NaN, so the formatter can still see that something went wrong.
    fn clamp_coord(point: Coord) -> Coord {
        let ranges = Self::bounds();
        let mut point_vals = [0.; 3];
        for (i, component) in point.to_array().iter().enumerate() {
            let (min, max) = ranges[i];
            point_vals[i] = if *component < min {
                min
            } else if *component > max {
                max
            } else {
                *component
            };
        }
        Coord::from(point_vals)
    }
    /// Returns a copy of this color with every channel clamped into range.
    fn clamp(self) -> Self {
        Self::from(Self::clamp_coord(self.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::Bound;
    use color::RGBColor;
    use colors::hslcolor::HSLColor;
    use colors::hsvcolor::HSVColor;
    use colors::oklchcolor::OKLCHColor;

    #[test]
    fn test_zero_one_bounds() {
        let color1 = RGBColor{r: 0.1, g: -0.2, b: 1.2};
        assert_eq!(color1.clamp(), RGBColor{r: 0.1, g: 0., b: 1.});
        assert_eq!(color1.clamp().clamp(), color1.clamp());
    }

    #[test]
    fn test_hue_bounds() {
        let color1 = HSLColor{h: -24.0, s: -0.2, l: 1.1};
        let color2 = HSVColor{h: 375.0, s: 0.2, v: 0.5};
        let clamped1 = color1.clamp();
        assert_eq!((clamped1.h, clamped1.s, clamped1.l), (0., 0., 1.));
        let clamped2 = color2.clamp();
        assert_eq!((clamped2.h, clamped2.s, clamped2.v), (360., 0.2, 0.5));
    }

    #[test]
    fn test_unbounded_chroma() {
        let vivid = OKLCHColor{l: 1.2, c: 0.9, h: 20.};
        let clamped = vivid.clamp();
        assert_eq!((clamped.l, clamped.c, clamped.h), (1., 0.9, 20.));
    }

    #[test]
    fn test_nan_survives() {
        let broken = RGBColor{r: f64::NAN, g: 0.5, b: 0.5};
        assert!(broken.clamp().r.is_nan());
        assert_eq!(broken.clamp().g, 0.5);
    }
}
