//! This file implements OKLCH, the cylindrical form of OKLab, analogous to the relationship between
//! HSL and RGB. Its lightness channel is the "perceptually uniform lightness" every lightness
//! adjustment works on: lighten, darken, set-lightness, and elevation all move `l` and leave hue and
//! chroma where they were, which is what keeps a darkened blue from drifting purple.

use bound::Bound;
use color::{Color, RGBColor};
use colors::oklabcolor::OKLabColor;
use coord::Coord;

/// A cylindrical form of OKLab.
/// # Example
///
/// ```
/// # use tinct::prelude::*;
/// # use tinct::colors::OKLCHColor;
/// let navy = RGBColor::from((0, 0, 128));
/// let mut lch: OKLCHColor = navy.convert();
/// lch.l += 0.2;
/// let lighter: RGBColor = lch.convert();
/// // still blue, just lighter
/// let (r, g, b) = lighter.int_rgb_tup();
/// assert!(b > 128 && r < b && g < b);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OKLCHColor {
    /// Perceptual lightness, from 0 to 1.
    pub l: f64,
    /// Chroma, the distance from the neutral axis. Unbounded in principle, under about 0.37 for any
    /// color inside sRGB.
    pub c: f64,
    /// Hue in degrees, from 0 to 360.
    pub h: f64,
}

impl Color for OKLCHColor {
    fn from_rgb(rgb: RGBColor) -> OKLCHColor {
        let lab = OKLabColor::from_rgb(rgb);
        let c = lab.b.hypot(lab.a);
        // near-neutral colors have no meaningful hue, and atan2 of two tiny numbers is noise
        let h = if c < 1e-10 {
            0.
        } else {
            lab.b.atan2(lab.a).to_degrees().rem_euclid(360.)
        };
        OKLCHColor { l: lab.l, c, h }
    }

    fn to_rgb(&self) -> RGBColor {
        let (sin, cos) = self.h.to_radians().sin_cos();
        OKLabColor {
            l: self.l,
            a: self.c * cos,
            b: self.c * sin,
        }
        .to_rgb()
    }
}

impl From<Coord> for OKLCHColor {
    fn from(c: Coord) -> OKLCHColor {
        OKLCHColor {
            l: c.x,
            c: c.y,
            h: c.z,
        }
    }
}

impl Into<Coord> for OKLCHColor {
    fn into(self) -> Coord {
        Coord {
            x: self.l,
            y: self.c,
            z: self.h,
        }
    }
}

impl Bound for OKLCHColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., f64::INFINITY), (0., 360.)]
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_gray_has_no_chroma() {
        let gray: OKLCHColor = RGBColor::from((119, 119, 119)).convert();
        assert!(gray.c <= 1e-6);
        assert_eq!(gray.convert::<RGBColor>().int_rgb_tup(), (119, 119, 119));
    }

    #[test]
    fn test_lightness_shift_keeps_hue() {
        let base: OKLCHColor = RGBColor::from((180, 40, 40)).convert();
        let mut shifted = base;
        shifted.l -= 0.15;
        let back: OKLCHColor = shifted.convert::<RGBColor>().convert();
        assert!((back.h - base.h).abs() <= 0.5);
        assert!((back.l - shifted.l).abs() <= 1e-6);
    }

    #[test]
    fn test_round_trip() {
        for &rgb in &[(255, 0, 0), (0, 0, 255), (250, 235, 215), (1, 2, 3)] {
            let lch: OKLCHColor = RGBColor::from(rgb).convert();
            assert_eq!(lch.convert::<RGBColor>().int_rgb_tup(), rgb);
        }
    }
}
