//! This module implements the HSV color space, a cousin of the HSL color space. The definition of
//! value differs from lightness: it goes from black to full saturation instead of black to
//! white. This makes value an extraordinarily poor analog of luminance, but `hsv()` strings are a
//! common interchange format for color pickers, and the random generator emits them.

use bound::Bound;
use color::{Color, RGBColor};
use colors::hslcolor::{hexagon_point, hexagonal_hue};
use coord::Coord;

/// An HSV color, defining parameters for hue, saturation, and value from the RGB space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, described as an angle that ranges between 0 and 360 in degrees.
    pub h: f64,
    /// The saturation, defined as the radius of the HSV cylinder. Ranges between 0 and 1.
    pub s: f64,
    /// The value, defined as the largest RGB primary value of a color. Ranges between 0 and 1.
    pub v: f64,
}

impl Color for HSVColor {
    fn from_rgb(rgb: RGBColor) -> HSVColor {
        let rgb = rgb.clamp();
        let (hue, max_c, min_c) = hexagonal_hue(rgb);
        let chroma = max_c - min_c;
        let saturation = if max_c == 0.0 { 0.0 } else { chroma / max_c };
        HSVColor {
            h: hue,
            s: saturation,
            v: max_c,
        }
    }

    fn to_rgb(&self) -> RGBColor {
        let chroma = self.v * self.s;
        let (r1, g1, b1) = hexagon_point(self.h, chroma);
        let offset = self.v - chroma;
        RGBColor {
            r: r1 + offset,
            g: g1 + offset,
            b: b1 + offset,
        }
    }
}

impl From<Coord> for HSVColor {
    fn from(c: Coord) -> HSVColor {
        HSVColor {
            h: c.x,
            s: c.y,
            v: c.z,
        }
    }
}

impl Into<Coord> for HSVColor {
    fn into(self) -> Coord {
        Coord {
            x: self.h,
            y: self.s,
            z: self.v,
        }
    }
}

impl Bound for HSVColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 360.), (0., 1.), (0., 1.)]
    }
}
