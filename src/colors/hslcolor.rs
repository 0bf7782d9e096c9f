//! This file implements what I refer to as HSL but which would precisely be called sHSL: a simple
//! transformation of sRGB that creates a cylindrical space. HSL has the same problems with
//! perceptual uniformity as sRGB does, which is why lightness adjustments in this crate go through
//! [`OKLCHColor`](super::OKLCHColor) instead, but it is the notation CSS speaks and so it is what
//! `hsl()` strings are parsed into and written out of. *Lightness* in HSL runs from black to fully
//! saturated in the middle to white at the end. This implementation is hexagonal: values are put on a
//! hexagon, and then that hexagon is "squeezed" into a circle. Gray converts to a hue of 0 degrees,
//! although any hue could be used in its place.

use bound::Bound;
use color::{Color, RGBColor};
use coord::Coord;

/// A color in the HSL color space, a direct transformation of the sRGB space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component. Ranges from 0 to 360, as the angle in a cylindrical space. Exactly the same
    /// as the hue component of HSV.
    pub h: f64,
    /// The saturation component. Ranges between 0 and 1.
    pub s: f64,
    /// The lightness component. Ranges from 0 to 1. Defined in HSL as the average of the largest and
    /// smallest color components in RGB.
    pub l: f64,
}

/// Projects an sRGB color onto the hexagon shared by HSL, HSV, and HWB. Returns the hue in degrees,
/// the largest and smallest channels, and the chroma (their difference).
pub(crate) fn hexagonal_hue(rgb: RGBColor) -> (f64, f64, f64) {
    // if you tilt the RGB cube and project it into a hexagon, the equivalent of radius is simply the
    // largest component minus the smallest component
    let max_c = rgb.r.max(rgb.g).max(rgb.b);
    let min_c = rgb.r.min(rgb.g).min(rgb.b);
    let chroma = max_c - min_c;

    let hue = if chroma == 0.0 {
        // undefined for grays: just 0
        0.0
    } else if max_c == rgb.r {
        // in the red sector, green pushes up the hexagon and blue pushes down
        (((rgb.g - rgb.b) / chroma) * 60.0).rem_euclid(360.0)
    } else if max_c == rgb.g {
        ((rgb.b - rgb.r) / chroma) * 60.0 + 120.0
    } else {
        ((rgb.r - rgb.g) / chroma) * 60.0 + 240.0
    };
    (hue, max_c, min_c)
}

/// Goes back from a hue and a chroma to the RGB point on the hexagon with 0 as its smallest channel.
/// Adding the same offset to every channel afterwards moves it to the right lightness or value.
pub(crate) fn hexagon_point(hue: f64, chroma: f64) -> (f64, f64, f64) {
    let h = hue.rem_euclid(360.0);
    // the second-largest component, where chroma is the largest and the smallest is 0
    let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    if h < 60.0 {
        (chroma, x, 0.0)
    } else if h < 120.0 {
        (x, chroma, 0.0)
    } else if h < 180.0 {
        (0.0, chroma, x)
    } else if h < 240.0 {
        (0.0, x, chroma)
    } else if h < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    }
}

impl Color for HSLColor {
    fn from_rgb(rgb: RGBColor) -> HSLColor {
        let rgb = rgb.clamp();
        let (hue, max_c, min_c) = hexagonal_hue(rgb);
        let chroma = max_c - min_c;
        // lightness is the average of the largest and smallest components: a double hex cone
        let lightness = (max_c + min_c) / 2.0;
        // saturation is chroma relative to the largest chroma possible at this lightness
        let saturation = if lightness >= 1.0 || lightness <= 0.0 {
            0.0
        } else {
            chroma / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        HSLColor {
            h: hue,
            s: saturation,
            l: lightness,
        }
    }

    fn to_rgb(&self) -> RGBColor {
        let chroma = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let (r1, g1, b1) = hexagon_point(self.h, chroma);
        let offset = self.l - chroma / 2.0;
        RGBColor {
            r: r1 + offset,
            g: g1 + offset,
            b: b1 + offset,
        }
    }
}

impl From<Coord> for HSLColor {
    fn from(c: Coord) -> HSLColor {
        HSLColor {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl Into<Coord> for HSLColor {
    fn into(self) -> Coord {
        Coord {
            x: self.h,
            y: self.s,
            z: self.l,
        }
    }
}

impl Bound for HSLColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 360.), (0., 1.), (0., 1.)]
    }
}
