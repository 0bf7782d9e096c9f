//! HWB (hue, whiteness, blackness) is the third reshaping of the sRGB hexagon. It exists here because
//! "whiten" and "blacken" are defined on its axes: mixing in white or black paint is exactly what
//! raising whiteness or blackness does.

use bound::Bound;
use color::{Color, RGBColor};
use colors::hsvcolor::HSVColor;
use coord::Coord;

/// A color given as a hue plus the amounts of white and black mixed into the pure hue.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HWBColor {
    /// The hue, in degrees from 0 to 360. The same hue as HSL and HSV.
    pub h: f64,
    /// The whiteness, between 0 and 1.
    pub w: f64,
    /// The blackness, between 0 and 1.
    pub b: f64,
}

impl Color for HWBColor {
    fn from_rgb(rgb: RGBColor) -> HWBColor {
        let rgb = rgb.clamp();
        let hsv: HSVColor = rgb.convert();
        HWBColor {
            h: hsv.h,
            w: rgb.r.min(rgb.g).min(rgb.b),
            b: 1. - hsv.v,
        }
    }

    fn to_rgb(&self) -> RGBColor {
        // past a total of 1 the hue no longer matters: normalize to a gray
        let total = self.w + self.b;
        if total >= 1. {
            let gray = self.w / total;
            return RGBColor {
                r: gray,
                g: gray,
                b: gray,
            };
        }
        let v = 1. - self.b;
        let s = if v == 0. { 0. } else { 1. - self.w / v };
        HSVColor { h: self.h, s, v }.to_rgb()
    }
}

impl From<Coord> for HWBColor {
    fn from(c: Coord) -> HWBColor {
        HWBColor {
            h: c.x,
            w: c.y,
            b: c.z,
        }
    }
}

impl Into<Coord> for HWBColor {
    fn into(self) -> Coord {
        Coord {
            x: self.h,
            y: self.w,
            z: self.b,
        }
    }
}

impl Bound for HWBColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 360.), (0., 1.), (0., 1.)]
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hwb_round_trip() {
        let muted = RGBColor::from((200, 120, 80));
        let hwb: HWBColor = muted.convert();
        assert!((hwb.w - 80. / 255.).abs() <= 1e-10);
        assert!((hwb.b - 55. / 255.).abs() <= 1e-10);
        assert_eq!(hwb.convert::<RGBColor>().int_rgb_tup(), (200, 120, 80));
    }

    #[test]
    fn test_saturated_whiteness_is_gray() {
        let over = HWBColor{h: 120., w: 0.6, b: 0.6};
        let rgb = over.to_rgb();
        assert_eq!(rgb.int_rgb_tup(), (128, 128, 128));
    }
}
