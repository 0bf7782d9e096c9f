//! This file implements OKLab, Björn Ottosson's perceptually uniform space. It plays the role CIELAB
//! used to play, with noticeably better hue linearity for blues and a lightness axis that tracks
//! perceived lightness closely enough to drive every lighten/darken/elevation adjustment in this
//! crate. The conversion runs through linear-light sRGB, so the transfer function lives here too.

use bound::Bound;
use color::{Color, RGBColor};
use consts::{mat_mul, LINEAR_SRGB_TO_LMS, LMS_TO_LINEAR_SRGB, LMS_TO_OKLAB, OKLAB_TO_LMS};
use coord::Coord;

/// A color in OKLab: a lightness axis and two opponent axes, green-red (`a`) and blue-yellow (`b`).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OKLabColor {
    /// Perceptual lightness, from 0 (black) to 1 (white).
    pub l: f64,
    /// The green-red axis. Roughly -0.4 to 0.4 for colors inside sRGB.
    pub a: f64,
    /// The blue-yellow axis. Roughly -0.4 to 0.4 for colors inside sRGB.
    pub b: f64,
}

/// Removes the sRGB transfer curve from a single channel.
pub(crate) fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies the sRGB transfer curve to a single linear channel.
pub(crate) fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1. / 2.4) - 0.055
    }
}

impl Color for OKLabColor {
    fn from_rgb(rgb: RGBColor) -> OKLabColor {
        let linear = [
            srgb_to_linear(rgb.r),
            srgb_to_linear(rgb.g),
            srgb_to_linear(rgb.b),
        ];
        let lms = mat_mul(&LINEAR_SRGB_TO_LMS, linear);
        let lms_cbrt = [lms[0].cbrt(), lms[1].cbrt(), lms[2].cbrt()];
        let lab = mat_mul(&LMS_TO_OKLAB, lms_cbrt);
        OKLabColor {
            l: lab[0],
            a: lab[1],
            b: lab[2],
        }
    }

    /// Converts back to sRGB. Colors with high chroma can land outside of the sRGB gamut: nothing is
    /// clamped here.
    fn to_rgb(&self) -> RGBColor {
        let lms_cbrt = mat_mul(&OKLAB_TO_LMS, [self.l, self.a, self.b]);
        let lms = [
            lms_cbrt[0].powi(3),
            lms_cbrt[1].powi(3),
            lms_cbrt[2].powi(3),
        ];
        let linear = mat_mul(&LMS_TO_LINEAR_SRGB, lms);
        RGBColor {
            r: linear_to_srgb(linear[0]),
            g: linear_to_srgb(linear[1]),
            b: linear_to_srgb(linear[2]),
        }
    }
}

impl From<Coord> for OKLabColor {
    fn from(c: Coord) -> OKLabColor {
        OKLabColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl Into<Coord> for OKLabColor {
    fn into(self) -> Coord {
        Coord {
            x: self.l,
            y: self.a,
            z: self.b,
        }
    }
}

impl Bound for OKLabColor {
    fn bounds() -> [(f64, f64); 3] {
        [
            (0., 1.),
            (f64::NEG_INFINITY, f64::INFINITY),
            (f64::NEG_INFINITY, f64::INFINITY),
        ]
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_white_and_black() {
        let white: OKLabColor = RGBColor{r: 1., g: 1., b: 1.}.convert();
        assert!((white.l - 1.).abs() <= 1e-6);
        assert!(white.a.abs() <= 1e-6);
        assert!(white.b.abs() <= 1e-6);
        let black: OKLabColor = RGBColor{r: 0., g: 0., b: 0.}.convert();
        assert!(black.l.abs() <= 1e-10);
    }

    #[test]
    fn test_known_red() {
        // reference value from the OKLab write-up
        let red: OKLabColor = RGBColor{r: 1., g: 0., b: 0.}.convert();
        assert!((red.l - 0.62796).abs() <= 1e-4);
        assert!((red.a - 0.22486).abs() <= 1e-4);
        assert!((red.b - 0.12585).abs() <= 1e-4);
    }

    #[test]
    fn test_round_trip() {
        for &rgb in &[(12, 200, 77), (255, 255, 0), (30, 30, 30), (100, 149, 237)] {
            let lab: OKLabColor = RGBColor::from(rgb).convert();
            assert_eq!(lab.convert::<RGBColor>().int_rgb_tup(), rgb);
        }
    }

    #[test]
    fn test_transfer_curve_inverts() {
        for &c in &[0., 0.02, 0.04045, 0.2, 0.5, 0.9, 1.] {
            assert!((linear_to_srgb(srgb_to_linear(c)) - c).abs() <= 1e-10);
        }
    }
}
