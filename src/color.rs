//! This file defines the [`Color`] trait and the sRGB color type, [`RGBColor`], that every other
//! color space in this crate converts through. The web only ever hands us sRGB, so sRGB is the hub:
//! HSL, HSV, and HWB are direct reshapings of it, and OKLab goes through linear light on the way.

use std::fmt;
use std::str::FromStr;

use bound::Bound;
use coord::Coord;
use cssnumeric::CSSParseError;

/// A color representation that can be converted to and from sRGB. Implementing the two methods gives
/// conversion to every other `Color` for free through [`convert`](Color::convert).
///
/// # Example
/// ```
/// # use tinct::prelude::*;
/// # use tinct::colors::HSLColor;
/// let red = RGBColor{r: 1., g: 0., b: 0.};
/// let red_hsl: HSLColor = red.convert();
/// assert!((red_hsl.l - 0.5).abs() <= 1e-10);
/// ```
pub trait Color: Sized {
    /// Converts from an sRGB color into this representation.
    fn from_rgb(rgb: RGBColor) -> Self;
    /// Converts this color into sRGB. The result may be outside of the gamut for spaces larger than
    /// sRGB, such as OKLab: use [`Bound::clamp`] if that matters.
    fn to_rgb(&self) -> RGBColor;
    /// Converts between any two `Color` types by way of sRGB.
    fn convert<T: Color>(&self) -> T {
        T::from_rgb(self.to_rgb())
    }
}

/// A color in the sRGB space, with each channel ranging between 0 and 1. Values outside of that range
/// can appear as intermediate results of conversion, but should be clamped before being displayed.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: f64,
    /// The green channel.
    pub g: f64,
    /// The blue channel.
    pub b: f64,
}

impl Color for RGBColor {
    fn from_rgb(rgb: RGBColor) -> RGBColor {
        rgb
    }
    fn to_rgb(&self) -> RGBColor {
        *self
    }
}

impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl Into<Coord> for RGBColor {
    fn into(self) -> Coord {
        Coord {
            x: self.r,
            y: self.g,
            z: self.b,
        }
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        let (r, g, b) = rgb;
        RGBColor {
            r: f64::from(r) / 255.,
            g: f64::from(g) / 255.,
            b: f64::from(b) / 255.,
        }
    }
}

/// Rounds a unit-interval channel to the nearest byte, clamping first.
pub(crate) fn unit_to_byte(val: f64) -> u8 {
    (val.max(0.).min(1.) * 255.).round() as u8
}

impl RGBColor {
    /// Gets the channels as bytes, clamping and rounding.
    pub fn int_rgb_tup(&self) -> (u8, u8, u8) {
        (unit_to_byte(self.r), unit_to_byte(self.g), unit_to_byte(self.b))
    }

    /// Parses a hex code of 3, 4, 6, or 8 digits after the leading '#', returning the color and its
    /// alpha (1 if the code has no alpha digits).
    ///
    /// # Example
    /// ```
    /// # use tinct::prelude::*;
    /// let (teal, alpha) = RGBColor::from_hex_code("#0088887f").unwrap();
    /// assert_eq!(teal.int_rgb_tup(), (0, 136, 136));
    /// assert!((alpha - 127. / 255.).abs() <= 1e-10);
    /// ```
    /// # Errors
    /// Returns `CSSParseError::InvalidHexCode` if there is no '#', the length is wrong, or a digit is
    /// not hexadecimal.
    pub fn from_hex_code(hex: &str) -> Result<(RGBColor, f64), CSSParseError> {
        if !hex.starts_with('#') {
            return Err(CSSParseError::InvalidHexCode);
        }
        let digits = &hex[1..];
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CSSParseError::InvalidHexCode);
        }
        // short forms repeat each digit: #f0a becomes #ff00aa
        let expanded: String = match digits.len() {
            3 | 4 => digits.chars().flat_map(|c| vec![c, c]).collect(),
            6 | 8 => digits.to_string(),
            _ => return Err(CSSParseError::InvalidHexCode),
        };
        let mut bytes = Vec::with_capacity(4);
        for i in 0..expanded.len() / 2 {
            let byte = u8::from_str_radix(&expanded[2 * i..2 * i + 2], 16)
                .map_err(|_| CSSParseError::InvalidHexCode)?;
            bytes.push(byte);
        }
        let alpha = if bytes.len() == 4 {
            f64::from(bytes[3]) / 255.
        } else {
            1.
        };
        Ok((RGBColor::from((bytes[0], bytes[1], bytes[2])), alpha))
    }

    /// Writes the color as an uppercase six-digit hex code, like "#6E66CC".
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.int_rgb_tup();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Writes the color as an uppercase eight-digit hex code with the given alpha in the last pair.
    pub fn to_hexa(&self, alpha: f64) -> String {
        format!("{}{:02X}", self.to_hex(), unit_to_byte(alpha))
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RGBColor {
    type Err = CSSParseError;

    /// Parses a hex code, discarding any alpha digits.
    fn from_str(s: &str) -> Result<RGBColor, CSSParseError> {
        RGBColor::from_hex_code(s.trim()).map(|(rgb, _)| rgb)
    }
}

impl Bound for RGBColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hex_parsing() {
        let (c, a) = RGBColor::from_hex_code("#FF0000").unwrap();
        assert_eq!(c.int_rgb_tup(), (255, 0, 0));
        assert_eq!(a, 1.);
        let (c, a) = RGBColor::from_hex_code("#f0a").unwrap();
        assert_eq!(c.int_rgb_tup(), (255, 0, 170));
        assert_eq!(a, 1.);
        let (c, a) = RGBColor::from_hex_code("#f0a0").unwrap();
        assert_eq!(c.int_rgb_tup(), (255, 0, 170));
        assert_eq!(a, 0.);
        let (_, a) = RGBColor::from_hex_code("#11223380").unwrap();
        assert!((a - 128. / 255.).abs() <= 1e-10);
    }

    #[test]
    fn test_hex_errors() {
        assert_eq!(RGBColor::from_hex_code("FF0000"), Err(CSSParseError::InvalidHexCode));
        assert_eq!(RGBColor::from_hex_code("#FF00"), Ok((RGBColor{r: 1., g: 1., b: 0.}, 0.)));
        assert_eq!(RGBColor::from_hex_code("#FF000"), Err(CSSParseError::InvalidHexCode));
        assert_eq!(RGBColor::from_hex_code("#GG0000"), Err(CSSParseError::InvalidHexCode));
        assert_eq!(RGBColor::from_hex_code("#+F0000"), Err(CSSParseError::InvalidHexCode));
        assert_eq!(RGBColor::from_hex_code("#"), Err(CSSParseError::InvalidHexCode));
    }

    #[test]
    fn test_hex_output() {
        let lavender = RGBColor::from((110, 102, 204));
        assert_eq!(lavender.to_string(), "#6E66CC");
        assert_eq!(lavender.to_hexa(0.5), "#6E66CC80");
        assert_eq!(lavender.to_hexa(1.), "#6E66CCFF");
        // out-of-gamut channels clamp on the way out
        let wild = RGBColor{r: 1.4, g: -0.2, b: 0.5};
        assert_eq!(wild.to_hex(), "#FF0080");
    }

    #[test]
    fn test_from_str() {
        let c: RGBColor = " #00ff00 ".parse().unwrap();
        assert_eq!(c.int_rgb_tup(), (0, 255, 0));
        assert!("rgb(0, 255, 0)".parse::<RGBColor>().is_err());
    }
}
