//! The canonical color: whatever string a color came in as, it ends up here as three channels in
//! the native ranges of the space it was written in, plus an alpha. Keeping the original space
//! (instead of collapsing everything to sRGB) is what lets `hsl()` input come back out as the same
//! `hsl()` it went in as, without a detour through rounded bytes.

use std::fmt;
use std::str::FromStr;

use bound::Bound;
use color::{Color, RGBColor};
use colors::{HSLColor, HSVColor};
use coord::Coord;
use csscolor::parse_functional_str;
use cssnumeric::CSSParseError;
use format::{serialize, FormatTarget};
use named::named_color;
use validate::clean_input;

/// The space a [`CanonicalColor`]'s channels are expressed in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    /// Red, green, and blue, each from 0 to 255. Hex codes and named colors land here.
    Rgb,
    /// Hue from 0 to 360, saturation and lightness from 0 to 100.
    Hsl,
    /// Hue from 0 to 360, saturation and value from 0 to 100.
    Hsv,
}

impl ColorSpace {
    /// The legal range of each channel, in axis order.
    pub fn bounds(self) -> [(f64, f64); 3] {
        match self {
            ColorSpace::Rgb => [(0., 255.), (0., 255.), (0., 255.)],
            ColorSpace::Hsl | ColorSpace::Hsv => [(0., 360.), (0., 100.), (0., 100.)],
        }
    }
}

/// A parsed color: three channels in the native ranges of [`ColorSpace`], and an alpha from 0 to 1.
/// Channels are clamped whenever a value is built, so a `CanonicalColor` is always in range. NaN is
/// the one exception: it survives clamping, and the formatter rejects it.
///
/// # Example
/// ```
/// # use tinct::prelude::*;
/// let red: CanonicalColor = "  #FF0000;  ".parse().unwrap();
/// assert_eq!(red.space(), ColorSpace::Rgb);
/// assert_eq!(red.channels().to_array(), [255., 0., 0.]);
/// assert_eq!(red.alpha(), 1.);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalColor {
    space: ColorSpace,
    channels: Coord,
    alpha: f64,
}

fn clamp_channels(space: ColorSpace, channels: Coord) -> Coord {
    let bounds = space.bounds();
    let arr = channels.to_array();
    let mut out = [0.; 3];
    for i in 0..3 {
        let (min, max) = bounds[i];
        // max/min would swallow NaN, so compare explicitly
        out[i] = if arr[i] < min {
            min
        } else if arr[i] > max {
            max
        } else {
            arr[i]
        };
    }
    Coord::from(out)
}

fn clamp_alpha(alpha: f64) -> f64 {
    if alpha < 0. {
        0.
    } else if alpha > 1. {
        1.
    } else {
        alpha
    }
}

impl CanonicalColor {
    /// Builds a color from channels in the native ranges of `space`, clamping each into range.
    pub fn new(space: ColorSpace, channels: Coord, alpha: f64) -> CanonicalColor {
        CanonicalColor {
            space,
            channels: clamp_channels(space, channels),
            alpha: clamp_alpha(alpha),
        }
    }

    /// Builds a color in `space` from an sRGB color, clamping the sRGB color into gamut first.
    pub fn from_rgb(rgb: RGBColor, space: ColorSpace, alpha: f64) -> CanonicalColor {
        let rgb = rgb.clamp();
        let channels = match space {
            ColorSpace::Rgb => Into::<Coord>::into(rgb) * 255u8,
            ColorSpace::Hsl => {
                let hsl: HSLColor = rgb.convert();
                Coord {
                    x: hsl.h,
                    y: hsl.s * 100.,
                    z: hsl.l * 100.,
                }
            }
            ColorSpace::Hsv => {
                let hsv: HSVColor = rgb.convert();
                Coord {
                    x: hsv.h,
                    y: hsv.s * 100.,
                    z: hsv.v * 100.,
                }
            }
        };
        CanonicalColor::new(space, channels, alpha)
    }

    // hex codes and names are whole bytes: go through the rounded tuple so 0xAA stays exactly 170
    fn from_bytes(rgb: RGBColor, alpha: f64) -> CanonicalColor {
        let (r, g, b) = rgb.int_rgb_tup();
        CanonicalColor::new(
            ColorSpace::Rgb,
            Coord {
                x: f64::from(r),
                y: f64::from(g),
                z: f64::from(b),
            },
            alpha,
        )
    }

    /// The space the channels are expressed in.
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// The channels, in the native ranges of [`space`](CanonicalColor::space).
    pub fn channels(&self) -> Coord {
        self.channels
    }

    /// The alpha, from 0 (transparent) to 1 (opaque).
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns a copy with a different alpha, clamped to [0, 1].
    pub fn with_alpha(&self, alpha: f64) -> CanonicalColor {
        CanonicalColor {
            alpha: clamp_alpha(alpha),
            ..*self
        }
    }

    /// Converts to sRGB with channels from 0 to 1.
    pub fn to_rgb(&self) -> RGBColor {
        let c = self.channels;
        match self.space {
            ColorSpace::Rgb => RGBColor::from(c / 255u8),
            ColorSpace::Hsl => HSLColor {
                h: c.x,
                s: c.y / 100.,
                l: c.z / 100.,
            }
            .to_rgb(),
            ColorSpace::Hsv => HSVColor {
                h: c.x,
                s: c.y / 100.,
                v: c.z / 100.,
            }
            .to_rgb(),
        }
    }

    /// Re-expresses the same color in another space. A no-op if it is already there.
    pub fn to_space(&self, space: ColorSpace) -> CanonicalColor {
        if space == self.space {
            *self
        } else {
            CanonicalColor::from_rgb(self.to_rgb(), space, self.alpha)
        }
    }

    /// Converts to any [`Color`] type by way of sRGB. Alpha is dropped.
    pub fn convert<T: Color>(&self) -> T {
        T::from_rgb(self.to_rgb())
    }
}

impl FromStr for CanonicalColor {
    type Err = CSSParseError;

    /// Parses hex codes, functional notation, and named colors. Surrounding whitespace, quotes, and a
    /// trailing semicolon are ignored, and matching is case-insensitive.
    fn from_str(input: &str) -> Result<CanonicalColor, CSSParseError> {
        let cleaned = clean_input(input).to_ascii_lowercase();
        if cleaned.is_empty() {
            return Err(CSSParseError::InvalidColorSyntax);
        }
        if cleaned.starts_with('#') {
            let (rgb, alpha) = RGBColor::from_hex_code(&cleaned)?;
            Ok(CanonicalColor::from_bytes(rgb, alpha))
        } else if cleaned.contains('(') {
            let (space, channels, alpha) = parse_functional_str(&cleaned)?;
            Ok(CanonicalColor::new(space, channels, alpha))
        } else {
            let (rgb, alpha) = named_color(&cleaned).ok_or(CSSParseError::UnknownColorName)?;
            Ok(CanonicalColor::from_bytes(rgb, alpha))
        }
    }
}

/// Parses any supported color string into a [`CanonicalColor`], or `None` if it cannot be parsed.
/// Never panics: callers treat `None` as "invalid color".
///
/// # Example
/// ```
/// # use tinct::prelude::*;
/// assert!(parse_color("hsl(120, 50%, 50%)").is_some());
/// assert!(parse_color("not-a-color").is_none());
/// ```
pub fn parse_color(input: &str) -> Option<CanonicalColor> {
    input.parse().ok()
}

impl fmt::Display for CanonicalColor {
    /// Writes the color back out in its own space, with alpha only when it is below 1.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let target = match self.space {
            ColorSpace::Rgb => FormatTarget::Rgb,
            ColorSpace::Hsl => FormatTarget::Hsl,
            ColorSpace::Hsv => FormatTarget::Hsv,
        };
        write!(f, "{}", serialize(self, target))
    }
}
