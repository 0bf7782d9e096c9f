//! The formatter: takes a [`CanonicalColor`], runs it through a fixed sequence of adjustments, and
//! writes it out as a CSS string in the requested notation. Lightness and chroma adjustments happen in
//! OKLCH, so "lighten by 20%" looks like the same step whether the color is yellow or navy; whiten
//! and blacken happen in HWB, and everything else in sRGB.
//!
//! Adjustments never fail on well-formed input. When something does go wrong (a NaN channel, a
//! negative adjustment), what happens next is decided by the caller's [`FormatErrorPolicy`]: either
//! the error comes back, or a fresh random hex color stands in for the result and a warning is
//! logged.

use std::error::Error;
use std::fmt;

use canonical::{parse_color, CanonicalColor, ColorSpace};
use color::{Color, RGBColor};
use colors::{HWBColor, OKLCHColor};
use bound::Bound;
use consts::GRAYSCALE_WEIGHTS;
use gradient::Gradient;
use random::{random_hex_color, RandomError};
use validate::{clean_input, is_valid_css_var, is_valid_gradient};

/// The notation a color is written out in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTarget {
    /// `#RRGGBB`, or `#RRGGBBAA` when the color is not opaque.
    Hex,
    /// Always `#RRGGBBAA`.
    Hexa,
    /// `rgb(r, g, b)`, or `rgba(...)` when the color is not opaque.
    Rgb,
    /// Always `rgba(r, g, b, a)`.
    Rgba,
    /// `hsl(h, s%, l%)`, or `hsla(...)` when the color is not opaque.
    Hsl,
    /// Always `hsla(h, s%, l%, a)`.
    Hsla,
    /// `hsv(h, s%, v%)`, or `hsva(...)` when the color is not opaque.
    Hsv,
    /// Always `hsva(h, s%, v%, a)`.
    Hsva,
}

impl Default for FormatTarget {
    fn default() -> FormatTarget {
        FormatTarget::Hex
    }
}

impl FormatTarget {
    /// The space whose channels this notation writes.
    pub fn space(self) -> ColorSpace {
        match self {
            FormatTarget::Hex | FormatTarget::Hexa | FormatTarget::Rgb | FormatTarget::Rgba => {
                ColorSpace::Rgb
            }
            FormatTarget::Hsl | FormatTarget::Hsla => ColorSpace::Hsl,
            FormatTarget::Hsv | FormatTarget::Hsva => ColorSpace::Hsv,
        }
    }

    /// Whether the alpha channel is written for a color with the given alpha.
    fn writes_alpha(self, alpha: f64) -> bool {
        match self {
            FormatTarget::Hexa | FormatTarget::Rgba | FormatTarget::Hsla | FormatTarget::Hsva => true,
            FormatTarget::Hex | FormatTarget::Rgb | FormatTarget::Hsl | FormatTarget::Hsv => alpha < 1.,
        }
    }
}

/// What to do when formatting a solid color fails.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormatErrorPolicy {
    /// Log a warning and return a random hex color instead. Keeps a rendering pipeline alive at the
    /// cost of hiding the failure from the caller.
    FallbackRandom,
    /// Return the error.
    Propagate,
}

impl Default for FormatErrorPolicy {
    fn default() -> FormatErrorPolicy {
        FormatErrorPolicy::FallbackRandom
    }
}

/// The output notation and the adjustments to apply on the way. Every adjustment is a percentage from
/// 0 to 100 and is skipped when `None`. Adjustments always run in the order the fields are declared.
///
/// Deserializes from camelCase keys, with every key optional:
///
/// ```
/// # extern crate serde_json;
/// # extern crate tinct;
/// # use tinct::format::{FormatOptions, FormatTarget};
/// # fn main() {
/// let opts: FormatOptions = serde_json::from_str(r#"{"format": "rgb", "setLightness": 40}"#).unwrap();
/// assert_eq!(opts.format, FormatTarget::Rgb);
/// assert_eq!(opts.set_lightness, Some(40.));
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    /// Output notation.
    pub format: FormatTarget,
    /// Replaces the alpha outright. `Some(0.)` makes the color fully transparent.
    pub alpha: Option<f64>,
    /// Inverts each sRGB channel.
    pub negate: bool,
    /// Replaces the color with its weighted sRGB average.
    pub grayscale: bool,
    /// Moves perceptual lightness this far toward white.
    pub lighten: Option<f64>,
    /// Moves perceptual lightness this far toward black.
    pub darken: Option<f64>,
    /// Sets perceptual lightness outright. Like the other adjustments, `Some(0.)` does nothing: use
    /// `darken` at 100 for black.
    pub set_lightness: Option<f64>,
    /// Scales chroma up by this much.
    pub saturate: Option<f64>,
    /// Scales chroma down by this much.
    pub desaturate: Option<f64>,
    /// Scales HWB whiteness up by this much.
    pub whiten: Option<f64>,
    /// Scales HWB blackness up by this much.
    pub blacken: Option<f64>,
    /// Scales alpha down by this much.
    pub fade: Option<f64>,
    /// Scales alpha up by this much.
    pub opaquer: Option<f64>,
    /// What to do if formatting fails.
    pub on_format_error: FormatErrorPolicy,
}

impl FormatOptions {
    /// Options that only pick a notation, with no adjustments.
    pub fn with_format(format: FormatTarget) -> FormatOptions {
        FormatOptions {
            format,
            ..FormatOptions::default()
        }
    }

    fn percentages(&self) -> [(&'static str, Option<f64>); 10] {
        [
            ("alpha", self.alpha),
            ("lighten", self.lighten),
            ("darken", self.darken),
            ("setLightness", self.set_lightness),
            ("saturate", self.saturate),
            ("desaturate", self.desaturate),
            ("whiten", self.whiten),
            ("blacken", self.blacken),
            ("fade", self.fade),
            ("opaquer", self.opaquer),
        ]
    }

    /// Checks that every adjustment present is a finite, non-negative percentage.
    pub fn validate(&self) -> Result<(), FormatError> {
        for &(name, value) in self.percentages().iter() {
            if let Some(v) = value {
                if !v.is_finite() || v < 0. {
                    return Err(FormatError::InvalidAdjustment(name));
                }
            }
        }
        Ok(())
    }
}

/// An error in formatting a color.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The input string is not a color, a gradient, or a CSS variable.
    Unparseable(String),
    /// The named adjustment is negative or not a number.
    InvalidAdjustment(&'static str),
    /// A channel came out of the adjustments as NaN or infinite.
    NonFiniteChannel,
    /// The random fallback color could not be generated.
    Random(RandomError),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FormatError::Unparseable(ref input) => write!(f, "cannot parse {:?} as a color", input),
            FormatError::InvalidAdjustment(name) => {
                write!(f, "adjustment {} must be a finite, non-negative percentage", name)
            }
            FormatError::NonFiniteChannel => write!(f, "a color channel is not a finite number"),
            FormatError::Random(ref err) => write!(f, "random fallback failed: {}", err),
        }
    }
}

impl Error for FormatError {}

impl From<RandomError> for FormatError {
    fn from(err: RandomError) -> FormatError {
        FormatError::Random(err)
    }
}

// one decimal place; adding zero turns -0 into 0
fn round1(val: f64) -> f64 {
    (val * 10.).round() / 10. + 0.
}

fn round3(val: f64) -> f64 {
    (val * 1000.).round() / 1000. + 0.
}

/// Writes a color in the given notation without adjusting it. Converts to the notation's space
/// first, if needed.
///
/// # Example
/// ```
/// # use tinct::prelude::*;
/// # use tinct::format::{serialize, FormatTarget};
/// let red = parse_color("rgb(255, 0, 0)").unwrap();
/// assert_eq!(serialize(&red, FormatTarget::Hsl), "hsl(0, 100%, 50%)");
/// assert_eq!(serialize(&red, FormatTarget::Hexa), "#FF0000FF");
/// ```
pub fn serialize(color: &CanonicalColor, target: FormatTarget) -> String {
    let alpha = color.alpha();
    let with_alpha = target.writes_alpha(alpha);
    match target {
        FormatTarget::Hex | FormatTarget::Hexa => {
            let rgb = color.to_rgb();
            if with_alpha {
                rgb.to_hexa(alpha)
            } else {
                rgb.to_hex()
            }
        }
        _ => {
            let c = color.to_space(target.space()).channels();
            let (name, body) = match target.space() {
                ColorSpace::Rgb => (
                    "rgb",
                    format!("{}, {}, {}", c.x.round() + 0., c.y.round() + 0., c.z.round() + 0.),
                ),
                ColorSpace::Hsl => (
                    "hsl",
                    format!("{}, {}%, {}%", round1(c.x), round1(c.y), round1(c.z)),
                ),
                ColorSpace::Hsv => (
                    "hsv",
                    format!("{}, {}%, {}%", round1(c.x), round1(c.y), round1(c.z)),
                ),
            };
            if with_alpha {
                format!("{}a({}, {})", name, body, round3(alpha))
            } else {
                format!("{}({})", name, body)
            }
        }
    }
}

/// Applies one sRGB-level change, staying in the color's own space.
fn map_rgb<F: Fn(RGBColor) -> RGBColor>(color: CanonicalColor, f: F) -> CanonicalColor {
    CanonicalColor::from_rgb(f(color.to_rgb()), color.space(), color.alpha())
}

fn map_oklch<F: Fn(OKLCHColor) -> OKLCHColor>(color: CanonicalColor, f: F) -> CanonicalColor {
    map_rgb(color, |rgb| f(rgb.convert()).clamp().to_rgb())
}

fn map_hwb<F: Fn(HWBColor) -> HWBColor>(color: CanonicalColor, f: F) -> CanonicalColor {
    map_rgb(color, |rgb| f(rgb.convert()).clamp().to_rgb())
}

/// Runs every adjustment in `options`, in order, clamping after each one.
pub fn apply_adjustments(
    color: &CanonicalColor,
    options: &FormatOptions,
) -> Result<CanonicalColor, FormatError> {
    options.validate()?;
    let mut color = *color;
    if let Some(alpha) = options.alpha {
        color = color.with_alpha(alpha / 100.);
    }
    if options.negate {
        color = map_rgb(color, |c| RGBColor {
            r: 1. - c.r,
            g: 1. - c.g,
            b: 1. - c.b,
        });
    }
    if options.grayscale {
        color = map_rgb(color, |c| {
            let [wr, wg, wb] = GRAYSCALE_WEIGHTS;
            let v = wr * c.r + wg * c.g + wb * c.b;
            RGBColor { r: v, g: v, b: v }
        });
    }
    if let Some(f) = nonzero(options.lighten) {
        color = map_oklch(color, |c| OKLCHColor {
            l: c.l + (1. - c.l) * f,
            ..c
        });
    }
    if let Some(f) = nonzero(options.darken) {
        color = map_oklch(color, |c| OKLCHColor {
            l: c.l * (1. - f),
            ..c
        });
    }
    if let Some(l) = nonzero(options.set_lightness) {
        color = map_oklch(color, |c| OKLCHColor { l, ..c });
    }
    if let Some(f) = nonzero(options.saturate) {
        color = map_oklch(color, |c| OKLCHColor {
            c: c.c * (1. + f),
            ..c
        });
    }
    if let Some(f) = nonzero(options.desaturate) {
        color = map_oklch(color, |c| OKLCHColor {
            c: c.c * (1. - f),
            ..c
        });
    }
    if let Some(f) = nonzero(options.whiten) {
        color = map_hwb(color, |c| HWBColor {
            w: c.w * (1. + f),
            ..c
        });
    }
    if let Some(f) = nonzero(options.blacken) {
        color = map_hwb(color, |c| HWBColor {
            b: c.b * (1. + f),
            ..c
        });
    }
    if let Some(f) = nonzero(options.fade) {
        color = color.with_alpha(color.alpha() * (1. - f));
    }
    if let Some(f) = nonzero(options.opaquer) {
        color = color.with_alpha(color.alpha() * (1. + f));
    }
    if !color.channels().is_finite() || !color.alpha().is_finite() {
        return Err(FormatError::NonFiniteChannel);
    }
    Ok(color)
}

/// A percentage as a unit fraction, or `None` if it is absent or zero.
fn nonzero(pct: Option<f64>) -> Option<f64> {
    match pct {
        Some(p) if p != 0. => Some(p / 100.),
        _ => None,
    }
}

fn recover(err: FormatError, policy: FormatErrorPolicy) -> Result<String, FormatError> {
    match policy {
        FormatErrorPolicy::Propagate => Err(err),
        FormatErrorPolicy::FallbackRandom => {
            warn!("formatting failed ({}), substituting a random color", err);
            Ok(random_hex_color(None)?)
        }
    }
}

/// Adjusts and writes a solid color. On failure, follows `options.on_format_error`.
///
/// # Example
/// ```
/// # use tinct::prelude::*;
/// # use tinct::format::{format_color, FormatOptions, FormatTarget};
/// let opts = FormatOptions {
///     alpha: Some(50.),
///     ..FormatOptions::with_format(FormatTarget::Rgb)
/// };
/// let red = parse_color("#F00").unwrap();
/// assert_eq!(format_color(&red, &opts).unwrap(), "rgba(255, 0, 0, 0.5)");
/// ```
pub fn format_color(color: &CanonicalColor, options: &FormatOptions) -> Result<String, FormatError> {
    match apply_adjustments(color, options) {
        Ok(adjusted) => Ok(serialize(&adjusted, options.format)),
        Err(err) => recover(err, options.on_format_error),
    }
}

/// Applies the same options to every color stop of a gradient and writes the gradient back out.
/// Stops that fail to format keep their original text. Only the gradient as a whole can fail: when
/// it does not decompose, or when the options themselves are invalid.
pub fn format_gradient(input: &str, options: &FormatOptions) -> Result<String, FormatError> {
    options.validate()?;
    let gradient: Gradient = input
        .parse()
        .map_err(|_| FormatError::Unparseable(input.to_string()))?;
    let formatted = gradient.map_colors(|color, token| match apply_adjustments(color, options) {
        Ok(adjusted) => serialize(&adjusted, options.format),
        Err(err) => {
            debug!("leaving gradient stop {:?} as is: {}", token, err);
            token.to_string()
        }
    });
    Ok(formatted.to_string())
}

/// Formats any color string: solid colors go through [`format_color`], gradients through
/// [`format_gradient`], and `var()` references come back untouched since their value is not known
/// here.
///
/// # Errors
/// `FormatError::Unparseable` if the input is none of those things, whatever the error policy: the
/// random fallback is for failures inside the pipeline, not for input that was never a color.
pub fn format_str(input: &str, options: &FormatOptions) -> Result<String, FormatError> {
    let cleaned = clean_input(input);
    if is_valid_css_var(&cleaned) {
        return Ok(cleaned);
    }
    if is_valid_gradient(&cleaned) {
        return format_gradient(&cleaned, options);
    }
    let color = parse_color(&cleaned).ok_or_else(|| FormatError::Unparseable(input.to_string()))?;
    format_color(&color, options)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use coord::Coord;
    use serde_json;

    fn fmt(input: &str, target: FormatTarget) -> String {
        format_str(input, &FormatOptions::with_format(target)).unwrap()
    }

    #[test]
    fn test_serialize_targets() {
        assert_eq!(fmt("rgb(255, 0, 0)", FormatTarget::Hsl), "hsl(0, 100%, 50%)");
        assert_eq!(fmt("rgb(255, 0, 0)", FormatTarget::Hsla), "hsla(0, 100%, 50%, 1)");
        assert_eq!(fmt("rgb(255, 0, 0)", FormatTarget::Hsv), "hsv(0, 100%, 100%)");
        assert_eq!(fmt("red", FormatTarget::Hex), "#FF0000");
        assert_eq!(fmt("red", FormatTarget::Hexa), "#FF0000FF");
        assert_eq!(fmt("red", FormatTarget::Rgba), "rgba(255, 0, 0, 1)");
        assert_eq!(fmt("#ff000080", FormatTarget::Hex), "#FF000080");
        assert_eq!(fmt("#ff000080", FormatTarget::Rgb), "rgba(255, 0, 0, 0.502)");
        assert_eq!(fmt("hsl(120, 50%, 25%)", FormatTarget::Hsl), "hsl(120, 50%, 25%)");
        assert_eq!(fmt("hsl(200.25, 33.33%, 10%)", FormatTarget::Hsl), "hsl(200.3, 33.3%, 10%)");
        assert_eq!(fmt("transparent", FormatTarget::Rgb), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn test_idempotence() {
        let inputs = [
            ("#6E66CC", FormatTarget::Hex),
            ("rgba(12, 34, 56, 0.7)", FormatTarget::Rgb),
            ("hsl(300, 12.5%, 87.5%)", FormatTarget::Hsl),
            ("hsva(10, 90%, 30%, 0.125)", FormatTarget::Hsv),
        ];
        for &(input, target) in inputs.iter() {
            let once = fmt(input, target);
            assert_eq!(fmt(&once, target), once);
        }
    }

    #[test]
    fn test_alpha_override_and_zero() {
        let opts = FormatOptions {
            alpha: Some(0.),
            ..FormatOptions::with_format(FormatTarget::Rgb)
        };
        assert_eq!(format_str("blue", &opts).unwrap(), "rgba(0, 0, 255, 0)");
        let opts = FormatOptions {
            alpha: Some(50.),
            ..FormatOptions::default()
        };
        assert_eq!(format_str("blue", &opts).unwrap(), "#0000FF80");
    }

    #[test]
    fn test_rgb_adjustments() {
        let negate = FormatOptions {
            negate: true,
            ..FormatOptions::default()
        };
        assert_eq!(format_str("#FF0000", &negate).unwrap(), "#00FFFF");
        let gray = FormatOptions {
            grayscale: true,
            ..FormatOptions::default()
        };
        let out = parse_color(&format_str("#00FF00", &gray).unwrap()).unwrap();
        let [r, g, b] = out.channels().to_array();
        assert!(r == g && g == b);
        assert!((r - 150.).abs() <= 1.);
    }

    #[test]
    fn test_lightness_adjustments() {
        let base = parse_color("#336699").unwrap();
        let base_l = base.convert::<OKLCHColor>().l;
        let lighter = FormatOptions {
            lighten: Some(50.),
            ..FormatOptions::default()
        };
        let out = parse_color(&format_color(&base, &lighter).unwrap()).unwrap();
        let l = out.convert::<OKLCHColor>().l;
        assert!((l - (base_l + (1. - base_l) / 2.)).abs() < 0.01);

        let black = FormatOptions {
            darken: Some(100.),
            ..FormatOptions::default()
        };
        assert_eq!(format_str("#808080", &black).unwrap(), "#000000");
        let white = FormatOptions {
            set_lightness: Some(100.),
            ..FormatOptions::default()
        };
        assert_eq!(format_str("#808080", &white).unwrap(), "#FFFFFF");
        let zero = FormatOptions {
            set_lightness: Some(0.),
            ..FormatOptions::default()
        };
        assert_eq!(format_str("#808080", &zero).unwrap(), "#808080");
    }

    #[test]
    fn test_chroma_and_hwb_adjustments() {
        let base = parse_color("#336699").unwrap();
        let base_c = base.convert::<OKLCHColor>().c;
        let gray = FormatOptions {
            desaturate: Some(100.),
            ..FormatOptions::default()
        };
        let out = parse_color(&format_color(&base, &gray).unwrap()).unwrap();
        assert!(out.convert::<OKLCHColor>().c < 0.01);
        let vivid = FormatOptions {
            saturate: Some(20.),
            ..FormatOptions::default()
        };
        let out = parse_color(&format_color(&base, &vivid).unwrap()).unwrap();
        assert!(out.convert::<OKLCHColor>().c > base_c);

        let whiten = FormatOptions {
            whiten: Some(100.),
            ..FormatOptions::default()
        };
        let out = parse_color(&format_color(&base, &whiten).unwrap()).unwrap();
        let hwb: HWBColor = out.convert();
        assert!((hwb.w - 0.4).abs() < 0.01);
    }

    #[test]
    fn test_alpha_scaling() {
        let fade = FormatOptions {
            fade: Some(50.),
            ..FormatOptions::with_format(FormatTarget::Rgb)
        };
        assert_eq!(format_str("red", &fade).unwrap(), "rgba(255, 0, 0, 0.5)");
        let opaquer = FormatOptions {
            opaquer: Some(100.),
            ..FormatOptions::with_format(FormatTarget::Rgb)
        };
        assert_eq!(format_str("rgba(255, 0, 0, 0.25)", &opaquer).unwrap(), "rgba(255, 0, 0, 0.5)");
        assert_eq!(format_str("rgba(255, 0, 0, 0.75)", &opaquer).unwrap(), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_error_policies() {
        let nan = CanonicalColor::new(ColorSpace::Rgb, Coord{x: f64::NAN, y: 0., z: 0.}, 1.);
        let strict = FormatOptions {
            on_format_error: FormatErrorPolicy::Propagate,
            ..FormatOptions::default()
        };
        assert_eq!(format_color(&nan, &strict), Err(FormatError::NonFiniteChannel));
        let fallback = format_color(&nan, &FormatOptions::default()).unwrap();
        assert!(fallback.starts_with('#') && fallback.len() == 7);

        let bad = FormatOptions {
            darken: Some(-10.),
            on_format_error: FormatErrorPolicy::Propagate,
            ..FormatOptions::default()
        };
        let red = parse_color("red").unwrap();
        assert_eq!(format_color(&red, &bad), Err(FormatError::InvalidAdjustment("darken")));
        assert!(format_str("not-a-color", &FormatOptions::default()).is_err());
    }

    #[test]
    fn test_vars_and_gradients() {
        let opts = FormatOptions::with_format(FormatTarget::Rgb);
        assert_eq!(format_str(" var(--brand) ", &opts).unwrap(), "var(--brand)");
        assert_eq!(
            format_str("linear-gradient(90deg, #f00, var(--x) 20%, hsl(240, 100%, 50%) 80%)", &opts)
                .unwrap(),
            "linear-gradient(90deg, rgb(255, 0, 0), var(--x) 20%, rgb(0, 0, 255) 80%)"
        );
        let bad = FormatOptions {
            fade: Some(f64::NAN),
            ..FormatOptions::default()
        };
        assert!(format_gradient("linear-gradient(red, blue)", &bad).is_err());
    }

    #[test]
    fn test_options_from_json() {
        let opts: FormatOptions = serde_json::from_str(
            r#"{"format": "hsla", "lighten": 10, "negate": true, "onFormatError": "propagate"}"#,
        )
        .unwrap();
        assert_eq!(opts.format, FormatTarget::Hsla);
        assert_eq!(opts.lighten, Some(10.));
        assert!(opts.negate);
        assert_eq!(opts.on_format_error, FormatErrorPolicy::Propagate);
        assert_eq!(opts.darken, None);
        let defaults: FormatOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, FormatOptions::default());
    }
}
