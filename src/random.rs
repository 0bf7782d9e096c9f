//! Random colors and gradients, for placeholders and defaults. Every number here comes from the
//! operating system's cryptographic random source; if that source fails, so does the call, with
//! [`RandomError::EntropyUnavailable`].
//!
//! Cylindrical colors keep saturation and lightness (or value) away from the extremes, so the output
//! is never something that reads as plain black, white, or gray.
//!
//! The `alpha` argument the solid-color functions take is a number from 0 to 1, with one quirk kept
//! for compatibility with callers that pass percentages: exactly `100` means "opaque, write no
//! alpha". Anything else is clamped into [0, 1] and written in the notation's alpha syntax.

use std::error::Error;
use std::fmt;

use rand::rngs::OsRng;
use rand::TryRngCore;

use gradient::GradientKind;

/// An error in generating a random color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RandomError {
    /// The operating system's random source could not be read.
    EntropyUnavailable,
}

impl fmt::Display for RandomError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RandomError::EntropyUnavailable => write!(f, "secure random source unavailable"),
        }
    }
}

impl Error for RandomError {}

/// What [`random_color`] should produce.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RandomKind {
    /// `#RRGGBB`
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `hsv(h, s%, v%)`
    Hsv,
    /// A two-color `linear-gradient()` at a random angle.
    LinearGradient,
    /// A two-color circular `radial-gradient()`.
    RadialGradient,
    /// A two-color `conic-gradient()` from a random angle.
    ConicGradient,
}

impl Default for RandomKind {
    fn default() -> RandomKind {
        RandomKind::Hex
    }
}

fn random_bytes<T: AsMut<[u8]> + Default>() -> Result<T, RandomError> {
    let mut buf = T::default();
    OsRng
        .try_fill_bytes(buf.as_mut())
        .map_err(|_| RandomError::EntropyUnavailable)?;
    Ok(buf)
}

/// Maps a byte onto `[min, max]`, rounded to the nearest integer.
fn byte_to_range(byte: u8, min: f64, max: f64) -> f64 {
    (min + f64::from(byte) / 255. * (max - min)).round()
}

/// A whole-degree angle from 0 to 360 inclusive.
fn random_angle() -> Result<u16, RandomError> {
    let bytes: [u8; 2] = random_bytes()?;
    Ok(u16::from_be_bytes(bytes) % 361)
}

/// The alpha to write, if any.
fn requested_alpha(alpha: Option<f64>) -> Option<f64> {
    match alpha {
        Some(a) if a == 100. || a.is_nan() => None,
        Some(a) => Some(a.max(0.).min(1.)),
        None => None,
    }
}

/// A random `#RRGGBB` code, or `#RRGGBBAA` with the given alpha.
///
/// # Example
/// ```
/// # use tinct::random::random_hex_color;
/// let hex = random_hex_color(None).unwrap();
/// assert_eq!(hex.len(), 7);
/// assert!(random_hex_color(Some(0.5)).unwrap().ends_with("80"));
/// ```
pub fn random_hex_color(alpha: Option<f64>) -> Result<String, RandomError> {
    let [r, g, b]: [u8; 3] = random_bytes()?;
    let hex = format!("#{:02X}{:02X}{:02X}", r, g, b);
    Ok(match requested_alpha(alpha) {
        Some(a) => format!("{}{:02X}", hex, (a * 255.).round() as u8),
        None => hex,
    })
}

/// A random `rgb()` color, or `rgba()` with the given alpha.
pub fn random_rgb_color(alpha: Option<f64>) -> Result<String, RandomError> {
    let [r, g, b]: [u8; 3] = random_bytes()?;
    Ok(match requested_alpha(alpha) {
        Some(a) => format!("rgba({}, {}, {}, {})", r, g, b, a),
        None => format!("rgb({}, {}, {})", r, g, b),
    })
}

/// A random `hsl()` color with saturation from 20% to 100% and lightness from 20% to 80%, or
/// `hsla()` with the given alpha.
pub fn random_hsl_color(alpha: Option<f64>) -> Result<String, RandomError> {
    let [h, s, l]: [u8; 3] = random_bytes()?;
    let (h, s, l) = (
        byte_to_range(h, 0., 360.),
        byte_to_range(s, 20., 100.),
        byte_to_range(l, 20., 80.),
    );
    Ok(match requested_alpha(alpha) {
        Some(a) => format!("hsla({}, {}%, {}%, {})", h, s, l, a),
        None => format!("hsl({}, {}%, {}%)", h, s, l),
    })
}

/// A random `hsv()` color with saturation and value from 20% to 100%, or `hsva()` with the given
/// alpha.
pub fn random_hsv_color(alpha: Option<f64>) -> Result<String, RandomError> {
    let [h, s, v]: [u8; 3] = random_bytes()?;
    let (h, s, v) = (
        byte_to_range(h, 0., 360.),
        byte_to_range(s, 20., 100.),
        byte_to_range(v, 20., 100.),
    );
    Ok(match requested_alpha(alpha) {
        Some(a) => format!("hsva({}, {}%, {}%, {})", h, s, v, a),
        None => format!("hsv({}, {}%, {}%)", h, s, v),
    })
}

/// A random two-color gradient of the given kind, with opaque hex stops.
///
/// # Example
/// ```
/// # use tinct::gradient::{decompose, GradientKind};
/// # use tinct::random::random_gradient;
/// let g = random_gradient(GradientKind::Conic).unwrap();
/// assert_eq!(decompose(&g).unwrap().color_stops().len(), 2);
/// ```
pub fn random_gradient(kind: GradientKind) -> Result<String, RandomError> {
    let first = random_hex_color(None)?;
    let second = random_hex_color(None)?;
    Ok(match kind {
        GradientKind::Linear => {
            format!("linear-gradient({}deg, {}, {})", random_angle()?, first, second)
        }
        GradientKind::Radial => format!("radial-gradient(circle, {}, {})", first, second),
        GradientKind::Conic => format!(
            "conic-gradient(from {}deg, {}, {})",
            random_angle()?,
            first,
            second
        ),
    })
}

/// A random color or gradient of the given kind. `alpha` is ignored for gradients.
pub fn random_color(kind: RandomKind, alpha: Option<f64>) -> Result<String, RandomError> {
    match kind {
        RandomKind::Hex => random_hex_color(alpha),
        RandomKind::Rgb => random_rgb_color(alpha),
        RandomKind::Hsl => random_hsl_color(alpha),
        RandomKind::Hsv => random_hsv_color(alpha),
        RandomKind::LinearGradient => random_gradient(GradientKind::Linear),
        RandomKind::RadialGradient => random_gradient(GradientKind::Radial),
        RandomKind::ConicGradient => random_gradient(GradientKind::Conic),
    }
}

/// A random alpha between `min` and `max`, both clamped into [0, 1] first.
pub fn random_alpha(min: f64, max: f64) -> Result<f64, RandomError> {
    let [byte]: [u8; 1] = random_bytes()?;
    let min = min.max(0.).min(1.);
    let max = max.max(0.).min(1.);
    Ok(min + f64::from(byte) / 255. * (max - min))
}
