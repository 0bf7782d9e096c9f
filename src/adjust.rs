//! Quick adjustments for theme code that works on strings rather than on parsed colors. Each function
//! takes any solid color or gradient, adjusts every color in it, and writes the result in a fixed
//! notation. Input that cannot be parsed comes back as it went in, and gradient stops that are not
//! colors stay exactly as written, so these are safe to call on whatever a theme hands over.
//!
//! Lightness always means OKLCH lightness here, on a scale from 0 to 1.

use bound::Bound;
use canonical::{parse_color, CanonicalColor, ColorSpace};
use color::Color;
use colors::OKLCHColor;
use consts::ELEVATION_STEP;
use format::{serialize, FormatTarget};
use gradient::decompose;
use validate::{clean_input, is_valid_gradient};

impl CanonicalColor {
    /// Returns a copy with its OKLCH lightness replaced by `f(lightness)`, clamped to [0, 1]. Hue,
    /// chroma, alpha, and the color's space are kept; the result is clamped into sRGB.
    pub fn map_lightness<F: Fn(f64) -> f64>(&self, f: F) -> CanonicalColor {
        let lch: OKLCHColor = self.convert();
        let adjusted = OKLCHColor { l: f(lch.l), ..lch }.clamp();
        CanonicalColor::from_rgb(adjusted.to_rgb(), self.space(), self.alpha())
    }

    /// Raises OKLCH lightness by `level` elevation steps, stopping at white. Negative levels are
    /// treated as 0.
    ///
    /// # Example
    /// ```
    /// # use tinct::prelude::*;
    /// # use tinct::colors::OKLCHColor;
    /// let surface = parse_color("#121212").unwrap();
    /// let raised = surface.elevate(4.);
    /// let before = surface.convert::<OKLCHColor>().l;
    /// let after = raised.convert::<OKLCHColor>().l;
    /// assert!((after - before - 0.08).abs() < 1e-6);
    /// ```
    pub fn elevate(&self, level: f64) -> CanonicalColor {
        let step = level.max(0.) * ELEVATION_STEP;
        self.map_lightness(|l| (l + step).min(1.))
    }
}

/// Applies `f` to a solid color, or to each color stop of a gradient. Anything that does not parse is
/// returned unchanged.
fn map_each_color<F: Fn(&CanonicalColor) -> String>(input: &str, f: F) -> String {
    let cleaned = clean_input(input);
    if is_valid_gradient(&cleaned) {
        return match decompose(&cleaned) {
            Some(gradient) => gradient.map_colors(|color, _| f(color)).to_string(),
            None => input.to_string(),
        };
    }
    match parse_color(&cleaned) {
        Some(color) => f(&color),
        None => input.to_string(),
    }
}

/// Moves lightness toward white by `factor` (0 to 1) of the remaining distance, and writes hex.
///
/// # Example
/// ```
/// # use tinct::adjust::lighten;
/// assert_eq!(lighten("#000", 0.5), "#636363");
/// assert_eq!(lighten("var(--accent)", 0.5), "var(--accent)");
/// ```
pub fn lighten(color: &str, factor: f64) -> String {
    map_each_color(color, |c| {
        serialize(&c.map_lightness(|l| l + (1. - l) * factor), FormatTarget::Hex)
    })
}

/// Scales lightness by `1 - factor`, so a factor of 1 gives black, and writes hex.
pub fn darken(color: &str, factor: f64) -> String {
    map_each_color(color, |c| {
        serialize(&c.map_lightness(|l| l * (1. - factor)), FormatTarget::Hex)
    })
}

/// Adds `amount` (which may be negative) to lightness and writes eight-digit hex.
pub fn adjust_lightness(color: &str, amount: f64) -> String {
    map_each_color(color, |c| {
        serialize(&c.map_lightness(|l| l + amount), FormatTarget::Hexa)
    })
}

/// Replaces the alpha (0 to 1, clamped) and writes eight-digit hex.
///
/// # Example
/// ```
/// # use tinct::adjust::alpha;
/// assert_eq!(alpha("red", 0.5), "#FF000080");
/// assert_eq!(
///     alpha("linear-gradient(red, 50%, blue)", 0.),
///     "linear-gradient(#FF000000, 50%, #0000FF00)"
/// );
/// ```
pub fn alpha(color: &str, value: f64) -> String {
    map_each_color(color, |c| serialize(&c.with_alpha(value), FormatTarget::Hexa))
}

/// Simulates a surface raised `level` steps toward the light: lightness goes up by 0.02 per level,
/// stopping at white. Writes `rgb()`, or `rgba()` for translucent colors.
///
/// # Example
/// ```
/// # use tinct::adjust::dynamic_elevation;
/// assert_eq!(dynamic_elevation("#000", 10.), "rgb(22, 22, 22)");
/// assert_eq!(dynamic_elevation("#000", 1000.), "rgb(255, 255, 255)");
/// ```
pub fn dynamic_elevation(color: &str, level: f64) -> String {
    map_each_color(color, |c| {
        serialize(&c.elevate(level).to_space(ColorSpace::Rgb), FormatTarget::Rgb)
    })
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn lightness(input: &str) -> f64 {
        parse_color(input).unwrap().convert::<OKLCHColor>().l
    }

    #[test]
    fn test_lighten_darken() {
        assert_eq!(darken("#FFFFFF", 0.5), "#636363");
        assert_eq!(darken("#808080", 1.), "#000000");
        assert_eq!(lighten("#808080", 1.), "#FFFFFF");
        assert!(lightness(&lighten("#336699", 0.2)) > lightness("#336699"));
        assert!(lightness(&darken("#336699", 0.2)) < lightness("#336699"));
        // alpha survives
        assert_eq!(lighten("#00000080", 0.5), "#63636380");
    }

    #[test]
    fn test_adjust_lightness_clamps() {
        assert_eq!(adjust_lightness("#000", 0.5), "#636363FF");
        assert_eq!(adjust_lightness("#808080", -5.), "#000000FF");
        assert_eq!(adjust_lightness("#808080", 5.), "#FFFFFFFF");
    }

    #[test]
    fn test_unparseable_passes_through() {
        assert_eq!(lighten("not-a-color", 0.5), "not-a-color");
        assert_eq!(alpha("var(--x)", 0.5), "var(--x)");
        assert_eq!(dynamic_elevation("", 3.), "");
    }

    #[test]
    fn test_gradients() {
        assert_eq!(
            darken("linear-gradient(90deg, #fff 10%, currentColor, #808080)", 1.),
            "linear-gradient(90deg, #000000 10%, currentColor, #000000)"
        );
        assert_eq!(
            dynamic_elevation("radial-gradient(circle, #000, #000 50%)", 10.),
            "radial-gradient(circle, rgb(22, 22, 22), rgb(22, 22, 22) 50%)"
        );
    }

    #[test]
    fn test_elevation_monotonic() {
        let base = parse_color("#1E1E2E").unwrap();
        let mut last = base.convert::<OKLCHColor>().l;
        for level in 1..80 {
            let l = base.elevate(f64::from(level)).convert::<OKLCHColor>().l;
            assert!(l >= last - 1e-9);
            assert!(l <= 1. + 1e-9);
            last = l;
        }
        assert_eq!(dynamic_elevation("rgba(0, 0, 0, 0.5)", 10.), "rgba(22, 22, 22, 0.5)");
        assert_eq!(dynamic_elevation("#000", -3.), "rgb(0, 0, 0)");
    }
}
