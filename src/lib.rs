//! Tinct is a library for the colors that come out of stylesheets and theme files: strings like
//! `#6E66CC`, `hsl(240 50% 40% / 0.8)`, `rebeccapurple`, `var(--accent)`, or
//! `linear-gradient(90deg, #fff, rgb(0 0 0 / 50%) 80%)`. It validates them, parses them into a
//! [`CanonicalColor`](canonical::CanonicalColor), adjusts them, and writes them back out in whatever
//! notation is wanted, treating gradients as lists of colors that get the same treatment stop by stop.
//!
//! Parsing keeps the space a color was written in, so a color that is only being passed through comes
//! back out the way it went in. Adjustments to lightness go through OKLCH, where equal steps look
//! equal, instead of scaling RGB channels and watching blues turn purple. Luminance follows WCAG, and
//! random colors come from the operating system's secure random source.
//!
//! # Example
//! ```
//! # use tinct::prelude::*;
//! assert!(is_valid_color("  #FF0000;  ", ValidationMode::Strict));
//! let red = parse_color("  #FF0000;  ").unwrap();
//! let opts = FormatOptions::with_format(FormatTarget::Hsl);
//! assert_eq!(format_color(&red, &opts).unwrap(), "hsl(0, 100%, 50%)");
//! assert_eq!(dynamic_elevation("#000", 10.), "rgb(22, 22, 22)");
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

extern crate csv;
extern crate num;
extern crate rand;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate maplit;

#[cfg(test)]
#[macro_use]
extern crate float_cmp;
#[cfg(test)]
extern crate serde_json;

pub mod adjust;
pub mod bound;
pub mod canonical;
pub mod color;
pub mod colors;
mod consts;
pub mod coord;
mod csscolor;
mod cssnumeric;
pub mod format;
pub mod gradient;
pub mod input;
pub mod luminance;
pub mod named;
pub mod prelude;
pub mod random;
pub mod validate;

pub use cssnumeric::CSSParseError;

#[cfg(test)]
mod tests {
    use prelude::*;
    use colors::OKLCHColor;
    use gradient::{decompose, reconstruct, Angle, AngleUnit, Orientation};
    use random::random_hex_color;

    #[test]
    fn test_hex_with_noise_parses_to_red() {
        let input = "  #FF0000;  ";
        assert!(is_valid_color(input, ValidationMode::Strict));
        let red = parse_color(input).unwrap();
        assert_eq!(red.space(), ColorSpace::Rgb);
        assert_eq!(red.channels().to_array(), [255., 0., 0.]);
        assert_eq!(red.alpha(), 1.);
    }

    #[test]
    fn test_rgb_to_hsl() {
        let red = parse_color("rgb(255, 0, 0)").unwrap();
        let opts = FormatOptions::with_format(FormatTarget::Hsl);
        assert_eq!(format_color(&red, &opts).unwrap(), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn test_lightened_gradient_keeps_its_shape() {
        let input = "linear-gradient(90deg, #fff, #000)";
        let g = decompose(input).unwrap();
        assert_eq!(
            *g.orientation(),
            Orientation::Angle(Angle::new(90., AngleUnit::Deg))
        );
        let stops = extract_gradient_stops(input);
        assert_eq!(stops, vec!["#fff", "#000"]);
        let lighter: Vec<String> = stops.iter().map(|s| lighten(s, 0.5)).collect();
        let out = reconstruct(input, &lighter);
        assert_eq!(out, "linear-gradient(90deg, #FFFFFF, #636363)");
        let again = decompose(&out).unwrap();
        assert_eq!(again.stops().len(), 2);
        assert_eq!(again.orientation(), g.orientation());
    }

    #[test]
    fn test_random_hex_colors() {
        let colors: Vec<String> = (0..1000).map(|_| random_hex_color(None).unwrap()).collect();
        for c in &colors {
            assert!(is_valid_color(c, ValidationMode::Strict));
            assert_eq!(c.len(), 7);
        }
        let mut sorted = colors.clone();
        sorted.sort();
        sorted.dedup();
        assert!(sorted.len() >= 995);
    }

    #[test]
    fn test_not_a_color() {
        assert!(!is_valid_color("not-a-color", ValidationMode::Strict));
        assert!(!is_valid_color("not-a-color", ValidationMode::Loose));
        assert!(parse_color("not-a-color").is_none());
        assert!(format_str("not-a-color", &FormatOptions::default()).is_err());
        assert_eq!(lighten("not-a-color", 0.5), "not-a-color");
        assert_eq!(relative_luminance("not-a-color"), None);
    }

    #[test]
    fn test_round_trip_within_one_unit() {
        let inputs = [
            ("#6E66CC", FormatTarget::Hex),
            ("#ABC", FormatTarget::Hex),
            ("#11223344", FormatTarget::Hexa),
            ("rgb(12, 200, 99)", FormatTarget::Rgb),
            ("rgba(1 2 3 / 40%)", FormatTarget::Rgba),
            ("hsl(211.3, 47.7%, 63.1%)", FormatTarget::Hsl),
            ("hsla(5, 90%, 10%, 0.333)", FormatTarget::Hsla),
            ("hsv(77, 12%, 99%)", FormatTarget::Hsv),
            ("mediumseagreen", FormatTarget::Rgb),
        ];
        for &(input, target) in inputs.iter() {
            let parsed = parse_color(input).unwrap();
            let written = format_color(&parsed, &FormatOptions::with_format(target)).unwrap();
            let reparsed = parse_color(&written).unwrap();
            let a = parsed.to_space(ColorSpace::Rgb).channels().to_array();
            let b = reparsed.to_space(ColorSpace::Rgb).channels().to_array();
            for i in 0..3 {
                assert!((a[i] - b[i]).abs() <= 1., "{} came back as {}", input, written);
            }
            assert!((parsed.alpha() - reparsed.alpha()).abs() <= 0.002);
        }
    }

    #[test]
    fn test_idempotent_formatting() {
        let inputs = [
            ("hsl(211.3, 47.7%, 63.1%)", FormatTarget::Hsl),
            ("rgba(1, 2, 3, 0.4)", FormatTarget::Rgb),
            ("#ABCDEF", FormatTarget::Hex),
            ("linear-gradient(to right, #ABC, 40%, rgb(1, 2, 3) 90%)", FormatTarget::Hex),
        ];
        for &(input, target) in inputs.iter() {
            let opts = FormatOptions::with_format(target);
            let once = format_str(input, &opts).unwrap();
            let twice = format_str(&once, &opts).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_reconstruct_preserves_structure() {
        let input = "repeating-conic-gradient(from 30deg at 50% 50%, red 0deg, 10%, var(--a), blue 90deg)";
        let out = reconstruct(input, &["#000", "#111"]);
        let before = decompose(input).unwrap();
        let after = decompose(&out).unwrap();
        assert_eq!(after.kind(), before.kind());
        assert!(after.repeating());
        assert_eq!(after.stops().len(), before.stops().len());
        for (a, b) in after.stops().iter().zip(before.stops()) {
            assert_eq!(a.position, b.position);
            if b.color.color().is_none() {
                assert_eq!(a.color.token(), b.color.token());
            }
        }
    }

    #[test]
    fn test_elevation_is_monotonic_and_capped() {
        let base = parse_color("#20232A").unwrap();
        let mut last = 0.;
        for level in 0..100 {
            let l = parse_color(&dynamic_elevation("#20232A", f64::from(level)))
                .unwrap()
                .convert::<OKLCHColor>()
                .l;
            // rounding to whole bytes costs a little lightness
            assert!(l >= last - 0.005);
            assert!(l <= 1. + 1e-9);
            last = l;
        }
        assert!(base.elevate(1000.).convert::<OKLCHColor>().l <= 1. + 1e-9);
    }

    #[test]
    fn test_luminance_in_bounds() {
        for input in ["#000", "#fff", "teal", "hsl(60, 100%, 50%)", "linear-gradient(red, blue)"].iter() {
            let lum = relative_luminance(input).unwrap();
            assert!(lum >= 0. && lum <= 1.);
        }
    }
}
