//! This file uses the CSS numeric parsing in `cssnumeric.rs` to parse CSS functional color notation:
//! `rgb()`, `rgba()`, `hsl()`, `hsla()`, and the non-standard but common `hsv()`/`hsva()`. Both the
//! legacy comma syntax ("rgb(255, 0, 0, 0.5)") and the modern space syntax ("rgb(255 0 0 / 50%)")
//! are accepted. Out-of-range components are clamped rather than rejected, as browsers do.
//! Arithmetic (`calc()`) and relative color syntax are not supported.

use std::f64;

use canonical::ColorSpace;
use coord::Coord;
use cssnumeric::{parse_css_number, CSSNumeric};
pub(crate) use cssnumeric::CSSParseError;

/// Clamps a value into `[min, max]`.
fn clamp_to(val: f64, min: f64, max: f64) -> f64 {
    val.max(min).min(max)
}

/// Interprets a number or a percentage as an RGB channel on the 0-255 scale, clamping accordingly:
/// "102%" maps to 255, and "34.5" stays 34.5 until it is rounded on the way out.
fn parse_rgb_num(num: &str) -> Result<f64, CSSParseError> {
    let parsed = parse_css_number(num)?;
    Ok(clamp_to(parsed.scaled(255.), 0., 255.))
}

/// Interprets a hue, which may carry an angle unit. Bare numbers are degrees. The result is wrapped
/// into `[0, 360)`.
fn parse_hue(num: &str) -> Result<f64, CSSParseError> {
    // "grad" has to be checked before "rad", which it ends with
    let (digits, degrees_per_unit) = if num.ends_with("grad") {
        (&num[..num.len() - 4], 0.9)
    } else if num.ends_with("rad") {
        (&num[..num.len() - 3], 180. / f64::consts::PI)
    } else if num.ends_with("deg") {
        (&num[..num.len() - 3], 1.)
    } else if num.ends_with("turn") {
        (&num[..num.len() - 4], 360.)
    } else {
        (num, 1.)
    };
    match parse_css_number(digits)? {
        CSSNumeric::Number(val) => Ok((val * degrees_per_unit).rem_euclid(360.)),
        // a percentage is never a hue
        CSSNumeric::Percentage(_) => Err(CSSParseError::InvalidColorSyntax),
    }
}

/// Interprets saturation, lightness, or value on the 0-100 scale. "50%" and "50" mean the same
/// thing.
fn parse_percent_channel(num: &str) -> Result<f64, CSSParseError> {
    let val = match parse_css_number(num)? {
        CSSNumeric::Number(val) => val,
        CSSNumeric::Percentage(val) => val,
    };
    Ok(clamp_to(val, 0., 100.))
}

/// Interprets an alpha value: a number from 0 to 1 or a percentage.
pub(crate) fn parse_alpha(num: &str) -> Result<f64, CSSParseError> {
    Ok(clamp_to(parse_css_number(num)?.scaled(1.), 0., 1.))
}

/// Splits the inside of a color function into its three channel tokens and its optional alpha
/// token. Gives an error if the two syntaxes are mixed or the component count is wrong.
fn split_components(inner: &str) -> Result<(Vec<&str>, Option<&str>), CSSParseError> {
    if inner.contains(',') {
        // legacy syntax: commas everywhere, no slash
        if inner.contains('/') {
            return Err(CSSParseError::InvalidColorSyntax);
        }
        let parts: Vec<&str> = inner.split(',').map(|p| p.trim()).collect();
        if parts.iter().any(|p| p.is_empty() || p.contains(char::is_whitespace)) {
            return Err(CSSParseError::InvalidColorSyntax);
        }
        match parts.len() {
            3 => Ok((parts, None)),
            4 => Ok((parts[..3].to_vec(), Some(parts[3]))),
            _ => Err(CSSParseError::InvalidColorSyntax),
        }
    } else {
        // modern syntax: whitespace between channels, alpha after a slash
        let mut halves = inner.split('/');
        let channels: Vec<&str> = halves
            .next()
            .map(|h| h.split_whitespace().collect())
            .unwrap_or_default();
        let alpha = match halves.next() {
            None => None,
            Some(a) => {
                let a = a.trim();
                if a.is_empty() || a.contains(char::is_whitespace) {
                    return Err(CSSParseError::InvalidColorSyntax);
                }
                Some(a)
            }
        };
        if halves.next().is_some() || channels.len() != 3 {
            return Err(CSSParseError::InvalidColorSyntax);
        }
        Ok((channels, alpha))
    }
}

/// Parses a string in functional notation, such as "rgb(255, 0, 0)" or "hsl(120deg 50% 25% / 0.4)",
/// returning the color space it was written in, its channels in that space's native ranges (0-255
/// for RGB, 0-360 and 0-100 for the cylindrical spaces), and its alpha (1 if absent). Expects
/// trimmed, lowercase input. Gives a CSSParseError on invalid input.
pub(crate) fn parse_functional_str(input: &str) -> Result<(ColorSpace, Coord, f64), CSSParseError> {
    let open = input.find('(').ok_or(CSSParseError::InvalidColorSyntax)?;
    if !input.ends_with(')') {
        return Err(CSSParseError::InvalidColorSyntax);
    }
    let space = match &input[..open] {
        "rgb" | "rgba" => ColorSpace::Rgb,
        "hsl" | "hsla" => ColorSpace::Hsl,
        "hsv" | "hsva" => ColorSpace::Hsv,
        _ => return Err(CSSParseError::InvalidColorSyntax),
    };
    let inner = &input[open + 1..input.len() - 1];
    // nested functions (var(), calc()) are out of scope
    if inner.contains('(') || inner.contains(')') {
        return Err(CSSParseError::InvalidColorSyntax);
    }
    let (channels, alpha) = split_components(inner)?;
    let coord = match space {
        ColorSpace::Rgb => Coord {
            x: parse_rgb_num(channels[0])?,
            y: parse_rgb_num(channels[1])?,
            z: parse_rgb_num(channels[2])?,
        },
        ColorSpace::Hsl | ColorSpace::Hsv => Coord {
            x: parse_hue(channels[0])?,
            y: parse_percent_channel(channels[1])?,
            z: parse_percent_channel(channels[2])?,
        },
    };
    let alpha = match alpha {
        Some(a) => parse_alpha(a)?,
        None => 1.,
    };
    Ok((space, coord, alpha))
}
