//! This file splits CSS gradients into their parts and puts them back together. A gradient is a kind
//! (linear, radial, or conic, possibly repeating), an optional orientation, and an ordered list of
//! stops. Every transformation builds a new [`Gradient`]: stops are never edited in place.
//!
//! The decomposition is deliberately shallow. Only the top level of the argument list is split, each
//! stop is split once into a color token and a position, and the orientation is kept as written. Any
//! stop whose color token does not parse (`var(--x)`, `currentColor`, a bare `30%` color hint) is a
//! literal: it survives every transformation exactly as it came in.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use regex::Regex;

use canonical::{parse_color, CanonicalColor};
use cssnumeric::CSSParseError;
use validate::{clean_input, GRADIENT_REGEX};

lazy_static! {
    static ref ANGLE_REGEX: Regex =
        Regex::new(r"(?i)^([-+]?(?:\d+\.?\d*|\.\d+))(deg|grad|rad|turn)$").unwrap();
    static ref LENGTH_REGEX: Regex =
        Regex::new(r"(?i)^[-+]?(?:\d+\.?\d*|\.\d+)(?:%|px|em|rem|ex|ch|vw|vh|vmin|vmax|cm|mm|in|pt|pc)?$")
            .unwrap();
    static ref RADIAL_KEYWORDS: HashSet<&'static str> = hashset! {
        "circle",
        "ellipse",
        "closest-side",
        "closest-corner",
        "farthest-side",
        "farthest-corner",
        "at",
    };
}

/// The three gradient functions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    /// `linear-gradient()`
    Linear,
    /// `radial-gradient()`
    Radial,
    /// `conic-gradient()`
    Conic,
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            GradientKind::Linear => "linear",
            GradientKind::Radial => "radial",
            GradientKind::Conic => "conic",
        };
        write!(f, "{}", name)
    }
}

/// A CSS angle unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    /// Degrees: a full turn is 360.
    Deg,
    /// Gradians: a full turn is 400.
    Grad,
    /// Radians: a full turn is 2π.
    Rad,
    /// Turns.
    Turn,
}

/// An angle as written, like `90deg` or `0.25turn`. It is written back out exactly as it was typed,
/// so `+90deg` stays `+90deg`.
#[derive(Debug, Clone, PartialEq)]
pub struct Angle {
    /// The number, in `unit`s.
    pub value: f64,
    /// The unit the number was written in.
    pub unit: AngleUnit,
    raw: String,
}

impl AngleUnit {
    fn suffix(self) -> &'static str {
        match self {
            AngleUnit::Deg => "deg",
            AngleUnit::Grad => "grad",
            AngleUnit::Rad => "rad",
            AngleUnit::Turn => "turn",
        }
    }
}

impl Angle {
    /// An angle written in the shortest form, like `90deg`.
    pub fn new(value: f64, unit: AngleUnit) -> Angle {
        Angle {
            value,
            unit,
            raw: format!("{}{}", value, unit.suffix()),
        }
    }

    /// The angle in degrees. Not wrapped: `450deg` stays 450.
    pub fn to_degrees(&self) -> f64 {
        match self.unit {
            AngleUnit::Deg => self.value,
            AngleUnit::Grad => self.value * 0.9,
            AngleUnit::Rad => self.value.to_degrees(),
            AngleUnit::Turn => self.value * 360.,
        }
    }

    fn parse(token: &str) -> Option<Angle> {
        let caps = ANGLE_REGEX.captures(token)?;
        let value: f64 = caps[1].parse().ok()?;
        let unit = match caps[2].to_ascii_lowercase().as_str() {
            "deg" => AngleUnit::Deg,
            "grad" => AngleUnit::Grad,
            "rad" => AngleUnit::Rad,
            _ => AngleUnit::Turn,
        };
        Some(Angle {
            value,
            unit,
            raw: token.to_string(),
        })
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// The first argument of a gradient, when it is not a stop.
#[derive(Debug, Clone, PartialEq)]
pub enum Orientation {
    /// A linear gradient's angle, like `90deg`.
    Angle(Angle),
    /// A linear gradient's direction, like `to top right`, as written.
    Direction(String),
    /// A radial gradient's shape, extent, and position, like `circle at center`, as written.
    Shape(String),
    /// A conic gradient's start angle and position, like `from 45deg at 50% 50%`, as written.
    Conic(String),
    /// No orientation argument: the kind's default applies.
    Implicit,
}

impl Orientation {
    fn parse(kind: GradientKind, segment: &str) -> Orientation {
        let lower = segment.to_ascii_lowercase();
        let first = lower.split_whitespace().next().unwrap_or("");
        match kind {
            GradientKind::Linear => {
                if let Some(angle) = Angle::parse(segment) {
                    Orientation::Angle(angle)
                } else if first == "to" {
                    Orientation::Direction(segment.to_string())
                } else {
                    Orientation::Implicit
                }
            }
            GradientKind::Radial => {
                // a stop always starts with a color, so leading lengths mean an explicit size
                let size_then_position = lower
                    .split_whitespace()
                    .take_while(|&t| t != "at")
                    .all(|t| LENGTH_REGEX.is_match(t));
                if RADIAL_KEYWORDS.contains(first) || size_then_position {
                    Orientation::Shape(segment.to_string())
                } else {
                    Orientation::Implicit
                }
            }
            GradientKind::Conic => {
                if first == "from" || first == "at" {
                    Orientation::Conic(segment.to_string())
                } else {
                    Orientation::Implicit
                }
            }
        }
    }

    /// Returns `true` unless this is [`Orientation::Implicit`].
    pub fn is_explicit(&self) -> bool {
        *self != Orientation::Implicit
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Orientation::Angle(ref angle) => write!(f, "{}", angle),
            Orientation::Direction(ref s) | Orientation::Shape(ref s) | Orientation::Conic(ref s) => {
                write!(f, "{}", s)
            }
            Orientation::Implicit => Ok(()),
        }
    }
}

/// The color part of a stop.
#[derive(Debug, Clone, PartialEq)]
pub enum StopColor {
    /// A token that parsed as a color, kept alongside its original text.
    Color {
        /// The color as written.
        token: String,
        /// The parsed color.
        color: CanonicalColor,
    },
    /// Anything else, passed through untouched.
    Literal(String),
}

impl StopColor {
    fn from_token(token: &str) -> StopColor {
        match parse_color(token) {
            Some(color) => StopColor::Color {
                token: token.to_string(),
                color,
            },
            None => StopColor::Literal(token.to_string()),
        }
    }

    /// The token as written.
    pub fn token(&self) -> &str {
        match *self {
            StopColor::Color { ref token, .. } => token,
            StopColor::Literal(ref token) => token,
        }
    }

    /// The parsed color, if this is a real color.
    pub fn color(&self) -> Option<&CanonicalColor> {
        match *self {
            StopColor::Color { ref color, .. } => Some(color),
            StopColor::Literal(_) => None,
        }
    }
}

/// One stop: a color or literal, then an optional position such as `20%` or `10px 40px`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// The color or literal.
    pub color: StopColor,
    /// Everything after the color token, as written.
    pub position: Option<String>,
}

impl fmt::Display for GradientStop {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.position {
            Some(ref pos) => write!(f, "{} {}", self.color.token(), pos),
            None => write!(f, "{}", self.color.token()),
        }
    }
}

/// A decomposed gradient. Build one by parsing a string; transform it with
/// [`map_colors`](Gradient::map_colors) or [`with_stop_colors`](Gradient::with_stop_colors), which
/// return new values; write it back out with `Display`.
///
/// # Example
/// ```
/// # use tinct::gradient::{Gradient, GradientKind};
/// let g: Gradient = "linear-gradient(90deg, #fff, #000 80%)".parse().unwrap();
/// assert_eq!(g.kind(), GradientKind::Linear);
/// assert_eq!(g.angle_degrees(), Some(90.));
/// assert_eq!(g.stops().len(), 2);
/// let swapped = g.with_stop_colors(&["red", "blue"]);
/// assert_eq!(swapped.to_string(), "linear-gradient(90deg, red, blue 80%)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    kind: GradientKind,
    repeating: bool,
    orientation: Orientation,
    stops: Vec<GradientStop>,
}

/// Splits on `delim` wherever it is not inside parentheses.
fn split_top_level(input: &str, delim: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c == delim && depth == 0 => {
                parts.push(&input[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

/// Splits a stop on its first whitespace outside parentheses.
fn split_stop(segment: &str) -> (&str, Option<&str>) {
    let mut depth = 0usize;
    for (i, c) in segment.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                let rest = segment[i..].trim();
                let position = if rest.is_empty() { None } else { Some(rest) };
                return (&segment[..i], position);
            }
            _ => {}
        }
    }
    (segment, None)
}

fn direction_degrees(direction: &str) -> Option<f64> {
    let mut words: Vec<String> = direction
        .split_whitespace()
        .skip(1)
        .map(|w| w.to_ascii_lowercase())
        .collect();
    words.sort();
    let words: Vec<&str> = words.iter().map(|w| w.as_str()).collect();
    match words.as_slice() {
        ["top"] => Some(0.),
        ["right", "top"] => Some(45.),
        ["right"] => Some(90.),
        ["bottom", "right"] => Some(135.),
        ["bottom"] => Some(180.),
        ["bottom", "left"] => Some(225.),
        ["left"] => Some(270.),
        ["left", "top"] => Some(315.),
        _ => None,
    }
}

impl Gradient {
    /// Which gradient function this is.
    pub fn kind(&self) -> GradientKind {
        self.kind
    }

    /// Whether this is a `repeating-` gradient.
    pub fn repeating(&self) -> bool {
        self.repeating
    }

    /// The orientation argument, or [`Orientation::Implicit`] if there was none.
    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// Every stop, literals included, in order.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// The stops whose color token parsed, in order.
    pub fn color_stops(&self) -> Vec<&GradientStop> {
        self.stops.iter().filter(|s| s.color.color().is_some()).collect()
    }

    /// The direction of the gradient line in degrees, for linear gradients, or the start angle, for
    /// conic ones. Linear gradients without an orientation point down (180deg); conic ones start at
    /// 0deg. `None` for radial gradients and for directions that are not one of the eight keywords.
    pub fn angle_degrees(&self) -> Option<f64> {
        match (self.kind, &self.orientation) {
            (_, &Orientation::Angle(ref angle)) => Some(angle.to_degrees()),
            (_, &Orientation::Direction(ref dir)) => direction_degrees(dir),
            (GradientKind::Linear, &Orientation::Implicit) => Some(180.),
            (GradientKind::Conic, &Orientation::Implicit) => Some(0.),
            (GradientKind::Conic, &Orientation::Conic(ref desc)) => {
                let mut tokens = desc.split_whitespace();
                match tokens.next() {
                    Some(from) if from.eq_ignore_ascii_case("from") => {
                        tokens.next().and_then(Angle::parse).map(|a| a.to_degrees())
                    }
                    _ => Some(0.),
                }
            }
            _ => None,
        }
    }

    /// Builds a new gradient with every color stop's token replaced by `f(color, token)`. Literal
    /// stops, positions, and the orientation are copied as they are.
    pub fn map_colors<F>(&self, mut f: F) -> Gradient
    where
        F: FnMut(&CanonicalColor, &str) -> String,
    {
        let stops = self
            .stops
            .iter()
            .map(|stop| {
                let color = match stop.color {
                    StopColor::Color {
                        ref token,
                        ref color,
                    } => StopColor::from_token(&f(color, token)),
                    StopColor::Literal(ref token) => StopColor::Literal(token.clone()),
                };
                GradientStop {
                    color,
                    position: stop.position.clone(),
                }
            })
            .collect();
        Gradient {
            stops,
            orientation: self.orientation.clone(),
            ..*self
        }
    }

    /// Builds a new gradient with the color stops' tokens replaced, in order, by `colors`. Literal
    /// stops do not use up a replacement. Extra replacements are ignored; color stops beyond the end
    /// of `colors` keep their token.
    pub fn with_stop_colors<S: AsRef<str>>(&self, colors: &[S]) -> Gradient {
        let mut replacements = colors.iter();
        self.map_colors(|_, token| match replacements.next() {
            Some(new) => {
                let new: &str = new.as_ref();
                new.to_string()
            }
            None => token.to_string(),
        })
    }
}

impl FromStr for Gradient {
    type Err = CSSParseError;

    /// Decomposes a gradient string. Fails if the outer shape is not a gradient function, if an
    /// argument is empty, or if there are no stops at all.
    fn from_str(input: &str) -> Result<Gradient, CSSParseError> {
        let cleaned = clean_input(input);
        let caps = GRADIENT_REGEX
            .captures(&cleaned)
            .ok_or(CSSParseError::InvalidColorSyntax)?;
        let repeating = caps.get(1).is_some();
        let kind = match caps[2].to_ascii_lowercase().as_str() {
            "linear" => GradientKind::Linear,
            "radial" => GradientKind::Radial,
            _ => GradientKind::Conic,
        };
        let segments: Vec<&str> = split_top_level(&caps[3], ',')
            .into_iter()
            .map(|s| s.trim())
            .collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(CSSParseError::InvalidColorSyntax);
        }
        let orientation = Orientation::parse(kind, segments[0]);
        let skip = if orientation.is_explicit() { 1 } else { 0 };
        let stops: Vec<GradientStop> = segments[skip..]
            .iter()
            .map(|segment| {
                let (token, position) = split_stop(segment);
                GradientStop {
                    color: StopColor::from_token(token),
                    position: position.map(|p| p.to_string()),
                }
            })
            .collect();
        if stops.is_empty() {
            return Err(CSSParseError::InvalidColorSyntax);
        }
        Ok(Gradient {
            kind,
            repeating,
            orientation,
            stops,
        })
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut args: Vec<String> = Vec::with_capacity(self.stops.len() + 1);
        if self.orientation.is_explicit() {
            args.push(self.orientation.to_string());
        }
        args.extend(self.stops.iter().map(|s| s.to_string()));
        let prefix = if self.repeating { "repeating-" } else { "" };
        write!(f, "{}{}-gradient({})", prefix, self.kind, args.join(", "))
    }
}

/// Decomposes a gradient string, or returns `None` if it is not one.
pub fn decompose(input: &str) -> Option<Gradient> {
    input.parse().ok()
}

/// Replaces the color stops of `original`, in order, with `new_colors` and writes the result.
/// Returns `original` unchanged if it does not decompose or has no color stops.
///
/// # Example
/// ```
/// # use tinct::gradient::reconstruct;
/// let g = "radial-gradient(circle, red, 30%, rgb(0, 0, 255) 90%)";
/// assert_eq!(
///     reconstruct(g, &["#000", "#fff"]),
///     "radial-gradient(circle, #000, 30%, #fff 90%)"
/// );
/// ```
pub fn reconstruct<S: AsRef<str>>(original: &str, new_colors: &[S]) -> String {
    match decompose(original) {
        Some(ref gradient) if !gradient.color_stops().is_empty() => {
            gradient.with_stop_colors(new_colors).to_string()
        }
        _ => original.to_string(),
    }
}

/// The color tokens of a gradient's color stops, in order and as written. Empty if the input is not
/// a gradient.
pub fn extract_gradient_stops(input: &str) -> Vec<String> {
    decompose(input)
        .map(|g| {
            g.color_stops()
                .iter()
                .map(|s| s.color.token().to_string())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_split_top_level() {
        assert_eq!(
            split_top_level("90deg, rgb(1, 2, 3) 10%, red", ','),
            vec!["90deg", " rgb(1, 2, 3) 10%", " red"]
        );
        assert_eq!(split_stop("rgb(1, 2, 3) 10% 20%"), ("rgb(1, 2, 3)", Some("10% 20%")));
        assert_eq!(split_stop("red"), ("red", None));
    }

    #[test]
    fn test_decompose_linear() {
        let g = decompose("linear-gradient(90deg, #fff, #000)").unwrap();
        assert_eq!(g.kind(), GradientKind::Linear);
        assert!(!g.repeating());
        assert_eq!(
            *g.orientation(),
            Orientation::Angle(Angle::new(90., AngleUnit::Deg))
        );
        assert_eq!(extract_gradient_stops("linear-gradient(90deg, #fff, #000)"), vec!["#fff", "#000"]);
        assert_eq!(g.to_string(), "linear-gradient(90deg, #fff, #000)");
    }

    #[test]
    fn test_orientations() {
        let g = decompose("linear-gradient(red, blue)").unwrap();
        assert_eq!(*g.orientation(), Orientation::Implicit);
        assert_eq!(g.angle_degrees(), Some(180.));
        let g = decompose("linear-gradient(to top right, red, blue)").unwrap();
        assert_eq!(g.angle_degrees(), Some(45.));
        let g = decompose("linear-gradient(0.25turn, red, blue)").unwrap();
        assert_eq!(g.angle_degrees(), Some(90.));
        assert_eq!(g.to_string(), "linear-gradient(0.25turn, red, blue)");
        let g = decompose("repeating-radial-gradient(circle at center, red 0, blue 10px)").unwrap();
        assert!(g.repeating());
        assert_eq!(*g.orientation(), Orientation::Shape("circle at center".to_string()));
        assert_eq!(g.angle_degrees(), None);
        let g = decompose("radial-gradient(40px 20px at 10% 10%, red, blue)").unwrap();
        assert_eq!(*g.orientation(), Orientation::Shape("40px 20px at 10% 10%".to_string()));
        let g = decompose("radial-gradient(red, blue)").unwrap();
        assert_eq!(*g.orientation(), Orientation::Implicit);
        let g = decompose("conic-gradient(from 45deg at 50% 50%, red, blue)").unwrap();
        assert_eq!(g.angle_degrees(), Some(45.));
        assert_eq!(g.stops().len(), 2);
    }

    #[test]
    fn test_angle_written_as_typed() {
        let out = reconstruct("linear-gradient(+90deg, red, blue)", &["#000", "#fff"]);
        assert_eq!(out, "linear-gradient(+90deg, #000, #fff)");
        let out = reconstruct("linear-gradient(90.50DEG, red, blue)", &["#000", "#fff"]);
        assert_eq!(out, "linear-gradient(90.50DEG, #000, #fff)");
        let g = decompose("linear-gradient(90.50deg, red, blue)").unwrap();
        assert_eq!(g.angle_degrees(), Some(90.5));
        assert_eq!(Angle::new(0.25, AngleUnit::Turn).to_string(), "0.25turn");
    }

    #[test]
    fn test_literals_pass_through() {
        let input = "linear-gradient(to right, red, 30%, var(--mid) 50%, currentColor, hsl(240, 100%, 50%) 90%)";
        let g = decompose(input).unwrap();
        assert_eq!(g.stops().len(), 5);
        assert_eq!(g.color_stops().len(), 2);
        assert_eq!(
            reconstruct(input, &["#111", "#222"]),
            "linear-gradient(to right, #111, 30%, var(--mid) 50%, currentColor, #222 90%)"
        );
        // short replacement lists leave the rest alone
        assert_eq!(
            reconstruct(input, &["#111"]),
            "linear-gradient(to right, #111, 30%, var(--mid) 50%, currentColor, hsl(240, 100%, 50%) 90%)"
        );
    }

    #[test]
    fn test_no_color_stops() {
        let input = "linear-gradient(var(--a), var(--b))";
        assert_eq!(reconstruct(input, &["red", "blue"]), input);
        assert!(extract_gradient_stops(input).is_empty());
        assert_eq!(reconstruct("not a gradient", &["red"]), "not a gradient");
    }

    #[test]
    fn test_decompose_failures() {
        assert!(decompose("linear-gradient(red, , blue)").is_none());
        assert!(decompose("linear-gradient(90deg)").is_none());
        assert!(decompose("rgb(1, 2, 3)").is_none());
        assert!(decompose("").is_none());
    }

    #[test]
    fn test_map_colors_is_a_new_value() {
        let g = decompose("conic-gradient(from 0deg, red, blue)").unwrap();
        let upper = g.map_colors(|_, token| token.to_uppercase());
        assert_eq!(upper.to_string(), "conic-gradient(from 0deg, RED, BLUE)");
        assert_eq!(g.to_string(), "conic-gradient(from 0deg, red, blue)");
        let alpha: Vec<f64> = upper
            .color_stops()
            .iter()
            .filter_map(|s| s.color.color().map(|c| c.alpha()))
            .collect();
        assert_eq!(alpha, vec![1., 1.]);
    }
}
