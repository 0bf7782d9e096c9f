//! This file separates out the more difficult aspects of string parsing, in this case dealing with
//! CSS numeric notation and all of its warts. Its goal is to turn the individual tokens of functional
//! color notation ("255", ".5", "40%", "-12.5") into values the color parser can scale into range.
//! (Source for CSS syntax: [https://www.w3.org/TR/css-color-4/](https://www.w3.org/TR/css-color-4/).)

use std::error::Error;
use std::fmt;

/// A CSS numeric value: either a plain number, like 255 or 0.8, or a percentage, like 104%.
#[derive(Debug, PartialEq, Copy, Clone)]
pub(crate) enum CSSNumeric {
    /// A string of digits with at most one '.', and an optional leading '+' or '-'.
    Number(f64),
    /// A number followed by '%'. Holds the number before the sign, so "50%" is 50.
    Percentage(f64),
}

impl CSSNumeric {
    /// Scales the value onto a channel whose full range is `0..=max`. Plain numbers are taken as-is,
    /// percentages are a fraction of `max`.
    pub(crate) fn scaled(self, max: f64) -> f64 {
        match self {
            CSSNumeric::Number(val) => val,
            CSSNumeric::Percentage(val) => val / 100. * max,
        }
    }
}

/// An error in parsing a CSS string. Covers many different kinds of errors.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum CSSParseError {
    /// This indicates that non-numeric characters were used in a string on which a parse into a
    /// number was attempted.
    InvalidNumericCharacters,
    /// This indicates that invalid numeric syntax was used, such as multiple periods or plus or minus
    /// in invalid places.
    InvalidNumericSyntax,
    /// This indicates that a general color syntax error occurred, such as mismatching parentheses,
    /// the wrong number of components, or uninterpretable tokens.
    InvalidColorSyntax,
    /// This indicates a '#' color whose digits are not hexadecimal or whose length is not 3, 4, 6, or
    /// 8.
    InvalidHexCode,
    /// This indicates a bare word that is not one of the CSS named colors.
    UnknownColorName,
}

impl fmt::Display for CSSParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match *self {
            CSSParseError::InvalidNumericCharacters => "unexpected non-numeric characters",
            CSSParseError::InvalidNumericSyntax => "invalid numeric syntax",
            CSSParseError::InvalidColorSyntax => "invalid color syntax",
            CSSParseError::InvalidHexCode => "invalid hex color code",
            CSSParseError::UnknownColorName => "unknown color name",
        };
        write!(f, "{}", msg)
    }
}

impl Error for CSSParseError {}

/// Parses a CSS number (digits with at most one '.') or a CSS percentage (a number followed by
/// '%'), either with an optional sign. Returns a struct that represents these possibilities.
pub(crate) fn parse_css_number(num: &str) -> Result<CSSNumeric, CSSParseError> {
    let mut chars: Vec<char> = num.chars().collect();
    if chars.is_empty() {
        return Err(CSSParseError::InvalidNumericSyntax);
    }
    // if invalid characters, return appropriate error
    if !chars.iter().all(|&c| "0123456789-+.%".contains(c)) {
        return Err(CSSParseError::InvalidNumericCharacters);
    }
    // test if initial character is '-' or '+'. Remove and set sign flag accordingly.
    let is_positive = chars[0] != '-';
    if "-+".contains(chars[0]) {
        chars.remove(0);
    }
    // if any other pluses or minuses, throw error
    if chars.iter().any(|&c| "-+".contains(c)) {
        return Err(CSSParseError::InvalidNumericSyntax);
    }
    // a percent sign is only allowed once, at the very end
    let is_percentage = match chars.iter().filter(|&&c| c == '%').count() {
        0 => false,
        1 if chars.last() == Some(&'%') => {
            chars.pop();
            true
        }
        _ => return Err(CSSParseError::InvalidNumericSyntax),
    };
    // at most one period, and never trailing: "5." is not a CSS number even though Rust would
    // happily parse it
    if chars.iter().filter(|&&c| c == '.').count() > 1 || chars.last() == Some(&'.') {
        return Err(CSSParseError::InvalidNumericSyntax);
    }
    if chars.is_empty() {
        return Err(CSSParseError::InvalidNumericSyntax);
    }
    let unsigned: f64 = chars
        .iter()
        .collect::<String>()
        .parse()
        .map_err(|_| CSSParseError::InvalidNumericSyntax)?;
    let val = if is_positive { unsigned } else { -unsigned };
    if is_percentage {
        Ok(CSSNumeric::Percentage(val))
    } else {
        Ok(CSSNumeric::Number(val))
    }
}
