//! The color grammar validator: decides whether a string a user typed is a color, without building
//! the color. Hex codes, `var()` references, and gradient shapes are recognized by regex in either
//! mode. The fast path for functional notation checks exact numeric ranges in strict mode and
//! "digits in the right places" in loose mode. Anything neither path matches gets a full parse as a
//! last resort, which is how color keywords like "red" and percentage channels validate.

use regex::Regex;

use canonical::{parse_color, ColorSpace};
use format::{serialize, FormatTarget};

/// How carefully functional notation is checked.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// The fast path only takes RGB channels 0-255, hue 0-360, percentages 0-100, and alpha 0-1 or a
    /// percentage. Anything it misses still gets the full parse.
    Strict,
    /// The fast path takes any digits in a numeric position.
    Loose,
}

impl Default for ValidationMode {
    fn default() -> ValidationMode {
        ValidationMode::Strict
    }
}

// building blocks for the strict grammars
const BYTE: &str = r"(?:25[0-5]|2[0-4]\d|1?\d?\d)";
const PCT: &str = r"(?:100(?:\.0+)?|\d?\d(?:\.\d+)?)%";
const HUE: &str = r"(?:360(?:\.0+)?|(?:3[0-5]\d|[12]\d\d|\d?\d)(?:\.\d+)?)(?:deg)?";
const LOOSE_ALPHA: &str = r"(?:\d*\.?\d+|\d+%)";

fn alpha_strict() -> String {
    format!(r"(?:0(?:\.\d+)?|1(?:\.0+)?|\.\d+|{})", PCT)
}

fn functional_regex(names: &str, a: &str, b: &str, c: &str, alpha: &str) -> Regex {
    let pattern = format!(
        r"(?i)^{names}\(\s*(?:{a}\s*,\s*{b}\s*,\s*{c}(?:\s*,\s*{alpha})?|{a}\s+{b}\s+{c}(?:\s*/\s*{alpha})?)\s*\)$",
        names = names,
        a = a,
        b = b,
        c = c,
        alpha = alpha
    );
    // the pattern is assembled from the constants above and always compiles
    Regex::new(&pattern).unwrap()
}

lazy_static! {
    static ref HEX_REGEX: Regex =
        Regex::new(r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap();
    static ref CSS_VAR_REGEX: Regex =
        Regex::new(r"^var\(\s*--[A-Za-z0-9_-]+\s*(?:,\s*.+)?\)$").unwrap();
    pub(crate) static ref GRADIENT_REGEX: Regex =
        Regex::new(r"(?i)^(repeating-)?(linear|radial|conic)-gradient\((.+)\)$").unwrap();
    static ref RGB_STRICT_REGEX: Regex =
        functional_regex("rgba?", BYTE, BYTE, BYTE, &alpha_strict());
    static ref HSL_STRICT_REGEX: Regex =
        functional_regex("hs[lv]a?", HUE, PCT, PCT, &alpha_strict());
    static ref RGB_LOOSE_REGEX: Regex =
        functional_regex("rgba?", r"\d+", r"\d+", r"\d+", LOOSE_ALPHA);
    static ref HSL_LOOSE_REGEX: Regex = functional_regex(
        "hs[lv]a?",
        r"-?\d*\.?\d+(?:deg|rad|grad|turn)?",
        r"\d*\.?\d+%",
        r"\d*\.?\d+%",
        LOOSE_ALPHA
    );
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
    static ref QUOTES_REGEX: Regex = Regex::new(r#"^['"]|['"]$"#).unwrap();
    static ref TRAILING_SEMICOLONS_REGEX: Regex = Regex::new(r";+$").unwrap();
}

/// Normalizes raw input before matching: trims, drops wrapping quotes and trailing semicolons, and
/// collapses every run of whitespace to a single space.
///
/// # Example
/// ```
/// # use tinct::validate::clean_input;
/// assert_eq!(clean_input("  \"rgb(1,\n  2, 3)\";  "), "rgb(1, 2, 3)");
/// ```
pub fn clean_input(raw: &str) -> String {
    let unsemi = TRAILING_SEMICOLONS_REGEX.replace(raw.trim(), "");
    let unquoted = QUOTES_REGEX.replace_all(unsemi.trim(), "");
    // a semicolon inside the quotes, like "'red;'"
    let unsemi = TRAILING_SEMICOLONS_REGEX.replace(unquoted.trim(), "");
    WHITESPACE_REGEX.replace_all(unsemi.trim(), " ").into_owned()
}

/// Returns `true` for a 3, 4, 6, or 8 digit hex code.
pub fn is_valid_hex(input: &str) -> bool {
    HEX_REGEX.is_match(&clean_input(input))
}

/// Returns `true` for a `var(--name)` reference, with or without a fallback.
pub fn is_valid_css_var(input: &str) -> bool {
    CSS_VAR_REGEX.is_match(&clean_input(input))
}

/// Returns `true` if the input has the outer shape of a CSS gradient. The stops themselves are not
/// checked here.
pub fn is_valid_gradient(input: &str) -> bool {
    GRADIENT_REGEX.is_match(&clean_input(input))
}

/// Decides whether the input is a color, a color reference, or a gradient. Input that no grammar
/// matches is valid if it parses, in either mode.
///
/// # Example
/// ```
/// # use tinct::validate::{is_valid_color, ValidationMode};
/// assert!(is_valid_color("rgb(255, 0, 0)", ValidationMode::Strict));
/// assert!(is_valid_color("rgb(10%, 20%, 30%)", ValidationMode::Strict));
/// assert!(is_valid_color("tomato", ValidationMode::Strict));
/// assert!(!is_valid_color("rgb(1, 2)", ValidationMode::Loose));
/// ```
pub fn is_valid_color(input: &str, mode: ValidationMode) -> bool {
    let cleaned = clean_input(input);
    if CSS_VAR_REGEX.is_match(&cleaned) || GRADIENT_REGEX.is_match(&cleaned) {
        return true;
    }
    let fast_ok = HEX_REGEX.is_match(&cleaned)
        || match mode {
            ValidationMode::Strict => {
                RGB_STRICT_REGEX.is_match(&cleaned) || HSL_STRICT_REGEX.is_match(&cleaned)
            }
            ValidationMode::Loose => {
                RGB_LOOSE_REGEX.is_match(&cleaned) || HSL_LOOSE_REGEX.is_match(&cleaned)
            }
        };
    if fast_ok {
        return true;
    }
    debug!("no color grammar matched {:?}, falling back to a full parse", cleaned);
    parse_color(&cleaned).is_some()
}

/// Converts any parseable solid color to its canonical `rgb()` or `rgba()` string. Returns `None`
/// for `var()` references, gradients, and anything that does not parse.
pub fn normalize_color(input: &str) -> Option<String> {
    let cleaned = clean_input(input);
    if CSS_VAR_REGEX.is_match(&cleaned) || GRADIENT_REGEX.is_match(&cleaned) {
        return None;
    }
    parse_color(&cleaned).map(|c| serialize(&c.to_space(ColorSpace::Rgb), FormatTarget::Rgb))
}
