//! The state behind a color text field. The user types freely; the typed text is only checked when
//! [`validate`](ColorInput::validate) is called (on blur, say). A valid entry replaces the committed
//! color, written in the field's configured notation. An invalid one sets the invalid flag and an
//! error message, and leaves the committed color alone. Nothing here panics or returns an error for
//! bad input: the flag is the whole report.

use canonical::{parse_color, CanonicalColor};
use format::{format_color, FormatErrorPolicy, FormatOptions, FormatTarget};
use random::{random_hex_color, RandomError};
use validate::{is_valid_color, is_valid_css_var, is_valid_gradient, ValidationMode};

/// The notation a color field commits colors in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// Hex codes.
    Hex,
    /// `rgb()` and `rgba()`.
    Rgb,
    /// `hsl()` and `hsla()`.
    Hsl,
}

impl Default for ColorFormat {
    fn default() -> ColorFormat {
        ColorFormat::Hex
    }
}

/// How a color field behaves.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorInputConfig {
    /// The notation committed colors are written in.
    pub format: ColorFormat,
    /// The field's alpha, as a percentage. Anything but 100 makes hex fields commit eight-digit codes.
    pub alpha: f64,
    /// Whether a gradient can be typed in.
    pub allow_gradient: bool,
    /// How strictly typed functional notation is checked.
    pub mode: ValidationMode,
}

impl Default for ColorInputConfig {
    fn default() -> ColorInputConfig {
        ColorInputConfig {
            format: ColorFormat::Hex,
            alpha: 100.,
            allow_gradient: false,
            mode: ValidationMode::Strict,
        }
    }
}

impl ColorInputConfig {
    fn format_options(&self) -> FormatOptions {
        let target = match self.format {
            ColorFormat::Hex if self.alpha == 100. => FormatTarget::Hex,
            ColorFormat::Hex => FormatTarget::Hexa,
            ColorFormat::Rgb => FormatTarget::Rgb,
            ColorFormat::Hsl => FormatTarget::Hsl,
        };
        FormatOptions {
            on_format_error: FormatErrorPolicy::Propagate,
            ..FormatOptions::with_format(target)
        }
    }
}

/// The state of one color field.
///
/// # Example
/// ```
/// # use tinct::input::{ColorInput, ColorInputConfig};
/// let mut field = ColorInput::with_initial("#000000", ColorInputConfig::default());
/// field.handle_change(" rgb(255, 0, 0); ");
/// field.validate();
/// assert_eq!(field.color(), "#FF0000");
/// assert!(!field.is_invalid());
///
/// field.handle_change("rgb(255, 0)");
/// field.validate();
/// assert!(field.is_invalid());
/// assert_eq!(field.color(), "#FF0000");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorInput {
    config: ColorInputConfig,
    input_value: String,
    color: String,
    is_invalid: bool,
    error: Option<String>,
}

impl ColorInput {
    /// A field holding a random opaque hex color.
    pub fn new(config: ColorInputConfig) -> Result<ColorInput, RandomError> {
        Ok(ColorInput::with_initial(&random_hex_color(None)?, config))
    }

    /// A field holding the given color, taken as is.
    pub fn with_initial(color: &str, config: ColorInputConfig) -> ColorInput {
        ColorInput {
            config,
            input_value: color.to_string(),
            color: color.to_string(),
            is_invalid: false,
            error: None,
        }
    }

    /// The text in the field.
    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    /// The last committed color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Whether the last validation failed.
    pub fn is_invalid(&self) -> bool {
        self.is_invalid
    }

    /// Why the last validation failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.as_str())
    }

    /// The field's configuration.
    pub fn config(&self) -> &ColorInputConfig {
        &self.config
    }

    /// Records new text. Does not validate it.
    pub fn handle_change(&mut self, input: &str) {
        self.input_value = input.to_string();
    }

    fn accept(&mut self, color: String) {
        self.color = color;
        self.is_invalid = false;
        self.error = None;
    }

    fn reject(&mut self, message: String) {
        self.is_invalid = true;
        self.error = Some(message);
    }

    /// Commits a parsed color in the configured notation.
    fn commit(&mut self, color: &CanonicalColor) {
        match format_color(color, &self.config.format_options()) {
            Ok(formatted) => self.accept(formatted),
            Err(err) => self.reject(err.to_string()),
        }
    }

    /// Checks the text in the field and commits it if it is a color. Returns `true` if it was.
    pub fn validate(&mut self) -> bool {
        let trimmed = self.input_value.trim().to_string();
        if !is_valid_color(&trimmed, self.config.mode) {
            self.reject(format!("{:?} is not a valid color", trimmed));
            return false;
        }
        if is_valid_gradient(&trimmed) {
            if self.config.allow_gradient {
                self.accept(trimmed);
            } else {
                self.reject("gradients are not allowed here".to_string());
            }
            return !self.is_invalid;
        }
        if is_valid_css_var(&trimmed) {
            self.reject(format!("{} cannot be resolved to a color", trimmed));
            return false;
        }
        match trimmed.parse::<CanonicalColor>() {
            Ok(color) => self.commit(&color),
            Err(err) => self.reject(format!("cannot parse {:?}: {}", trimmed, err)),
        }
        !self.is_invalid
    }

    /// Sets the field's text and commits it in one step, as when a color is picked from a palette.
    /// Gradients are committed as they are, whether or not the field accepts typed gradients.
    pub fn set_color_directly(&mut self, color: &str) {
        self.input_value = color.to_string();
        let trimmed = color.trim().to_string();
        if is_valid_gradient(&trimmed) {
            self.accept(trimmed);
            return;
        }
        match parse_color(&trimmed) {
            Some(parsed) => self.commit(&parsed),
            None => self.reject(format!("{:?} is not a valid color", trimmed)),
        }
    }
}
