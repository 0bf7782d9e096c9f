//! This module simply brings the most common Tinct functionality under a single namespace, to
//! prevent excessive imports. It includes the color traits, the ubiquitous [`RGBColor`] and
//! [`CanonicalColor`], the parse error [`CSSParseError`], and the string-level entry points of every
//! stage: validation, parsing, gradients, formatting, adjustment, luminance, and random colors. The
//! alternative color spaces in the `colors` module are not included.

pub use adjust::{adjust_lightness, alpha, darken, dynamic_elevation, lighten};
pub use bound::Bound;
pub use canonical::{parse_color, CanonicalColor, ColorSpace};
pub use color::{Color, RGBColor};
pub use cssnumeric::CSSParseError;
pub use format::{format_color, format_gradient, format_str, FormatError, FormatErrorPolicy, FormatOptions, FormatTarget};
pub use gradient::{extract_gradient_stops, Gradient, GradientKind};
pub use luminance::{contrast_color, relative_luminance, ContrastTokens};
pub use random::{random_color, RandomError, RandomKind};
pub use validate::{is_valid_color, normalize_color, ValidationMode};
