//! WCAG relative luminance, and the foreground choice that follows from it. Luminance is computed on
//! linearized sRGB with the WCAG 2.0 constants (including its 0.03928 threshold, not the 0.04045 that
//! sRGB itself uses), so results match the usual contrast checkers.

use canonical::{parse_color, CanonicalColor};
use consts::{CONTRAST_THRESHOLD, LUMINANCE_LINEAR_THRESHOLD, LUMINANCE_WEIGHTS};
use gradient::decompose;
use validate::{clean_input, is_valid_gradient};

/// The theme's light and dark foreground colors. Any strings work; they are returned as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastTokens {
    /// Used on dark backgrounds.
    pub white: String,
    /// Used on light backgrounds.
    pub black: String,
}

impl Default for ContrastTokens {
    fn default() -> ContrastTokens {
        ContrastTokens {
            white: "#F9F6F9".to_string(),
            black: "#0B0710".to_string(),
        }
    }
}

fn linearize(channel: f64) -> f64 {
    if channel <= LUMINANCE_LINEAR_THRESHOLD {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

impl CanonicalColor {
    /// The WCAG relative luminance, from 0 for black to 1 for white. Alpha is ignored.
    pub fn relative_luminance(&self) -> f64 {
        let rgb = self.to_rgb();
        let [wr, wg, wb] = LUMINANCE_WEIGHTS;
        wr * linearize(rgb.r) + wg * linearize(rgb.g) + wb * linearize(rgb.b)
    }
}

/// The relative luminance of a color string. For a gradient, the mean over the stops that are real
/// colors, or 0 if none are. `None` if a solid color does not parse, or for a `var()` reference.
///
/// # Example
/// ```
/// # use tinct::luminance::relative_luminance;
/// assert_eq!(relative_luminance("#FFF"), Some(1.));
/// assert_eq!(relative_luminance("linear-gradient(#fff, #000)"), Some(0.5));
/// assert_eq!(relative_luminance("var(--bg)"), None);
/// ```
pub fn relative_luminance(input: &str) -> Option<f64> {
    let cleaned = clean_input(input);
    if is_valid_gradient(&cleaned) {
        let luminances: Vec<f64> = decompose(&cleaned)
            .map(|g| {
                g.color_stops()
                    .iter()
                    .filter_map(|s| s.color.color().map(|c| c.relative_luminance()))
                    .collect()
            })
            .unwrap_or_default();
        if luminances.is_empty() {
            return Some(0.);
        }
        return Some(luminances.iter().sum::<f64>() / luminances.len() as f64);
    }
    parse_color(&cleaned).map(|c| c.relative_luminance())
}

/// Picks the foreground token that reads best on `background`: `white` below a luminance of 0.5,
/// `black` otherwise. `None` if the luminance cannot be computed.
pub fn contrast_color(background: &str, tokens: &ContrastTokens) -> Option<String> {
    relative_luminance(background).map(|lum| {
        if lum < CONTRAST_THRESHOLD {
            tokens.white.clone()
        } else {
            tokens.black.clone()
        }
    })
}
