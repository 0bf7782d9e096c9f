//! This file provides the constants used for color space conversion and the perceptual adjustments
//! built on top of it. The OKLab matrices are kept as plain row-major arrays so the forward and
//! inverse transforms can be checked against each other in one place.

/// Linear sRGB to the LMS cone response used by OKLab.
pub const LINEAR_SRGB_TO_LMS: [[f64; 3]; 3] = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

/// Cube-rooted LMS to OKLab.
pub const LMS_TO_OKLAB: [[f64; 3]; 3] = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

/// OKLab to cube-rooted LMS.
pub const OKLAB_TO_LMS: [[f64; 3]; 3] = [
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

/// LMS back to linear sRGB.
pub const LMS_TO_LINEAR_SRGB: [[f64; 3]; 3] = [
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
];

/// WCAG relative luminance weights for linear R, G, and B.
pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// The sRGB channel value below which WCAG linearizes by a straight division.
pub const LUMINANCE_LINEAR_THRESHOLD: f64 = 0.03928;

/// Luminance at or above which a dark foreground reads better than a light one.
pub const CONTRAST_THRESHOLD: f64 = 0.5;

/// How far one elevation level raises perceptual lightness, on the unit lightness scale.
pub const ELEVATION_STEP: f64 = 0.02;

/// Weights used by grayscale conversion, applied to gamma-encoded sRGB.
pub const GRAYSCALE_WEIGHTS: [f64; 3] = [0.3, 0.59, 0.11];

/// Multiplies a row-major 3x3 matrix by a column vector.
pub fn mat_mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    let mut out = [0.; 3];
    for (i, row) in m.iter().enumerate() {
        out[i] = row[0] * v[0] + row[1] * v[1] + row[2] * v[2];
    }
    out
}
