//! This module contains the color spaces other than sRGB. Each implements [`Color`] by converting
//! through sRGB, and [`Bound`] so adjustments can clamp in whatever space they work in. For
//! convenience, each main type is imported into this module's namespace directly.
//!
//! [`Color`]: ../color/trait.Color.html
//! [`Bound`]: ../bound/trait.Bound.html
pub mod hslcolor;
pub mod hsvcolor;
pub mod hwbcolor;
pub mod oklabcolor;
pub mod oklchcolor;

// for convenience, use this namespace for the color objects
pub use self::hslcolor::HSLColor;
pub use self::hsvcolor::HSVColor;
pub use self::hwbcolor::HWBColor;
pub use self::oklabcolor::OKLabColor;
pub use self::oklchcolor::OKLCHColor;
