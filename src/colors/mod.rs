//! This module contains various modules that implement types that implement [`Color`]. For
//! convenience, each main type is imported into this module's namespace directly.
//!
//! The spaces build on each other: linear RGB undoes the sRGB gamma curve, XYZ is a fixed linear
//! transform of linear RGB, xyY, CIELAB and CIELUV are computed from XYZ against a reference
//! white, and CIEHCL and CIELCHuv are polar views of CIELAB and CIELUV. HSV and HSL are
//! reshufflings of sRGB itself and touch none of the rest.
//!
//! [`Color`]: ../color/trait.Color.html
pub mod ciehclcolor;
pub mod cielabcolor;
pub mod cielchuvcolor;
pub mod cieluvcolor;
pub mod hslcolor;
pub mod hsvcolor;
pub mod linearrgbcolor;
pub mod xyycolor;
pub mod xyzcolor;

// for convenience, use this namespace for the color objects
pub use self::ciehclcolor::CIEHCLColor;
pub use self::cielabcolor::CIELABColor;
pub use self::cielchuvcolor::CIELCHuvColor;
pub use self::cieluvcolor::CIELUVColor;
pub use self::hslcolor::HSLColor;
pub use self::hsvcolor::HSVColor;
pub use self::linearrgbcolor::LinearRGBColor;
pub use self::xyycolor::XYYColor;
pub use self::xyzcolor::XYZColor;
