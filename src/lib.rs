//! Tincture is a small library for moving colors between the color spaces people actually reach
//! for: gamma-encoded sRGB, linear RGB, CIE XYZ and xyY, CIELAB and CIELUV along with their
//! cylindrical forms, and the old HSV and HSL standbys. On top of the conversions it provides the
//! standard color difference formulas (from plain Euclidean distance up to CIEDE2000) and blending
//! within any of the spaces, so that a gradient can be computed somewhere that looks smooth instead
//! of somewhere that merely happens to be convenient.
//!
//! Everything revolves around [`RGBColor`], a gamma-encoded sRGB value with components in [0, 1].
//! Every other space is a small struct implementing the [`Color`] trait, which converts to and from
//! `RGBColor` relative to a reference white.
//!
//! ```
//! use tincture::prelude::*;
//! use tincture::colors::CIELABColor;
//!
//! let red = RGBColor { r: 1., g: 0., b: 0. };
//! let lab: CIELABColor = red.convert();
//! assert!((lab.l - 0.5324).abs() < 1e-3);
//! assert!(red.distance_ciede2000(&RGBColor { r: 0., g: 1., b: 0. }) > 0.3);
//! ```
//!
//! [`RGBColor`]: color/struct.RGBColor.html
//! [`Color`]: color/trait.Color.html

#![doc(html_root_url = "https://docs.rs/tincture/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924363628087983 with -0.969_243_636_280_879_83
#![allow(clippy::unreadable_literal)]
#![allow(clippy::excessive_precision)]

#[macro_use]
extern crate lazy_static;
extern crate num;
extern crate regex;
#[macro_use]
extern crate rulinalg;
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod bound;
pub mod color;
pub mod colors;
mod consts;
pub mod coord;
pub mod distance;
pub mod gamma;
pub mod illuminants;
pub mod mix;
pub mod prelude;
