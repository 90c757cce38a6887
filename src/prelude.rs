//! This module simply brings the most common Tincture functionality under a single namespace, to
//! prevent excessive imports. The prelude includes every trait in Tincture, the ubiquitous
//! [`RGBColor`], the associated parse error [`RGBParseError`], and the [`Illuminant`] used to pick a
//! reference white. The individual color spaces in the [`colors`] module are not included.
//!
//! [`RGBColor`]: ../color/struct.RGBColor.html
//! [`RGBParseError`]: ../color/enum.RGBParseError.html
//! [`Illuminant`]: ../illuminants/enum.Illuminant.html
//! [`colors`]: ../colors/index.html

pub use crate::bound::Bound;
pub use crate::color::{Color, RGBColor, RGBParseError};
pub use crate::illuminants::Illuminant;
pub use crate::mix::Mix;
