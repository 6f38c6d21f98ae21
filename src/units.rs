//! Length units for label buffers and conversion of a buffer into an axis fraction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LabelError, Result};

/// Unit a buffer distance is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    /// Fraction of the axis width (horizontal) or height (vertical).
    #[default]
    Normalized,
    Inches,
    Centimeters,
    /// Character cells of the default font.
    Characters,
    /// Typographic points (1/72 inch).
    Points,
    Pixels,
}

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::Normalized,
        Unit::Inches,
        Unit::Centimeters,
        Unit::Characters,
        Unit::Points,
        Unit::Pixels,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Normalized => "normalized",
            Unit::Inches => "inches",
            Unit::Centimeters => "centimeters",
            Unit::Characters => "characters",
            Unit::Points => "points",
            Unit::Pixels => "pixels",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        Unit::ALL
            .into_iter()
            .find(|u| u.as_str() == key)
            .ok_or_else(|| LabelError::InvalidUnit(s.to_string()))
    }
}

impl TryFrom<String> for Unit {
    type Error = LabelError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Unit> for String {
    fn from(u: Unit) -> Self {
        u.as_str().to_string()
    }
}

/// Convert `buffer`, expressed in `unit`, into a fraction of an axis extent.
///
/// `axis_size_in_unit` is the axis width (for horizontal buffers) or height (for vertical
/// buffers) expressed in the same `unit`. It is ignored for [`Unit::Normalized`], where the
/// buffer already is a fraction.
///
/// ### Errors
/// [`LabelError::DegenerateAxis`] when the axis extent is zero, negative or NaN. An infinite
/// extent yields a zero buffer.
pub fn normalize(buffer: f64, unit: Unit, axis_size_in_unit: f64) -> Result<f64> {
    if unit == Unit::Normalized {
        return Ok(buffer);
    }
    if axis_size_in_unit.is_nan() || axis_size_in_unit <= 0.0 {
        return Err(LabelError::DegenerateAxis {
            size: axis_size_in_unit,
            unit,
        });
    }
    Ok(buffer / axis_size_in_unit)
}
