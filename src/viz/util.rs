//! Utility functions for the figure host: unit scales, colors, text property parsing.

use anyhow::{Result, anyhow, bail};
use serde_json::Value;

use super::text::{char_width_px, line_height_px};
use super::types::{FontAngle, FontWeight, Rgb8, TextSpec};
use crate::options::TextProps;
use crate::units::Unit;

/// Text properties the figure renderer understands (case-insensitive).
pub const SUPPORTED_PROPERTIES: [&str; 6] = [
    "fontsize",
    "color",
    "fontname",
    "fontfamily",
    "fontweight",
    "fontangle",
];

/// Pixels per one `unit` along an axis. `horizontal` matters only for `characters`, whose
/// cells are narrower than they are tall. `Normalized` has no fixed pixel size and yields
/// `None`.
pub fn px_per_unit(unit: Unit, dpi: f64, font_px: f64, horizontal: bool) -> Option<f64> {
    match unit {
        Unit::Normalized => None,
        Unit::Pixels => Some(1.0),
        Unit::Inches => Some(dpi),
        Unit::Centimeters => Some(dpi / 2.54),
        Unit::Points => Some(dpi / 72.0),
        Unit::Characters if horizontal => Some(char_width_px(font_px)),
        Unit::Characters => Some(line_height_px(font_px)),
    }
}

/// Basic named colors plus `#rrggbb`.
pub fn parse_color(s: &str) -> Result<Rgb8> {
    let s = s.trim().to_ascii_lowercase();
    let named = match s.as_str() {
        "black" | "k" => Some((0, 0, 0)),
        "white" | "w" => Some((255, 255, 255)),
        "red" | "r" => Some((255, 0, 0)),
        "green" | "g" => Some((0, 255, 0)),
        "blue" | "b" => Some((0, 0, 255)),
        "cyan" | "c" => Some((0, 255, 255)),
        "magenta" | "m" => Some((255, 0, 255)),
        "yellow" | "y" => Some((255, 255, 0)),
        _ => None,
    };
    if let Some((r, g, b)) = named {
        return Ok(Rgb8 { r, g, b });
    }
    let hex = s
        .strip_prefix('#')
        .filter(|h| h.len() == 6 && h.is_ascii())
        .ok_or_else(|| anyhow!("unsupported color {s:?}"))?;
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| anyhow!("unsupported color {s:?}"))
    };
    Ok(Rgb8 {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

fn expect_str<'a>(key: &str, v: &'a Value) -> Result<&'a str> {
    v.as_str()
        .ok_or_else(|| anyhow!("text property {key:?} expects a string, got {v}"))
}

/// Build a [`TextSpec`] from forwarded text properties, starting from the defaults.
pub fn parse_text_spec(props: &TextProps, default_font_px: f64) -> Result<TextSpec> {
    let mut spec = TextSpec {
        font_px: default_font_px,
        ..TextSpec::default()
    };
    for (key, value) in props {
        match key.trim().to_ascii_lowercase().as_str() {
            "fontsize" => {
                spec.font_px = value
                    .as_f64()
                    .filter(|px| *px > 0.0)
                    .ok_or_else(|| anyhow!("fontsize must be a positive number, got {value}"))?;
            }
            "color" => spec.color = parse_color(expect_str(key, value)?)?,
            "fontname" | "fontfamily" => spec.family = expect_str(key, value)?.to_string(),
            "fontweight" => {
                spec.weight = match expect_str(key, value)?.to_ascii_lowercase().as_str() {
                    "normal" => FontWeight::Normal,
                    "bold" => FontWeight::Bold,
                    other => bail!("unsupported fontweight {other:?}"),
                }
            }
            "fontangle" => {
                spec.angle = match expect_str(key, value)?.to_ascii_lowercase().as_str() {
                    "normal" => FontAngle::Normal,
                    "italic" | "oblique" => FontAngle::Italic,
                    other => bail!("unsupported fontangle {other:?}"),
                }
            }
            _ => bail!(
                "unsupported text property {key:?} (supported: {})",
                SUPPORTED_PROPERTIES.join(", ")
            ),
        }
    }
    Ok(spec)
}
