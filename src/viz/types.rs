//! Public types for the plotters figure host.

use crate::location::Anchor;

/// Handle to an axes box inside a [`super::Figure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxesId(pub(crate) usize);

/// Handle to a text primitive created on a [`super::Figure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextId(pub(crate) usize);

/// Axes rectangle in canvas pixels (origin top-left, y growing downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxesBox {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8 { r: 0, g: 0, b: 0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontAngle {
    Normal,
    Italic,
}

/// Text appearance understood by the figure renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpec {
    pub font_px: f64,
    pub family: String,
    pub color: Rgb8,
    pub weight: FontWeight,
    pub angle: FontAngle,
}

/// Font size used for labels and for the `characters` unit unless overridden.
pub const DEFAULT_FONT_PX: f64 = 14.0;

impl Default for TextSpec {
    fn default() -> Self {
        Self {
            font_px: DEFAULT_FONT_PX,
            family: "sans-serif".to_string(),
            color: Rgb8::BLACK,
            weight: FontWeight::Normal,
            angle: FontAngle::Normal,
        }
    }
}

/// A text primitive owned by a figure.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedText {
    pub axes: AxesId,
    pub lines: Vec<String>,
    pub spec: TextSpec,
    pub anchor: Anchor,
}
