//! Plotters-backed figure: a canvas holding axes boxes and the labels placed on them.
//!
//! - Axes are pixel rectangles, added one by one or laid out as a grid
//! - [`Figure`] implements [`LabelHost`], so labels are placed with [`crate::place_labels`]
//! - Renders to **SVG** (`.svg`) or **PNG** (any other extension)

pub mod text;
pub mod types;
pub mod util;

pub use types::{AxesBox, AxesId, FontAngle, FontWeight, PlacedText, Rgb8, TextId, TextSpec};

use anyhow::{Result, anyhow, bail};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::label::{Label, LabelHost};
use crate::location::{Anchor, HAlign, VAlign};
use crate::options::TextProps;
use crate::units::Unit;

use text::{estimate_block_size_px, line_offsets_px};
use types::DEFAULT_FONT_PX;
use util::{parse_text_spec, px_per_unit};

/// Screen resolution assumed when none is given.
pub const DEFAULT_DPI: f64 = 96.0;

// Grid layout gutters, wide enough for outside labels.
const GRID_MARGIN_X: i32 = 70;
const GRID_MARGIN_Y: i32 = 50;
const GRID_GAP_X: i32 = 80;
const GRID_GAP_Y: i32 = 70;

static FONT_REGISTERED: AtomicBool = AtomicBool::new(false);

/// Register a TrueType/OpenType font file as the "sans-serif" family for the `ab_glyph`
/// text path. Bitmap output needs a registered font; SVG output does not.
pub fn register_font_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes: &'static [u8] = Box::leak(fs::read(path)?.into_boxed_slice());
    for style in [
        FontStyle::Normal,
        FontStyle::Bold,
        FontStyle::Italic,
        FontStyle::Oblique,
    ] {
        plotters::style::register_font("sans-serif", style, bytes)
            .map_err(|_| anyhow!("{} is not a usable font file", path.display()))?;
    }
    FONT_REGISTERED.store(true, Ordering::Relaxed);
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Figure {
    width: u32,
    height: u32,
    dpi: f64,
    font_px: f64,
    axes: Vec<AxesBox>,
    texts: Vec<PlacedText>,
}

impl Figure {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            dpi: DEFAULT_DPI,
            font_px: DEFAULT_FONT_PX,
            axes: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Lay out `rows × cols` axes (row-major) on a new `width × height` canvas.
    pub fn grid(width: u32, height: u32, rows: usize, cols: usize) -> (Self, Vec<AxesId>) {
        let mut fig = Figure::new(width, height);
        let cell = |total: u32, n: usize, margin: i32, gap: i32| -> u32 {
            if n == 0 {
                return 0;
            }
            let free = total as i32 - 2 * margin - (n as i32 - 1) * gap;
            (free / n as i32).max(0) as u32
        };
        let cw = cell(width, cols, GRID_MARGIN_X, GRID_GAP_X);
        let ch = cell(height, rows, GRID_MARGIN_Y, GRID_GAP_Y);
        let mut ids = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let left = GRID_MARGIN_X + c as i32 * (cw as i32 + GRID_GAP_X);
                let top = GRID_MARGIN_Y + r as i32 * (ch as i32 + GRID_GAP_Y);
                ids.push(fig.add_axes(left, top, cw, ch));
            }
        }
        (fig, ids)
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    /// Default font size, used for labels without a `fontsize` and for the `characters` unit.
    pub fn with_font_px(mut self, font_px: f64) -> Self {
        self.font_px = font_px;
        self
    }

    pub fn add_axes(&mut self, left: i32, top: i32, width: u32, height: u32) -> AxesId {
        self.axes.push(AxesBox {
            left,
            top,
            width,
            height,
        });
        AxesId(self.axes.len() - 1)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn axes_box(&self, id: AxesId) -> Option<&AxesBox> {
        self.axes.get(id.0)
    }

    pub fn text(&self, id: TextId) -> Option<&PlacedText> {
        self.texts.get(id.0)
    }

    pub fn texts(&self) -> &[PlacedText] {
        &self.texts
    }

    /// Canvas pixel of a normalized axes coordinate.
    pub fn to_pixel(&self, id: AxesId, x: f64, y: f64) -> Option<(i32, i32)> {
        let ax = self.axes_box(id)?;
        let px = ax.left as f64 + x * ax.width as f64;
        let py = ax.top as f64 + (1.0 - y) * ax.height as f64;
        Some((px.round() as i32, py.round() as i32))
    }

    /// Estimated pixel bounds `(left, top, right, bottom)` of a placed text.
    pub fn text_bounds(&self, id: TextId) -> Option<(i32, i32, i32, i32)> {
        let t = self.text(id)?;
        let (ax, ay) = self.to_pixel(t.axes, t.anchor.x, t.anchor.y)?;
        let (w, h) = estimate_block_size_px(t.lines.as_slice(), t.spec.font_px);
        let left = match t.anchor.halign {
            HAlign::Left => ax as f64,
            HAlign::Center => ax as f64 - w / 2.0,
            HAlign::Right => ax as f64 - w,
        };
        let top = match t.anchor.valign {
            VAlign::Top => ay as f64,
            VAlign::Middle => ay as f64 - h / 2.0,
            VAlign::Bottom => ay as f64 - h,
        };
        Some((
            left.floor() as i32,
            top.floor() as i32,
            (left + w).ceil() as i32,
            (top + h).ceil() as i32,
        ))
    }

    /// Render the figure; `.svg` paths use the SVG backend, anything else a bitmap.
    ///
    /// ### Errors
    /// Bitmap output of a figure with labels fails unless a font was registered with
    /// [`register_font_file`].
    pub fn render<P: AsRef<Path>>(&self, out_path: P) -> Result<()> {
        let out_path = out_path.as_ref();
        let path_string = out_path.to_string_lossy().into_owned();
        let dims = (self.width, self.height);

        if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
            let root = SVGBackend::new(path_string.as_str(), dims).into_drawing_area();
            draw_figure(root, self)
        } else {
            if !FONT_REGISTERED.load(Ordering::Relaxed) && !self.texts.is_empty() {
                bail!(
                    "cannot draw labels into {}: bitmap output needs a registered font \
                     (register one with register_font_file / --font, or render to .svg)",
                    out_path.display()
                );
            }
            let root = BitMapBackend::new(path_string.as_str(), dims).into_drawing_area();
            draw_figure(root, self)
        }
    }
}

impl LabelHost for Figure {
    type Axis = AxesId;
    type Text = TextId;

    fn is_axis(&self, axis: AxesId) -> bool {
        axis.0 < self.axes.len()
    }

    fn axis_size(&self, axis: AxesId, unit: Unit) -> Result<(f64, f64)> {
        let ax = self
            .axes_box(axis)
            .ok_or_else(|| anyhow!("unknown axes {axis:?}"))?;
        let along = |px: u32, horizontal: bool| {
            match px_per_unit(unit, self.dpi, self.font_px, horizontal) {
                Some(scale) => px as f64 / scale,
                None => 1.0,
            }
        };
        Ok((along(ax.width, true), along(ax.height, false)))
    }

    fn validate_style(&self, style: &TextProps) -> Result<()> {
        parse_text_spec(style, self.font_px).map(|_| ())
    }

    fn create_text(&mut self, axis: AxesId, label: &Label, style: &TextProps) -> Result<TextId> {
        if !self.is_axis(axis) {
            return Err(anyhow!("unknown axes {axis:?}"));
        }
        let spec = parse_text_spec(style, self.font_px)?;
        self.texts.push(PlacedText {
            axes: axis,
            lines: label.lines().into_iter().map(str::to_string).collect(),
            spec,
            anchor: Anchor {
                x: 0.0,
                y: 0.0,
                halign: HAlign::Left,
                valign: VAlign::Bottom,
            },
        });
        Ok(TextId(self.texts.len() - 1))
    }

    fn place_text(&mut self, text: &TextId, anchor: &Anchor) -> Result<()> {
        let t = self
            .texts
            .get_mut(text.0)
            .ok_or_else(|| anyhow!("unknown text {text:?}"))?;
        t.anchor = *anchor;
        Ok(())
    }
}

fn text_pos(anchor: &Anchor) -> Pos {
    let h = match anchor.halign {
        HAlign::Left => HPos::Left,
        HAlign::Center => HPos::Center,
        HAlign::Right => HPos::Right,
    };
    let v = match anchor.valign {
        VAlign::Top => VPos::Top,
        VAlign::Middle => VPos::Center,
        VAlign::Bottom => VPos::Bottom,
    };
    Pos::new(h, v)
}

fn font_style(spec: &TextSpec) -> FontStyle {
    match (spec.weight, spec.angle) {
        (FontWeight::Bold, _) => FontStyle::Bold,
        (FontWeight::Normal, FontAngle::Italic) => FontStyle::Italic,
        (FontWeight::Normal, FontAngle::Normal) => FontStyle::Normal,
    }
}

/// Helper that draws to any Plotters backend.
fn draw_figure<DB>(root: DrawingArea<DB, Shift>, fig: &Figure) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    for ax in &fig.axes {
        let right = ax.left + ax.width as i32;
        let bottom = ax.top + ax.height as i32;
        root.draw(&Rectangle::new(
            [(ax.left, ax.top), (right, bottom)],
            BLACK.stroke_width(1),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    }

    for t in &fig.texts {
        let Some((x, y)) = fig.to_pixel(t.axes, t.anchor.x, t.anchor.y) else {
            continue;
        };
        let color = RGBColor(t.spec.color.r, t.spec.color.g, t.spec.color.b);
        let font = FontDesc::new(
            FontFamily::from(t.spec.family.as_str()),
            t.spec.font_px,
            font_style(&t.spec),
        );
        let style = TextStyle::from(font).color(&color).pos(text_pos(&t.anchor));
        let offsets = line_offsets_px(t.lines.len(), t.spec.font_px, t.anchor.valign);
        for (line, dy) in t.lines.iter().zip(offsets) {
            root.draw(&Text::new(
                line.as_str(),
                (x, y + dy.round() as i32),
                style.clone(),
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
        }
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
