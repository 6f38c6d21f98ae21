//! Batch label placement over a host graphics system.
//!
//! The host owns axes and text primitives; this module only validates the request,
//! converts buffers into axis fractions, resolves anchors and tells the host where to put
//! each label.

use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;

use crate::error::{LabelError, Result};
use crate::location::{Anchor, Location, resolve_with};
use crate::options::{LabelOptions, TextProps};
use crate::units::{Unit, normalize};

/// Label text: one line or several.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Line(String),
    Lines(Vec<String>),
}

impl Label {
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Label::Line(s) => vec![s.as_str()],
            Label::Lines(v) => v.iter().map(String::as_str).collect(),
        }
    }

    /// Convert a dynamically-typed label (string or array of strings).
    pub fn from_json(index: usize, value: &Value) -> Result<Self> {
        let bad = |found: &Value| LabelError::InvalidLabelType {
            index,
            found: found.to_string(),
        };
        match value {
            Value::String(s) => Ok(Label::Line(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|v| v.as_str().map(str::to_string).ok_or_else(|| bad(value)))
                .collect::<Result<Vec<_>>>()
                .map(Label::Lines),
            other => Err(bad(other)),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Line(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label::Line(s)
    }
}

impl From<Vec<String>> for Label {
    fn from(v: Vec<String>) -> Self {
        Label::Lines(v)
    }
}

/// Operations the label placer needs from a graphics system.
pub trait LabelHost {
    type Axis: Copy + fmt::Debug;
    type Text;

    /// Whether `axis` refers to an axes object owned by this host.
    fn is_axis(&self, axis: Self::Axis) -> bool;

    /// Axis `(width, height)` expressed in `unit`.
    fn axis_size(&self, axis: Self::Axis, unit: Unit) -> anyhow::Result<(f64, f64)>;

    /// Check style properties before anything is created.
    fn validate_style(&self, style: &TextProps) -> anyhow::Result<()>;

    /// Create a text primitive at normalized `(0, 0)` on `axis`.
    fn create_text(
        &mut self,
        axis: Self::Axis,
        label: &Label,
        style: &TextProps,
    ) -> anyhow::Result<Self::Text>;

    /// Move `text` to the anchor position and apply its alignment.
    fn place_text(&mut self, text: &Self::Text, anchor: &Anchor) -> anyhow::Result<()>;
}

/// Normalized `(hbuffer, vbuffer)` for one axis.
pub fn normalized_buffers<H: LabelHost>(
    host: &H,
    axis: H::Axis,
    opts: &LabelOptions,
) -> Result<(f64, f64)> {
    let (width, _) = host.axis_size(axis, opts.hbuffer_unit)?;
    let (_, height) = host.axis_size(axis, opts.vbuffer_unit)?;
    let h = normalize(opts.hbuffer, opts.hbuffer_unit, width)?;
    let v = normalize(opts.vbuffer, opts.vbuffer_unit, height)?;
    log::trace!(
        "axis {axis:?}: hbuffer {} {} -> {h}, vbuffer {} {} -> {v}",
        opts.hbuffer,
        opts.hbuffer_unit,
        opts.vbuffer,
        opts.vbuffer_unit
    );
    Ok((h, v))
}

/// Place one label per axis at `location` and return the created text handles in order.
///
/// All validation and anchor computation happens before the first text is created, so an
/// error leaves the host untouched (unless the host itself fails while creating text).
///
/// ### Errors
/// - [`LabelError::ShapeMismatch`] when `axes` and `labels` differ in length or an axis is
///   unknown to the host
/// - [`LabelError::ReservedProperty`] when `opts.style` sets a placer-owned key
/// - [`LabelError::DegenerateAxis`] when an axis has no extent in a buffer unit
/// - [`LabelError::Host`] for anything the host rejects
pub fn place_labels<H: LabelHost>(
    host: &mut H,
    axes: &[H::Axis],
    labels: &[Label],
    location: Location,
    opts: &LabelOptions,
) -> Result<Vec<H::Text>> {
    if axes.len() != labels.len() {
        return Err(LabelError::ShapeMismatch(format!(
            "{} axes but {} labels",
            axes.len(),
            labels.len()
        )));
    }
    if let Some((i, axis)) = axes.iter().enumerate().find(|(_, a)| !host.is_axis(**a)) {
        return Err(LabelError::ShapeMismatch(format!(
            "element {i} ({axis:?}) is not an axes handle"
        )));
    }
    opts.check_reserved()?;
    host.validate_style(&opts.style)?;

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let anchors = axes
        .iter()
        .map(|&axis| -> Result<Anchor> {
            let (h, v) = normalized_buffers(host, axis, opts)?;
            Ok(resolve_with(location, h, v, &mut rng))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut out = Vec::with_capacity(axes.len());
    for ((&axis, label), anchor) in axes.iter().zip(labels).zip(&anchors) {
        let text = host.create_text(axis, label, &opts.style)?;
        host.place_text(&text, anchor)?;
        log::debug!(
            "placed {:?} on {axis:?} at ({:.4}, {:.4}) {:?}/{:?}",
            label.lines(),
            anchor.x,
            anchor.y,
            anchor.halign,
            anchor.valign
        );
        out.push(text);
    }
    Ok(out)
}
