//! Placement options and the opaque text-style property map forwarded to the host.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LabelError, Result};
use crate::units::Unit;

/// Default buffer on each side, as a fraction of the axis extent.
pub const DEFAULT_BUFFER: f64 = 1.0 / 50.0;

/// Property names owned by the label placer; hosts never see them as style.
pub const RESERVED_PROPERTIES: [&str; 3] = ["parent", "position", "units"];

/// Host-specific text properties (font size, color, ...) passed through verbatim.
pub type TextProps = BTreeMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOptions {
    pub hbuffer: f64,
    pub hbuffer_unit: Unit,
    pub vbuffer: f64,
    pub vbuffer_unit: Unit,
    /// Seed for `random` placements; `None` draws from the thread RNG.
    pub seed: Option<u64>,
    pub style: TextProps,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            hbuffer: DEFAULT_BUFFER,
            hbuffer_unit: Unit::Normalized,
            vbuffer: DEFAULT_BUFFER,
            vbuffer_unit: Unit::Normalized,
            seed: None,
            style: TextProps::new(),
        }
    }
}

impl LabelOptions {
    /// Load options from a JSON file; missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading options from {}", path.display()))?;
        let opts = serde_json::from_str(&txt)
            .with_context(|| format!("parsing options in {}", path.display()))?;
        Ok(opts)
    }

    pub fn with_hbuffer(mut self, buffer: f64, unit: Unit) -> Self {
        self.hbuffer = buffer;
        self.hbuffer_unit = unit;
        self
    }

    pub fn with_vbuffer(mut self, buffer: f64, unit: Unit) -> Self {
        self.vbuffer = buffer;
        self.vbuffer_unit = unit;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }

    /// Reject style keys that collide with the placer's own properties.
    pub fn check_reserved(&self) -> Result<()> {
        match self
            .style
            .keys()
            .find(|k| RESERVED_PROPERTIES.contains(&k.trim().to_ascii_lowercase().as_str()))
        {
            Some(k) => Err(LabelError::ReservedProperty(k.clone())),
            None => Ok(()),
        }
    }
}
