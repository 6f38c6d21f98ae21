//! textloc
//!
//! Place text labels at named relative positions ("northeast", "southwestoutside", ...)
//! inside or around plot axes. Pairs with the `textloc` CLI.
//!
//! ### Features
//! - 22 location keywords plus the legacy numeric codes 1, 2, 3, 4 and -1
//! - Buffers in normalized, inches, centimeters, characters, points or pixels
//! - Host-agnostic batch placement through the [`LabelHost`] trait
//! - A plotters-backed [`viz::Figure`] host rendering SVG/PNG
//!
//! ### Example
//! ```no_run
//! use textloc::viz::Figure;
//! use textloc::{Label, LabelOptions, Location, Unit, place_labels};
//!
//! let (mut fig, axes) = Figure::grid(900, 600, 2, 2);
//! let labels = ["A)", "B)", "C)", "D)"].map(Label::from);
//! let opts = LabelOptions::default().with_hbuffer(0.3, Unit::Inches);
//! place_labels(&mut fig, &axes, &labels, Location::NorthWestOutside, &opts)?;
//! fig.render("panels.svg")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod label;
pub mod location;
pub mod options;
pub mod units;
pub mod viz;

pub use error::{LabelError, Result};
pub use label::{Label, LabelHost, normalized_buffers, place_labels};
pub use location::{Anchor, HAlign, Location, VAlign, resolve, resolve_with};
pub use options::{DEFAULT_BUFFER, LabelOptions, TextProps};
pub use units::{Unit, normalize};
