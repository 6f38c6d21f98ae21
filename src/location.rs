//! Named label locations and their anchors.
//!
//! A [`Location`] is resolved into an [`Anchor`]: a position in normalized axes coordinates
//! (`(0, 0)` is the lower-left corner of the axes, `(1, 1)` the upper-right) plus the
//! alignment of the text relative to that position. Inside locations are pulled towards
//! the centre by the buffers, outside locations are pushed away from the axes.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;

use crate::error::{LabelError, Result};

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

/// Resolved placement of a label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
    pub halign: HAlign,
    pub valign: VAlign,
}

impl Anchor {
    const fn new(x: f64, y: f64, halign: HAlign, valign: VAlign) -> Self {
        Self {
            x,
            y,
            halign,
            valign,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    North,
    South,
    East,
    West,
    Center,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    NorthOutside,
    SouthOutside,
    EastOutside,
    WestOutside,
    NorthEastOutside,
    NorthWestOutside,
    SouthEastOutside,
    SouthWestOutside,
    NorthEastOutsideAbove,
    NorthWestOutsideAbove,
    SouthEastOutsideBelow,
    SouthWestOutsideBelow,
    Random,
}

impl Location {
    pub const ALL: [Location; 22] = [
        Location::North,
        Location::South,
        Location::East,
        Location::West,
        Location::Center,
        Location::NorthEast,
        Location::NorthWest,
        Location::SouthEast,
        Location::SouthWest,
        Location::NorthOutside,
        Location::SouthOutside,
        Location::EastOutside,
        Location::WestOutside,
        Location::NorthEastOutside,
        Location::NorthWestOutside,
        Location::SouthEastOutside,
        Location::SouthWestOutside,
        Location::NorthEastOutsideAbove,
        Location::NorthWestOutsideAbove,
        Location::SouthEastOutsideBelow,
        Location::SouthWestOutsideBelow,
        Location::Random,
    ];

    /// Canonical lowercase keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            Location::North => "north",
            Location::South => "south",
            Location::East => "east",
            Location::West => "west",
            Location::Center => "center",
            Location::NorthEast => "northeast",
            Location::NorthWest => "northwest",
            Location::SouthEast => "southeast",
            Location::SouthWest => "southwest",
            Location::NorthOutside => "northoutside",
            Location::SouthOutside => "southoutside",
            Location::EastOutside => "eastoutside",
            Location::WestOutside => "westoutside",
            Location::NorthEastOutside => "northeastoutside",
            Location::NorthWestOutside => "northwestoutside",
            Location::SouthEastOutside => "southeastoutside",
            Location::SouthWestOutside => "southwestoutside",
            Location::NorthEastOutsideAbove => "northeastoutsideabove",
            Location::NorthWestOutsideAbove => "northwestoutsideabove",
            Location::SouthEastOutsideBelow => "southeastoutsidebelow",
            Location::SouthWestOutsideBelow => "southwestoutsidebelow",
            Location::Random => "random",
        }
    }

    /// Legacy numeric codes: 1 = NE, 2 = NW, 3 = SW, 4 = SE, -1 = NE outside.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            1 => Ok(Location::NorthEast),
            2 => Ok(Location::NorthWest),
            3 => Ok(Location::SouthWest),
            4 => Ok(Location::SouthEast),
            -1 => Ok(Location::NorthEastOutside),
            other => Err(LabelError::InvalidLocation(other.to_string())),
        }
    }

    /// Legacy numeric code of this location, if it has one.
    pub fn code(&self) -> Option<i32> {
        match self {
            Location::NorthEast => Some(1),
            Location::NorthWest => Some(2),
            Location::SouthWest => Some(3),
            Location::SouthEast => Some(4),
            Location::NorthEastOutside => Some(-1),
            _ => None,
        }
    }

    /// Human-readable `(x, y)` formulas in terms of the buffers `h` and `v`.
    pub fn formula(&self) -> (&'static str, &'static str) {
        use Location::*;
        match self {
            North => ("0.5", "1-v"),
            South => ("0.5", "v"),
            East => ("1-h", "0.5"),
            West => ("h", "0.5"),
            Center => ("0.5", "0.5"),
            NorthEast => ("1-h", "1-v"),
            NorthWest => ("h", "1-v"),
            SouthEast => ("1-h", "v"),
            SouthWest => ("h", "v"),
            NorthOutside => ("0.5", "1+v"),
            SouthOutside => ("0.5", "-v"),
            EastOutside => ("1+h", "0.5"),
            WestOutside => ("-h", "0.5"),
            NorthEastOutside => ("1+h", "1"),
            NorthWestOutside => ("-h", "1"),
            SouthEastOutside => ("1+h", "0"),
            SouthWestOutside => ("-h", "0"),
            NorthEastOutsideAbove => ("1", "1+v"),
            NorthWestOutsideAbove => ("0", "1+v"),
            SouthEastOutsideBelow => ("1", "-v"),
            SouthWestOutsideBelow => ("0", "-v"),
            Random => ("U(0,1)", "U(0,1)"),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Location {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        let code = match key.as_str() {
            "1" => Some(1),
            "2" => Some(2),
            "3" => Some(3),
            "4" => Some(4),
            "-1" => Some(-1),
            _ => None,
        };
        if let Some(code) = code {
            return Location::from_code(code);
        }
        Location::ALL
            .into_iter()
            .find(|loc| loc.keyword() == key)
            .ok_or_else(|| LabelError::InvalidLocation(s.to_string()))
    }
}

/// Resolve `location` with normalized buffers, drawing `random` positions from the thread RNG.
pub fn resolve(location: Location, hbuffer: f64, vbuffer: f64) -> Anchor {
    resolve_with(location, hbuffer, vbuffer, &mut rand::thread_rng())
}

/// Resolve `location` with normalized buffers, drawing `random` positions from `rng`.
pub fn resolve_with<R: Rng>(
    location: Location,
    hbuffer: f64,
    vbuffer: f64,
    rng: &mut R,
) -> Anchor {
    use HAlign::{Center as HC, Left, Right};
    use VAlign::{Bottom, Middle, Top};

    let (h, v) = (hbuffer, vbuffer);
    match location {
        Location::North => Anchor::new(0.5, 1.0 - v, HC, Top),
        Location::South => Anchor::new(0.5, v, HC, Bottom),
        Location::East => Anchor::new(1.0 - h, 0.5, Right, Middle),
        Location::West => Anchor::new(h, 0.5, Left, Middle),
        Location::Center => Anchor::new(0.5, 0.5, HC, Middle),
        Location::NorthEast => Anchor::new(1.0 - h, 1.0 - v, Right, Top),
        Location::NorthWest => Anchor::new(h, 1.0 - v, Left, Top),
        Location::SouthEast => Anchor::new(1.0 - h, v, Right, Bottom),
        Location::SouthWest => Anchor::new(h, v, Left, Bottom),
        Location::NorthOutside => Anchor::new(0.5, 1.0 + v, HC, Bottom),
        Location::SouthOutside => Anchor::new(0.5, -v, HC, Top),
        Location::EastOutside => Anchor::new(1.0 + h, 0.5, Left, Middle),
        Location::WestOutside => Anchor::new(-h, 0.5, Right, Middle),
        Location::NorthEastOutside => Anchor::new(1.0 + h, 1.0, Left, Top),
        Location::NorthWestOutside => Anchor::new(-h, 1.0, Right, Top),
        Location::SouthEastOutside => Anchor::new(1.0 + h, 0.0, Left, Bottom),
        Location::SouthWestOutside => Anchor::new(-h, 0.0, Right, Bottom),
        Location::NorthEastOutsideAbove => Anchor::new(1.0, 1.0 + v, Right, Bottom),
        Location::NorthWestOutsideAbove => Anchor::new(0.0, 1.0 + v, Left, Bottom),
        Location::SouthEastOutsideBelow => Anchor::new(1.0, -v, Right, Top),
        Location::SouthWestOutsideBelow => Anchor::new(0.0, -v, Left, Top),
        Location::Random => {
            let x = rng.gen_range(0.0..1.0);
            let y = rng.gen_range(0.0..1.0);
            Anchor::new(x, y, HC, Middle)
        }
    }
}
