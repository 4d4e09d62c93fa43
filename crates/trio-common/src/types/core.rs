use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Horizontal extent of a pane's address input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AddressBounds {
    pub x: f64,
    pub width: f64,
}

/// One of the three window regions that can host a provider surface.
///
/// `Left` always exists. `Right` and `Third` open independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaneSide {
    Left,
    Right,
    Third,
}

impl PaneSide {
    pub const ALL: [PaneSide; 3] = [PaneSide::Left, PaneSide::Right, PaneSide::Third];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaneSide::Left => "left",
            PaneSide::Right => "right",
            PaneSide::Third => "third",
        }
    }

    /// Parse the persisted string form. Case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Some(PaneSide::Left),
            "right" => Some(PaneSide::Right),
            "third" => Some(PaneSide::Third),
            _ => None,
        }
    }

    pub fn is_secondary(&self) -> bool {
        !matches!(self, PaneSide::Left)
    }

    /// The other secondary pane (`Right` <-> `Third`). `None` for `Left`.
    pub fn sibling(&self) -> Option<PaneSide> {
        match self {
            PaneSide::Left => None,
            PaneSide::Right => Some(PaneSide::Third),
            PaneSide::Third => Some(PaneSide::Right),
        }
    }
}

impl fmt::Display for PaneSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identifier of a provider in the registry (e.g. `"claude"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProviderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
