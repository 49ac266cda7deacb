//! Marker families with a compiled-in signature table.

use super::tables::{FOUR_RINGS, THREE_RINGS};

/// A marker family identified by its number of rings (crowns).
///
/// Only the 3-ring and 4-ring families ship with a compiled-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerFamily {
    ThreeRings,
    FourRings,
}

impl MarkerFamily {
    /// Map a ring count to its family, or `None` when no table exists for it.
    pub const fn from_ring_count(n_rings: usize) -> Option<Self> {
        match n_rings {
            3 => Some(Self::ThreeRings),
            4 => Some(Self::FourRings),
            _ => None,
        }
    }

    pub const fn ring_count(self) -> usize {
        match self {
            Self::ThreeRings => 3,
            Self::FourRings => 4,
        }
    }

    /// Number of radius ratios in each signature of this family.
    pub fn signature_len(self) -> usize {
        match self {
            Self::ThreeRings => THREE_RINGS[0].len(),
            Self::FourRings => FOUR_RINGS[0].len(),
        }
    }

    /// Number of markers in the compiled-in table.
    pub fn len(self) -> usize {
        match self {
            Self::ThreeRings => THREE_RINGS.len(),
            Self::FourRings => FOUR_RINGS.len(),
        }
    }

    /// Iterate the compiled-in signatures in marker-id order.
    pub fn signatures(self) -> Box<dyn Iterator<Item = &'static [f32]>> {
        match self {
            Self::ThreeRings => Box::new(THREE_RINGS.iter().map(|s| s.as_slice())),
            Self::FourRings => Box::new(FOUR_RINGS.iter().map(|s| s.as_slice())),
        }
    }
}

impl std::fmt::Display for MarkerFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-ring", self.ring_count())
    }
}
