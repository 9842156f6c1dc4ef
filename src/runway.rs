use std::{fmt, str::FromStr};

use crate::error::AirportError;

/// A physical landing strip. The crossing layout is fixed: 4L/4R and 15L/15R are
/// parallel pairs, 9 cuts across both 4R and 15R.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Runway {
    R4L,
    R4R,
    R9,
    R15L,
    R15R,
}

impl Runway {
    pub const COUNT: usize = 5;
    pub const ALL: [Runway; Runway::COUNT] = [
        Runway::R4L,
        Runway::R4R,
        Runway::R9,
        Runway::R15L,
        Runway::R15R,
    ];

    /// Runways that physically intersect this one. Never contains `self`.
    pub fn conflicts_with(self) -> &'static [Runway] {
        use Runway::*;
        match self {
            R9 => &[R4R, R15R],
            R4R => &[R9, R15L, R15R],
            R15R => &[R9, R4R, R4L],
            R4L => &[R15L, R15R],
            R15L => &[R4L, R4R],
        }
    }

    pub fn conflicts(self, other: Runway) -> bool {
        self.conflicts_with().contains(&other)
    }

    pub fn name(self) -> &'static str {
        match self {
            Runway::R4L => "4L",
            Runway::R4R => "4R",
            Runway::R9 => "9",
            Runway::R15L => "15L",
            Runway::R15R => "15R",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Runway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<usize> for Runway {
    type Error = AirportError;
    fn try_from(i: usize) -> Result<Self, Self::Error> {
        Runway::ALL
            .get(i)
            .copied()
            .ok_or_else(|| AirportError::UnknownRunway(i.to_string()))
    }
}

impl FromStr for Runway {
    type Err = AirportError;
    // Accepts "15L", "R15L" and "RUNWAY_15L", case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let bare = upper
            .strip_prefix("RUNWAY_")
            .or_else(|| upper.strip_prefix('R'))
            .unwrap_or(&upper);
        Runway::ALL
            .into_iter()
            .find(|r| r.name() == bare)
            .ok_or_else(|| AirportError::UnknownRunway(s.to_string()))
    }
}
