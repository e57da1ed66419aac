// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Border sides and monitoring scopes.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::ProximityError;

/// One of the four borders of a rectangular element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The top border, from the top-left to the top-right corner.
    Top,
    /// The bottom border, from the bottom-left to the bottom-right corner.
    Bottom,
    /// The left border, from the top-left to the bottom-left corner.
    Left,
    /// The right border, from the top-right to the bottom-right corner.
    Right,
}

impl Side {
    /// All four sides, in `top, bottom, left, right` order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// The lowercase name of this side.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Bottom => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses the lowercase side names `top`, `bottom`, `left` and `right`.
///
/// ```
/// use understory_proximity::{ProximityError, Side};
///
/// assert_eq!("left".parse::<Side>(), Ok(Side::Left));
/// assert!(matches!("Left".parse::<Side>(), Err(ProximityError::UnknownSide(_))));
/// ```
impl FromStr for Side {
    type Err = ProximityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(ProximityError::UnknownSide(other.to_string())),
        }
    }
}

/// Which border(s) a monitoring session measures against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// The nearest border, whichever it is.
    AllSides,
    /// A single border.
    Side(Side),
}

impl Scope {
    /// Number of distinct session slots: one for all sides plus one per side.
    pub(crate) const COUNT: usize = 5;

    /// The side this scope is restricted to, if any.
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::AllSides => None,
            Self::Side(side) => Some(side),
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::AllSides => 0,
            Self::Side(side) => side.index() + 1,
        }
    }
}

impl From<Side> for Scope {
    fn from(side: Side) -> Self {
        Self::Side(side)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllSides => f.write_str("all sides"),
            Self::Side(side) => write!(f, "{side} side"),
        }
    }
}
