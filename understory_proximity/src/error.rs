// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Errors reported by the proximity monitor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProximityError {
    /// No element is bound, or the bound element has never been measured.
    MissingElement,
    /// A side name other than `top`, `bottom`, `left` or `right`.
    UnknownSide(String),
}

impl fmt::Display for ProximityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement => f.write_str("no element has been bound and measured"),
            Self::UnknownSide(name) => write!(
                f,
                "unknown side {name:?}, expected one of \"top\", \"bottom\", \"left\" or \"right\""
            ),
        }
    }
}

impl core::error::Error for ProximityError {}
