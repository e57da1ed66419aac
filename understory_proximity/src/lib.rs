// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_proximity --heading-base-level=0

//! Understory Proximity: pointer-to-element distance tracking for UI.
//!
//! This crate measures how far the pointer is from the borders of a
//! rectangular element and reports when that distance crosses a threshold.
//! It is meant for "proximity" effects: revealing a toolbar as the pointer
//! approaches it, fading an overlay as the pointer drifts away, and so on.
//!
//! - [`geometry`]: Pure functions for element corners and point-to-border distances
//! - [`monitor`]: A stateful monitor that turns pointer moves into enter/exit alerts
//!
//! ## Design Philosophy
//!
//! The crate does not talk to any windowing system. Element bounds come from a
//! [`Measure`] implementation supplied by the host, and pointer positions are
//! pushed in by calling [`ProximityMonitor::pointer_moved`] from the host's
//! pointer-move handler. Bounds and positions must share one coordinate space.
//!
//! Elements are axis-aligned rectangles. Distances are measured to the
//! rectangle's outline, so a point inside the element is as far away as the
//! nearest border.
//!
//! ## Usage
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use understory_proximity::{AlertCallback, ProximityMonitor, Side};
//!
//! let toolbar = Rect::new(0.0, 0.0, 100.0, 50.0);
//! let mut monitor = ProximityMonitor::configure(|r: &Rect| *r, Some(toolbar), Some(20.0));
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let on_enter = {
//!     let seen = seen.clone();
//!     AlertCallback::custom(move |d| seen.borrow_mut().push(("enter", d)))
//! };
//! let on_exit = {
//!     let seen = seen.clone();
//!     AlertCallback::custom(move |d| seen.borrow_mut().push(("exit", d)))
//! };
//! monitor.start_side(Side::Top, Some(on_enter), Some(on_exit));
//!
//! for y in [-30.0, -15.0, -25.0] {
//!     monitor.pointer_moved(Point::new(50.0, y)).unwrap();
//! }
//! assert_eq!(*seen.borrow(), vec![("enter", 15.0), ("exit", 25.0)]);
//!
//! // Plain distance queries don't affect any session.
//! assert_eq!(monitor.query_distance(Point::new(110.0, 25.0), None), Ok(10.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): Build Kurbo with the standard library.
//! - `libm`: Build Kurbo with `libm` for `no_std` targets.
//!
//! This crate is `no_std` compatible (with `alloc`). Diagnostics go through the
//! [`log`] facade.

#![no_std]

extern crate alloc;

mod error;
pub mod geometry;
pub mod monitor;
mod side;

pub use error::ProximityError;
pub use geometry::{BorderDistances, Corners};
pub use monitor::{
    AlertCallback, AlertKind, DEFAULT_ALERT_DISTANCE, Measure, ProximityConfig, ProximityEvent,
    ProximityMonitor,
};
pub use side::{Scope, Side};
