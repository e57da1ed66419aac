// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Border geometry: element corners and point-to-border distances.
//!
//! Everything here is a pure function of its inputs. Points, corners and
//! bounds are all expected to live in the same coordinate space; no
//! transformation is applied.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_proximity::Side;
//! use understory_proximity::geometry::{Corners, distance_to_element};
//!
//! let corners = Corners::from_bounds(0.0, 0.0, 100.0, 50.0);
//!
//! // Ten units above the top border.
//! let p = Point::new(50.0, -10.0);
//! assert_eq!(distance_to_element(p, &corners, Some(Side::Top)), 10.0);
//! assert_eq!(distance_to_element(p, &corners, None), 10.0);
//! ```

use kurbo::{Line, Point, Rect};

use crate::Side;

/// The four corners of a rectangular element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Corners {
    /// `(left, top)`.
    pub top_left: Point,
    /// `(left + width, top)`.
    pub top_right: Point,
    /// `(left, top + height)`.
    pub bottom_left: Point,
    /// `(left + width, top + height)`.
    pub bottom_right: Point,
}

impl Corners {
    /// Corners of the box with the given top-left offset and size.
    pub fn from_bounds(left: f64, top: f64, width: f64, height: f64) -> Self {
        let right = left + width;
        let bottom = top + height;
        Self {
            top_left: Point::new(left, top),
            top_right: Point::new(right, top),
            bottom_left: Point::new(left, bottom),
            bottom_right: Point::new(right, bottom),
        }
    }

    /// Corners of `rect`, taking `(x0, y0)` as the top-left corner.
    pub fn from_rect(rect: Rect) -> Self {
        Self::from_bounds(rect.x0, rect.y0, rect.width(), rect.height())
    }

    /// The border segment for `side`.
    pub fn border(&self, side: Side) -> Line {
        match side {
            Side::Top => Line::new(self.top_left, self.top_right),
            Side::Bottom => Line::new(self.bottom_left, self.bottom_right),
            Side::Left => Line::new(self.top_left, self.bottom_left),
            Side::Right => Line::new(self.top_right, self.bottom_right),
        }
    }
}

impl From<Rect> for Corners {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

/// Distance from `p` to the closed segment `a`–`b`.
///
/// The point is projected onto the line through the segment and the
/// projection parameter is clamped to the segment's endpoints. A degenerate
/// segment (`a == b`) measures to `a`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let nearest = if a == b {
        a
    } else {
        let ab = b - a;
        let t = (p - a).dot(ab) / ab.hypot2();
        if t < 0.0 {
            a
        } else if t > 1.0 {
            b
        } else {
            a + t * ab
        }
    };
    p.distance(nearest)
}

/// Distances from one point to each of the four borders.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BorderDistances {
    /// Distance to the top border.
    pub top: f64,
    /// Distance to the bottom border.
    pub bottom: f64,
    /// Distance to the left border.
    pub left: f64,
    /// Distance to the right border.
    pub right: f64,
}

impl BorderDistances {
    /// The distance to `side`.
    pub fn get(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// The distance to the nearest border.
    pub fn min(&self) -> f64 {
        self.top.min(self.bottom).min(self.left).min(self.right)
    }

    /// The nearest side along with its distance.
    ///
    /// Ties resolve in `top, bottom, left, right` order.
    pub fn nearest(&self) -> (Side, f64) {
        Side::ALL
            .into_iter()
            .map(|side| (side, self.get(side)))
            .fold((Side::Top, self.top), |best, cur| {
                if cur.1 < best.1 { cur } else { best }
            })
    }
}

/// Distances from `p` to every border of `corners`.
pub fn border_distances(p: Point, corners: &Corners) -> BorderDistances {
    let d = |side| {
        let line = corners.border(side);
        distance_to_segment(p, line.p0, line.p1)
    };
    BorderDistances {
        top: d(Side::Top),
        bottom: d(Side::Bottom),
        left: d(Side::Left),
        right: d(Side::Right),
    }
}

/// Distance from `p` to the element described by `corners`.
///
/// With a `side`, only that border is considered; otherwise the nearest
/// border wins. Points inside the element still measure to the border, so
/// the result is zero only on the outline itself.
pub fn distance_to_element(p: Point, corners: &Corners, side: Option<Side>) -> f64 {
    match side {
        Some(side) => {
            let line = corners.border(side);
            distance_to_segment(p, line.p0, line.p1)
        }
        None => border_distances(p, corners).min(),
    }
}
