// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proximity monitor: enter/exit alerts as the pointer nears an element.
//!
//! ## Usage
//!
//! 1) Build a monitor with [`ProximityMonitor::configure`], giving it a
//!    [`Measure`] implementation and the element to watch.
//! 2) Start one or more sessions: [`ProximityMonitor::start_all`] watches the
//!    nearest border, [`ProximityMonitor::start_side`] watches a single one.
//! 3) Forward every pointer move to [`ProximityMonitor::pointer_moved`].
//!    Each session whose inside/outside state flips fires its callback, and
//!    the transitions are also returned as [`ProximityEvent`]s.
//! 4) After layout changes, call [`ProximityMonitor::recompute_corners`]; the
//!    monitor never re-measures on its own.
//!
//! Sessions are independent. Each keeps its own inside flag and callback
//! pair, and they are dispatched in the order they were started.
//!
//! Stopping a session does not clear its inside flag. A restarted session
//! resumes from whatever state it last observed, so an enter (or exit) is
//! only reported once the pointer actually crosses the threshold again.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_proximity::{AlertKind, ProximityMonitor, Scope};
//!
//! let element = Rect::new(0.0, 0.0, 100.0, 50.0);
//! let mut monitor = ProximityMonitor::configure(|r: &Rect| *r, Some(element), Some(20.0));
//! monitor.start_all(None, None);
//!
//! // Far away: nothing happens.
//! assert!(monitor.pointer_moved(Point::new(50.0, -30.0)).unwrap().is_empty());
//!
//! // Within 20 units of the top border: one enter transition.
//! let events = monitor.pointer_moved(Point::new(50.0, -15.0)).unwrap();
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].scope, Scope::AllSides);
//! assert_eq!(events[0].kind, AlertKind::Enter);
//! assert_eq!(events[0].distance, 15.0);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect};
use log::{debug, info, warn};

use crate::geometry::{BorderDistances, Corners, border_distances, distance_to_element};
use crate::{ProximityError, Scope, Side};

/// Alert distance used when none (or a non-positive one) is given.
pub const DEFAULT_ALERT_DISTANCE: f64 = 200.0;

/// Measures an element's bounds.
///
/// The returned rectangle must be in the same coordinate space as the
/// positions passed to [`ProximityMonitor::pointer_moved`], with `(x0, y0)`
/// as the top-left corner.
pub trait Measure<E> {
    /// Current bounds of `element`.
    fn measure(&self, element: &E) -> Rect;
}

impl<E, F> Measure<E> for F
where
    F: Fn(&E) -> Rect,
{
    fn measure(&self, element: &E) -> Rect {
        self(element)
    }
}

/// Parameters for a [`ProximityMonitor`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityConfig {
    /// Threshold at or under which the pointer counts as inside the alert area.
    pub alert_distance: f64,
}

impl ProximityConfig {
    /// Config with `alert_distance`, falling back to [`DEFAULT_ALERT_DISTANCE`]
    /// for `None`, zero, negative or NaN values.
    pub fn with_alert_distance(alert_distance: Option<f64>) -> Self {
        let alert_distance = match alert_distance {
            Some(d) if d > 0.0 => d,
            _ => DEFAULT_ALERT_DISTANCE,
        };
        Self { alert_distance }
    }
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            alert_distance: DEFAULT_ALERT_DISTANCE,
        }
    }
}

/// Direction of an alert-area transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AlertKind {
    /// The pointer moved to within the alert distance.
    Enter,
    /// The pointer moved beyond the alert distance.
    Exit,
}

/// A transition fired by one session during [`ProximityMonitor::pointer_moved`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProximityEvent {
    /// The session that transitioned.
    pub scope: Scope,
    /// Whether the pointer entered or left the alert area.
    pub kind: AlertKind,
    /// The distance that triggered the transition.
    pub distance: f64,
}

/// What to do when a session transitions.
#[derive(Default)]
pub enum AlertCallback {
    /// Log the transition at `info` level and carry on.
    #[default]
    Report,
    /// Call the closure with the triggering distance.
    Custom(Box<dyn FnMut(f64)>),
}

impl AlertCallback {
    /// Wrap a closure.
    pub fn custom(f: impl FnMut(f64) + 'static) -> Self {
        Self::Custom(Box::new(f))
    }

    /// Returns `true` for [`AlertCallback::Report`].
    pub fn is_report(&self) -> bool {
        matches!(self, Self::Report)
    }

    fn fire(&mut self, event: &ProximityEvent) {
        match self {
            Self::Report => match event.kind {
                AlertKind::Enter => info!(
                    "pointer entered the alert area ({}) at distance {}",
                    event.scope, event.distance
                ),
                AlertKind::Exit => info!(
                    "pointer left the alert area ({}) at distance {}",
                    event.scope, event.distance
                ),
            },
            Self::Custom(f) => f(event.distance),
        }
    }
}

impl fmt::Debug for AlertCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Report => f.write_str("Report"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[derive(Debug, Default)]
struct Session {
    inside: bool,
    on_enter: AlertCallback,
    on_exit: AlertCallback,
}

impl Session {
    fn update(&mut self, scope: Scope, distance: f64, alert_distance: f64) -> Option<ProximityEvent> {
        let inside = distance <= alert_distance;
        if inside == self.inside {
            return None;
        }
        self.inside = inside;
        let event = ProximityEvent {
            scope,
            kind: if inside {
                AlertKind::Enter
            } else {
                AlertKind::Exit
            },
            distance,
        };
        if inside {
            self.on_enter.fire(&event);
        } else {
            self.on_exit.fire(&event);
        }
        Some(event)
    }
}

/// Tracks the pointer's distance to one element and reports threshold crossings.
///
/// `E` is the host's element handle and `M` measures it. See the
/// [module docs](self) for the overall flow.
pub struct ProximityMonitor<E, M> {
    measurer: M,
    element: Option<E>,
    corners: Option<Corners>,
    config: ProximityConfig,
    sessions: [Session; Scope::COUNT],
    /// Active sessions in dispatch order.
    subscriptions: Vec<Scope>,
}

impl<E: fmt::Debug, M> fmt::Debug for ProximityMonitor<E, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProximityMonitor")
            .field("element", &self.element)
            .field("corners", &self.corners)
            .field("config", &self.config)
            .field("sessions", &self.sessions)
            .field("subscriptions", &self.subscriptions)
            .finish_non_exhaustive()
    }
}

impl<E, M: Measure<E>> ProximityMonitor<E, M> {
    /// Bind to `element`, measure it, and set the alert distance.
    ///
    /// A missing element is logged rather than rejected; the monitor has no
    /// corners until one is bound and [`recompute_corners`](Self::recompute_corners)
    /// succeeds. Every session starts with [`AlertCallback::Report`] callbacks.
    pub fn configure(measurer: M, element: Option<E>, alert_distance: Option<f64>) -> Self {
        if element.is_none() {
            warn!("ProximityMonitor::configure called without an element");
        }
        let corners = element
            .as_ref()
            .map(|e| Corners::from_rect(measurer.measure(e)));
        Self {
            measurer,
            element,
            corners,
            config: ProximityConfig::with_alert_distance(alert_distance),
            sessions: core::array::from_fn(|_| Session::default()),
            subscriptions: Vec::new(),
        }
    }

    /// Bind to a different element without re-measuring.
    ///
    /// The stored corners keep describing the previous element until
    /// [`recompute_corners`](Self::recompute_corners) is called.
    pub fn set_element(&mut self, element: Option<E>) {
        if element.is_none() {
            warn!("ProximityMonitor::set_element called without an element");
        }
        self.element = element;
    }

    /// Set the alert distance; `None` or a non-positive value restores
    /// [`DEFAULT_ALERT_DISTANCE`].
    pub fn set_alert_distance(&mut self, alert_distance: Option<f64>) {
        self.config = ProximityConfig::with_alert_distance(alert_distance);
    }

    /// Optionally rebind, then measure the bound element and store its corners.
    pub fn recompute_corners(&mut self, element: Option<E>) -> Result<Corners, ProximityError> {
        if element.is_some() {
            self.element = element;
        }
        let element = self.element.as_ref().ok_or(ProximityError::MissingElement)?;
        let corners = Corners::from_rect(self.measurer.measure(element));
        self.corners = Some(corners);
        Ok(corners)
    }

    /// Distance from `pos` to the element, optionally restricted to one side.
    pub fn query_distance(&self, pos: Point, side: Option<Side>) -> Result<f64, ProximityError> {
        let corners = self.corners.as_ref().ok_or(ProximityError::MissingElement)?;
        Ok(distance_to_element(pos, corners, side))
    }

    /// Distances from `pos` to every border of the element.
    pub fn border_distances(&self, pos: Point) -> Result<BorderDistances, ProximityError> {
        let corners = self.corners.as_ref().ok_or(ProximityError::MissingElement)?;
        Ok(border_distances(pos, corners))
    }

    /// Start (or restart) the session that watches the nearest border.
    ///
    /// `None` keeps the callback already stored for this session.
    pub fn start_all(&mut self, on_enter: Option<AlertCallback>, on_exit: Option<AlertCallback>) {
        self.start(Scope::AllSides, on_enter, on_exit);
    }

    /// Stop the all-sides session. Returns `true` if it was active.
    pub fn stop_all(&mut self) -> bool {
        self.stop(Scope::AllSides)
    }

    /// Start (or restart) the session that watches `side` only.
    ///
    /// `None` keeps the callback already stored for this side.
    pub fn start_side(
        &mut self,
        side: Side,
        on_enter: Option<AlertCallback>,
        on_exit: Option<AlertCallback>,
    ) {
        self.start(Scope::Side(side), on_enter, on_exit);
    }

    /// Stop the session for `side`. Returns `true` if it was active.
    pub fn stop_side(&mut self, side: Side) -> bool {
        self.stop(Scope::Side(side))
    }

    /// Start (or restart) the session for `scope`.
    ///
    /// Restarting an active session replaces its subscription, which moves it
    /// to the end of the dispatch order.
    pub fn start(
        &mut self,
        scope: Scope,
        on_enter: Option<AlertCallback>,
        on_exit: Option<AlertCallback>,
    ) {
        let session = &mut self.sessions[scope.index()];
        if let Some(cb) = on_enter {
            session.on_enter = cb;
        }
        if let Some(cb) = on_exit {
            session.on_exit = cb;
        }
        self.subscriptions.retain(|s| *s != scope);
        self.subscriptions.push(scope);
        debug!("started proximity session ({scope})");
    }

    /// Stop the session for `scope`. Returns `true` if it was active.
    ///
    /// The session's inside flag and callbacks are kept.
    pub fn stop(&mut self, scope: Scope) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| *s != scope);
        let stopped = self.subscriptions.len() != before;
        if stopped {
            debug!("stopped proximity session ({scope})");
        }
        stopped
    }

    /// Feed a pointer position to every active session.
    ///
    /// Returns the transitions fired, in dispatch order, after their callbacks
    /// have run. With no active sessions this does nothing. With active
    /// sessions but no measured element it fails with
    /// [`ProximityError::MissingElement`] and leaves all state untouched.
    pub fn pointer_moved(&mut self, pos: Point) -> Result<Vec<ProximityEvent>, ProximityError> {
        if self.subscriptions.is_empty() {
            return Ok(Vec::new());
        }
        let corners = self.corners.as_ref().ok_or(ProximityError::MissingElement)?;
        let distances = border_distances(pos, corners);
        let alert_distance = self.config.alert_distance;
        let mut events = Vec::new();
        for &scope in &self.subscriptions {
            let distance = match scope.side() {
                Some(side) => distances.get(side),
                None => distances.min(),
            };
            if let Some(event) = self.sessions[scope.index()].update(scope, distance, alert_distance) {
                events.push(event);
            }
        }
        Ok(events)
    }
}

impl<E, M> ProximityMonitor<E, M> {
    /// The bound element, if any.
    pub fn element(&self) -> Option<&E> {
        self.element.as_ref()
    }

    /// The most recently measured corners, if any.
    pub fn corners(&self) -> Option<Corners> {
        self.corners
    }

    /// The current alert distance.
    pub fn alert_distance(&self) -> f64 {
        self.config.alert_distance
    }

    /// The current configuration.
    pub fn config(&self) -> ProximityConfig {
        self.config
    }

    /// Whether the session for `scope` last observed the pointer inside its alert area.
    pub fn is_inside(&self, scope: Scope) -> bool {
        self.sessions[scope.index()].inside
    }

    /// Whether the session for `scope` is currently subscribed.
    pub fn is_active(&self, scope: Scope) -> bool {
        self.subscriptions.contains(&scope)
    }

    /// Active sessions in dispatch order.
    pub fn active_scopes(&self) -> &[Scope] {
        &self.subscriptions
    }

    /// The callbacks currently stored for `scope`, as `(on_enter, on_exit)`.
    pub fn callbacks(&self, scope: Scope) -> (&AlertCallback, &AlertCallback) {
        let session = &self.sessions[scope.index()];
        (&session.on_enter, &session.on_exit)
    }
}
