use log::{debug, warn};
use strum::IntoEnumIterator;

use crate::coord::LatLng;
use crate::coordinator::state::{Command, DragState};
use crate::marker::{MarkerRole, Markers, Revision, VertexRef};
use crate::present::{MapSurface, RouteLayerPresenter};
use crate::resolve::{ResolveError, RouteQuery, RouteResult};

/// Consecutive service failures tolerated before pending retries are dropped.
pub const MAX_RETRIES: u32 = 4;
/// Upper bound on the ticks skipped between retries.
const MAX_BACKOFF_TICKS: u32 = 8;

#[derive(Debug, Default)]
struct Pending {
    /// Markers awaiting resolution, most recently dragged last.
    roles: Vec<MarkerRole>,
    /// A route lookup to retry after the service failed.
    route: bool,
}

/// Consecutive `ServiceUnavailable` outcomes, and the ticks
/// to sit out before the next retry.
#[derive(Debug, Default)]
struct Backoff {
    failures: u32,
    hold: u32,
}

impl Backoff {
    fn reset(&mut self) {
        *self = Backoff::default();
    }

    /// Records a failure. Returns `false` once retries are exhausted.
    fn failed(&mut self) -> bool {
        self.failures += 1;
        if self.failures > MAX_RETRIES {
            return false;
        }

        self.hold = (1 << (self.failures - 1)).min(MAX_BACKOFF_TICKS);
        true
    }
}

impl Pending {
    fn is_empty(&self) -> bool {
        self.roles.is_empty() && !self.route
    }

    fn push(&mut self, role: MarkerRole) {
        self.roles.retain(|pending| *pending != role);
        self.roles.push(role);
    }

    /// Queues a retry behind anything dragged since.
    fn requeue(&mut self, role: MarkerRole) {
        if !self.roles.contains(&role) {
            self.roles.insert(0, role);
        }
    }
}

#[derive(Debug, Default)]
struct InFlight {
    resolves: usize,
    routes: usize,
}

/// Coordinates marker drags, vertex lookups, route lookups and the displayed route.
///
/// The coordinator performs no IO. Each input either updates the markers
/// or yields a [`Command`] for the driver to execute, whose outcome is fed
/// back through [`DragCoordinator::vertex_resolved`] or
/// [`DragCoordinator::route_resolved`].
///
/// ### Ordering
/// Lookups are never cancelled and may complete in any order.
/// * A vertex outcome is applied unless the marker already holds the
///   outcome of a later drag.
/// * A route is requested only once no resolution is pending or in
///   flight, and always for the vertex pair recorded at that moment.
/// * A route outcome is applied only while its pair is still current.
///
/// ### Retries
/// A lookup failing with [`ResolveError::ServiceUnavailable`] is retried
/// after a growing number of ticks. After [`MAX_RETRIES`] consecutive
/// failures the work is dropped, leaving markers and route as they were,
/// until the next drag.
#[derive(Debug)]
pub struct DragCoordinator {
    markers: Markers,
    pending: Pending,
    in_flight: InFlight,
    backoff: Backoff,
    /// The vertex pair changed since the last route request.
    route_due: bool,
}

impl DragCoordinator {
    pub fn new(markers: Markers) -> Self {
        DragCoordinator {
            markers,
            pending: Pending::default(),
            in_flight: InFlight::default(),
            backoff: Backoff::default(),
            route_due: false,
        }
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn state(&self) -> DragState {
        if !self.pending.is_empty() {
            DragState::Dirty
        } else if self.in_flight.resolves > 0 {
            DragState::Resolving
        } else if self.in_flight.routes > 0 {
            DragState::Routing
        } else {
            DragState::Idle
        }
    }

    pub fn is_quiescent(&self) -> bool {
        self.state() == DragState::Idle
    }

    /// Queues the startup pass: both markers are resolved
    /// at their initial positions, then routed once.
    pub fn bootstrap(&mut self) {
        for role in MarkerRole::iter().rev() {
            self.pending.push(role);
        }
    }

    /// Records a marker dropped at `position`, superseding any work in flight.
    pub fn drag_end(&mut self, role: MarkerRole, position: LatLng) {
        let revision = self.markers.get_mut(role).moved(position);
        self.pending.push(role);
        self.backoff.reset();

        debug!("{role} marker dropped at {position} (revision {revision})");
    }

    /// Debounce tick. Resolves the most recently dragged pending
    /// marker, or retries a failed route lookup.
    pub fn tick<S>(&mut self, presenter: &mut RouteLayerPresenter<S>) -> Option<Command>
    where
        S: MapSurface,
    {
        if self.backoff.hold > 0 {
            self.backoff.hold -= 1;
            return None;
        }

        if let Some(role) = self.pending.roles.pop() {
            let marker = &self.markers[role];
            self.in_flight.resolves += 1;

            debug!(
                "Resolving {role} marker at {} (revision {})",
                marker.position(),
                marker.revision()
            );

            return Some(Command::ResolveVertex {
                role,
                position: marker.position(),
                revision: marker.revision(),
            });
        }

        if self.pending.route {
            return self.settle(presenter);
        }

        None
    }

    /// Applies the outcome of a [`Command::ResolveVertex`].
    pub fn vertex_resolved<S>(
        &mut self,
        role: MarkerRole,
        revision: Revision,
        outcome: Result<VertexRef, ResolveError>,
        presenter: &mut RouteLayerPresenter<S>,
    ) -> Option<Command>
    where
        S: MapSurface,
    {
        self.in_flight.resolves = self.in_flight.resolves.saturating_sub(1);
        let marker = self.markers.get_mut(role);

        if !matches!(outcome, Err(ResolveError::ServiceUnavailable(_))) {
            self.backoff.reset();
        }

        match outcome {
            Ok(vertex) => {
                debug!("{role} marker (revision {revision}) resolved to vertex {vertex}");

                if marker.apply(revision, Some(vertex)) {
                    self.route_due = true;
                } else {
                    debug!("Dropping superseded {role} resolution (revision {revision})");
                }
            }
            Err(ResolveError::ServiceUnavailable(reason)) => {
                warn!("Could not resolve {role} marker: {reason}");

                if revision == marker.revision() {
                    if self.backoff.failed() {
                        self.pending.requeue(role);
                    } else {
                        warn!("Giving up on {role} marker after {MAX_RETRIES} retries");
                    }
                }
            }
            Err(err) => {
                debug!("{err}");

                if marker.apply(revision, None) {
                    presenter.clear();
                    self.route_due = true;
                }
            }
        }

        self.settle(presenter)
    }

    /// Applies the outcome of a [`Command::ResolveRoute`].
    pub fn route_resolved<S>(
        &mut self,
        query: RouteQuery,
        outcome: Result<RouteResult, ResolveError>,
        presenter: &mut RouteLayerPresenter<S>,
    ) where
        S: MapSurface,
    {
        self.in_flight.routes = self.in_flight.routes.saturating_sub(1);

        if self.markers.query().as_ref() != Some(&query) {
            debug!("Discarding route for superseded pair {query}");
            return;
        }

        match outcome {
            Ok(route) => {
                self.backoff.reset();
                presenter.show(route)
            }
            Err(ResolveError::ServiceUnavailable(reason)) => {
                warn!("Could not route {query}: {reason}");

                if self.backoff.failed() {
                    self.pending.route = true;
                } else {
                    warn!("Giving up on route {query} after {MAX_RETRIES} retries");
                }
            }
            Err(err) => {
                debug!("{err}");
                self.backoff.reset();
                presenter.clear();
            }
        }
    }

    /// Requests the route for the current pair once all resolution work has drained.
    fn settle<S>(&mut self, presenter: &mut RouteLayerPresenter<S>) -> Option<Command>
    where
        S: MapSurface,
    {
        if !self.pending.roles.is_empty() || self.in_flight.resolves > 0 {
            return None;
        }

        if !(self.route_due || self.pending.route) {
            return None;
        }

        self.route_due = false;
        self.pending.route = false;

        match self.markers.query() {
            Some(query) => {
                debug!("Requesting route {query}");
                self.in_flight.routes += 1;
                Some(Command::ResolveRoute { query })
            }
            None => {
                debug!("Both markers need a vertex before routing");
                presenter.clear();
                None
            }
        }
    }
}
