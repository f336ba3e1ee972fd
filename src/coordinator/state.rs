use strum::Display;

use crate::coord::LatLng;
use crate::marker::{MarkerRole, Revision};
use crate::resolve::RouteQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DragState {
    /// Nothing to do, the displayed route matches the markers.
    Idle,
    /// A marker moved, or a lookup must be retried, and the next tick acts on it.
    Dirty,
    /// A nearest-vertex lookup is in flight.
    Resolving,
    /// A shortest-path lookup is in flight.
    Routing,
}

/// Lookups the coordinator asks its driver to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ResolveVertex {
        role: MarkerRole,
        position: LatLng,
        revision: Revision,
    },
    ResolveRoute {
        query: RouteQuery,
    },
}
