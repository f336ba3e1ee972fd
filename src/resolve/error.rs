use thiserror::Error;

use crate::coord::LatLng;
use crate::resolve::RouteQuery;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("no network vertex near {0}")]
    VertexNotFound(LatLng),

    #[error("no route found for {0}")]
    NoRouteFound(RouteQuery),

    #[error("feature service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl ResolveError {
    /// Service failures say nothing about the network itself,
    /// so callers retry them rather than clearing the map.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ResolveError::ServiceUnavailable(_))
    }
}
