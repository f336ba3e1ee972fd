use std::fmt::{Display, Formatter};

use geo::MultiLineString;

use crate::marker::VertexRef;
use crate::resolve::route::summary::{format_distance, format_travel_time};

/// The vertex pair a route is requested for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteQuery {
    source: VertexRef,
    target: VertexRef,
}

impl RouteQuery {
    pub(crate) fn new(source: VertexRef, target: VertexRef) -> Self {
        RouteQuery { source, target }
    }

    pub fn source(&self) -> &VertexRef {
        &self.source
    }

    pub fn target(&self) -> &VertexRef {
        &self.target
    }
}

impl Display for RouteQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// A path produced by the shortest-path lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// The vertex pair this route answers.
    pub query: RouteQuery,
    pub geometry: MultiLineString,
    /// Hours.
    pub travel_time: f64,
    /// Kilometres.
    pub travel_distance: f64,
    /// Streets along the route, in travel order.
    pub street_names: Vec<String>,
}

impl RouteResult {
    pub fn formatted_time(&self) -> String {
        format_travel_time(self.travel_time)
    }

    pub fn formatted_distance(&self) -> String {
        format_distance(self.travel_distance)
    }

    /// Single line description, e.g. `6 minutes, 0.8km via Moi Avenue`.
    pub fn summary(&self) -> String {
        let mut summary = format!("{}, {}", self.formatted_time(), self.formatted_distance());

        if !self.street_names.is_empty() {
            summary.push_str(" via ");
            summary.push_str(&self.street_names.join(", "));
        }

        summary
    }
}
