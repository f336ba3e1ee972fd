use std::fmt::{Display, Formatter};
use std::ops::Index;

use crate::coord::LatLng;
use crate::marker::MarkerRole;
use crate::resolve::RouteQuery;

/// Counts the drags a marker has received. Every resolution is tagged
/// with the revision whose position it was issued for.
pub type Revision = u64;

/// Opaque identifier of a road-network vertex, as handed out
/// by the nearest-vertex lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexRef(String);

impl VertexRef {
    pub fn new(id: impl Into<String>) -> Self {
        VertexRef(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for VertexRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Marker {
    role: MarkerRole,
    position: LatLng,
    vertex: Option<VertexRef>,

    revision: Revision,
    resolved: Option<Revision>,
}

impl Marker {
    pub fn new(role: MarkerRole, position: LatLng) -> Self {
        Marker {
            role,
            position,
            vertex: None,
            revision: 0,
            resolved: None,
        }
    }

    pub fn role(&self) -> MarkerRole {
        self.role
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn vertex(&self) -> Option<&VertexRef> {
        self.vertex.as_ref()
    }

    /// Revision of the latest recorded position.
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Revision the current `vertex` (or its absence) was resolved for,
    /// `None` until the first resolution lands.
    pub fn resolved_revision(&self) -> Option<Revision> {
        self.resolved
    }

    /// Records a drag to `position`, returning the new revision.
    pub(crate) fn moved(&mut self, position: LatLng) -> Revision {
        self.position = position;
        self.revision += 1;
        self.revision
    }

    /// Applies a resolution outcome issued at `revision`.
    ///
    /// Outcomes older than the one already applied are refused,
    /// so a slow response can never overwrite a newer vertex.
    pub(crate) fn apply(&mut self, revision: Revision, vertex: Option<VertexRef>) -> bool {
        if self.resolved.is_some_and(|resolved| revision < resolved) {
            return false;
        }

        self.vertex = vertex;
        self.resolved = Some(revision);
        true
    }
}

/// Exactly one marker per [`MarkerRole`], for the lifetime of a session.
#[derive(Debug, Clone)]
pub struct Markers {
    source: Marker,
    target: Marker,
}

impl Markers {
    pub fn new(source: LatLng, target: LatLng) -> Self {
        Markers {
            source: Marker::new(MarkerRole::Source, source),
            target: Marker::new(MarkerRole::Target, target),
        }
    }

    pub fn get(&self, role: MarkerRole) -> &Marker {
        match role {
            MarkerRole::Source => &self.source,
            MarkerRole::Target => &self.target,
        }
    }

    pub(crate) fn get_mut(&mut self, role: MarkerRole) -> &mut Marker {
        match role {
            MarkerRole::Source => &mut self.source,
            MarkerRole::Target => &mut self.target,
        }
    }

    /// The route request for the current vertex pair, only
    /// available once both markers carry a vertex.
    pub fn query(&self) -> Option<RouteQuery> {
        let source = self.source.vertex()?.clone();
        let target = self.target.vertex()?.clone();

        Some(RouteQuery::new(source, target))
    }
}

impl Index<MarkerRole> for Markers {
    type Output = Marker;

    fn index(&self, role: MarkerRole) -> &Self::Output {
        self.get(role)
    }
}
