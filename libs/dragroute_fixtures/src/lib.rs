//! Recorded feature-service responses used across the `dragroute` tests.

/// Two nearest-vertex candidates near the default source marker, `1042` first.
pub const NEAREST_VERTEX: &str = include_str!("../fixtures/nearest_vertex.json");
/// A single nearest-vertex candidate (`2317`) near the default target marker.
pub const NEAREST_VERTEX_TARGET: &str = include_str!("../fixtures/nearest_vertex_target.json");
/// No candidate: the point lies outside the covered network.
pub const NEAREST_VERTEX_EMPTY: &str = include_str!("../fixtures/nearest_vertex_empty.json");

/// `1042 -> 2317` as a multi-line path, 0.1h and 0.8km.
pub const SHORTEST_PATH: &str = include_str!("../fixtures/shortest_path.json");
/// Single line path with comma separated street names.
pub const SHORTEST_PATH_LINESTRING: &str =
    include_str!("../fixtures/shortest_path_linestring.json");
/// No path between the requested vertices.
pub const SHORTEST_PATH_EMPTY: &str = include_str!("../fixtures/shortest_path_empty.json");

