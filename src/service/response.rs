use geo::{Geometry, MultiLineString};
use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, JsonValue};
use serde::Deserialize;
use wkt::ToWkt;

use crate::marker::VertexRef;
use crate::resolve::{ResolveError, RouteQuery, RouteResult};

/// Attributes of the `shortest_path` feature.
#[derive(Debug, Default, Deserialize)]
struct PathAttributes {
    #[serde(default)]
    time: Option<f64>,
    #[serde(default)]
    distance: Option<f64>,
    #[serde(default)]
    names: Option<StreetNames>,
}

/// Street names arrive either as an array or as one comma separated string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StreetNames {
    List(Vec<String>),
    Joined(String),
}

impl From<StreetNames> for Vec<String> {
    fn from(value: StreetNames) -> Self {
        let names = match value {
            StreetNames::List(names) => names,
            StreetNames::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        };

        names
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect()
    }
}

fn malformed(reason: impl std::fmt::Display) -> ResolveError {
    ResolveError::ServiceUnavailable(format!("malformed response: {reason}"))
}

pub fn parse_collection(body: &str) -> Result<FeatureCollection, ResolveError> {
    body.parse::<FeatureCollection>().map_err(malformed)
}

/// The first candidate of a `nearest_vertex` response, `None` if there is none.
pub fn first_vertex(collection: &FeatureCollection) -> Result<Option<VertexRef>, ResolveError> {
    let Some(feature) = collection.features.first() else {
        return Ok(None);
    };

    vertex_id(feature)
        .map(Some)
        .ok_or_else(|| malformed("nearest vertex candidate carries no id"))
}

fn vertex_id(feature: &Feature) -> Option<VertexRef> {
    let property = feature.property("id").and_then(|id| match id {
        JsonValue::Number(number) => Some(number.to_string()),
        JsonValue::String(string) => Some(string.clone()),
        _ => None,
    });

    property
        .or_else(|| {
            feature.id.as_ref().map(|id| match id {
                Id::String(string) => string.clone(),
                Id::Number(number) => number.to_string(),
            })
        })
        .map(VertexRef::new)
}

/// The path feature of a `shortest_path` response answering `query`.
///
/// An empty collection, a feature without geometry and a geometry
/// without a single segment all mean there is no path.
pub fn first_path(
    collection: &FeatureCollection,
    query: &RouteQuery,
) -> Result<Option<RouteResult>, ResolveError> {
    let Some(feature) = collection.features.first() else {
        return Ok(None);
    };

    let Some(geometry) = feature.geometry.clone() else {
        return Ok(None);
    };

    let geometry = match Geometry::<f64>::try_from(geometry).map_err(malformed)? {
        Geometry::LineString(line) => MultiLineString::new(vec![line]),
        Geometry::MultiLineString(lines) => lines,
        other => {
            return Err(malformed(format!(
                "expected a line geometry, got {}",
                other.wkt_string()
            )));
        }
    };

    if geometry.0.iter().all(|line| line.0.len() < 2) {
        return Ok(None);
    }

    let attributes = match &feature.properties {
        Some(properties) => {
            serde_json::from_value::<PathAttributes>(JsonValue::Object(properties.clone()))
                .map_err(malformed)?
        }
        None => PathAttributes::default(),
    };

    Ok(Some(RouteResult {
        query: query.clone(),
        geometry,
        travel_time: attributes.time.unwrap_or_default(),
        travel_distance: attributes.distance.unwrap_or_default(),
        street_names: attributes.names.map(Vec::from).unwrap_or_default(),
    }))
}
