use std::fmt::{Display, Formatter};

use reqwest::Url;

use crate::coord::LatLng;
use crate::resolve::RouteQuery;

pub const SERVICE: &str = "WFS";
pub const VERSION: &str = "1.0.0";
pub const REQUEST: &str = "GetFeature";
pub const OUTPUT_FORMAT: &str = "application/json";

/// Parameters of a parameterised SQL view, rendered
/// as `key:value;key:value;` in the `viewparams` argument.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ViewParams(Vec<(&'static str, String)>);

impl ViewParams {
    pub fn with(mut self, key: &'static str, value: impl Display) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    /// `x` is the longitude, `y` the latitude.
    pub fn nearest_vertex(point: &LatLng) -> Self {
        ViewParams::default()
            .with("x", format!("{:.7}", point.lng()))
            .with("y", format!("{:.7}", point.lat()))
    }

    pub fn shortest_path(query: &RouteQuery) -> Self {
        ViewParams::default()
            .with("source", query.source())
            .with("target", query.target())
    }
}

impl Display for ViewParams {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (key, value) in &self.0 {
            // Separators inside a value must be escaped for the view parser
            let value = value.replace(';', "\\;").replace(',', "\\,");
            write!(f, "{key}:{value};")?;
        }

        Ok(())
    }
}

/// Builds the `GetFeature` request for `layer` on the service `endpoint`.
pub fn feature_url(endpoint: &Url, layer: &str, params: &ViewParams) -> Url {
    let mut url = endpoint.clone();

    url.query_pairs_mut()
        .append_pair("service", SERVICE)
        .append_pair("version", VERSION)
        .append_pair("request", REQUEST)
        .append_pair("typeName", layer)
        .append_pair("outputformat", OUTPUT_FORMAT)
        .append_pair("viewparams", &params.to_string());

    url
}
