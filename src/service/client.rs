use geojson::FeatureCollection;
use log::debug;
use reqwest::Url;

use crate::config::DragConfig;
use crate::resolve::ResolveError;
use crate::service::error::ServiceError;
use crate::service::request::{feature_url, ViewParams};
use crate::service::response::parse_collection;

/// Names of the two SQL views published by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct WfsLayers {
    pub vertex: String,
    pub route: String,
}

impl Default for WfsLayers {
    fn default() -> Self {
        WfsLayers {
            vertex: "routing:nearest_vertex".to_string(),
            route: "routing:shortest_path".to_string(),
        }
    }
}

/// Feature service client, implementing both
/// [`VertexResolver`](crate::resolve::VertexResolver) and
/// [`RouteResolver`](crate::resolve::RouteResolver).
#[derive(Debug, Clone)]
pub struct WfsClient {
    inner: reqwest::Client,
    endpoint: Url,
    layers: WfsLayers,
}

impl WfsClient {
    /// Creates a client for the service rooted at `base`,
    /// e.g. `http://127.0.0.1:8082/geoserver`.
    pub fn new(base: &str) -> Result<Self, ServiceError> {
        let invalid = |reason: String| ServiceError::InvalidEndpoint(base.to_string(), reason);

        let mut endpoint: Url = base.parse().map_err(|e| invalid(format!("{e}")))?;
        endpoint
            .path_segments_mut()
            .map_err(|_| invalid("url cannot be a base".to_string()))?
            .pop_if_empty()
            .push("wfs");

        let inner = reqwest::Client::builder()
            .user_agent(concat!("dragroute/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(WfsClient {
            inner,
            endpoint,
            layers: WfsLayers::default(),
        })
    }

    pub fn from_config(config: &DragConfig) -> Result<Self, ServiceError> {
        let client = WfsClient::new(&config.service_url)?.with_layers(WfsLayers {
            vertex: config.vertex_layer.clone(),
            route: config.route_layer.clone(),
        });

        Ok(client)
    }

    pub fn with_layers(mut self, layers: WfsLayers) -> Self {
        self.layers = layers;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn layers(&self) -> &WfsLayers {
        &self.layers
    }

    /// Issues a `GetFeature` request against `layer`.
    pub(crate) async fn features(
        &self,
        layer: &str,
        params: &ViewParams,
    ) -> Result<FeatureCollection, ResolveError> {
        let url = feature_url(&self.endpoint, layer, params);
        debug!("GetFeature {layer} with viewparams {params}");

        let body = self
            .inner
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(unavailable)?
            .text()
            .await
            .map_err(unavailable)?;

        parse_collection(&body)
    }
}

fn unavailable(err: reqwest::Error) -> ResolveError {
    ResolveError::ServiceUnavailable(err.to_string())
}
