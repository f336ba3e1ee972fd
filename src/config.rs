//! Session configuration, read from the environment (and an optional `.env`).

use std::time::Duration;

use log::info;
use thiserror::Error;

use crate::coord::LatLng;

pub const SERVICE_URL: &str = "DRAGROUTE_SERVICE_URL";
pub const VERTEX_LAYER: &str = "DRAGROUTE_VERTEX_LAYER";
pub const ROUTE_LAYER: &str = "DRAGROUTE_ROUTE_LAYER";
pub const TICK_MS: &str = "DRAGROUTE_TICK_MS";
pub const TIMEOUT_MS: &str = "DRAGROUTE_TIMEOUT_MS";
pub const SOURCE: &str = "DRAGROUTE_SOURCE";
pub const TARGET: &str = "DRAGROUTE_TARGET";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} has invalid value {value:?}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragConfig {
    /// Root of the feature service, e.g. `http://127.0.0.1:8082/geoserver`.
    pub service_url: String,
    pub vertex_layer: String,
    pub route_layer: String,
    /// Debounce interval between dirty checks.
    pub tick_interval: Duration,
    pub request_timeout: Duration,
    /// Initial marker positions.
    pub source: LatLng,
    pub target: LatLng,
}

impl Default for DragConfig {
    fn default() -> Self {
        DragConfig {
            service_url: "http://127.0.0.1:8082/geoserver".to_string(),
            vertex_layer: "routing:nearest_vertex".to_string(),
            route_layer: "routing:shortest_path".to_string(),
            tick_interval: Duration::from_millis(250),
            request_timeout: Duration::from_secs(10),
            source: LatLng::from_degree_unchecked(-1.283147351126288, 36.822524070739746),
            target: LatLng::from_degree_unchecked(-1.286107765621784, 36.83449745178223),
        }
    }
}

impl DragConfig {
    /// Loads `.env` when present, then reads the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        DragConfig::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from `lookup`, falling back to
    /// the defaults for every variable it does not know.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = DragConfig::default();

        Ok(DragConfig {
            service_url: lookup(SERVICE_URL).unwrap_or(defaults.service_url),
            vertex_layer: lookup(VERTEX_LAYER).unwrap_or(defaults.vertex_layer),
            route_layer: lookup(ROUTE_LAYER).unwrap_or(defaults.route_layer),
            tick_interval: parse(&lookup, TICK_MS, millis)?.unwrap_or(defaults.tick_interval),
            request_timeout: parse(&lookup, TIMEOUT_MS, millis)?
                .unwrap_or(defaults.request_timeout),
            source: parse(&lookup, SOURCE, |v| v.parse::<LatLng>().map_err(|e| e.to_string()))?
                .unwrap_or(defaults.source),
            target: parse(&lookup, TARGET, |v| v.parse::<LatLng>().map_err(|e| e.to_string()))?
                .unwrap_or(defaults.target),
        })
    }

    pub fn log(&self) {
        info!("Feature service: {}", self.service_url);
        info!(
            "Layers: vertex={} route={}",
            self.vertex_layer, self.route_layer
        );
        info!(
            "Tick every {:?}, requests time out after {:?}",
            self.tick_interval, self.request_timeout
        );
        info!("Markers: source={} target={}", self.source, self.target);
    }
}

fn parse<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    convert: impl Fn(&str) -> Result<T, String>,
) -> Result<Option<T>, ConfigError> {
    lookup(name)
        .map(|value| {
            convert(value.trim()).map_err(|reason| ConfigError::InvalidValue {
                name,
                value: value.clone(),
                reason,
            })
        })
        .transpose()
}

fn millis(value: &str) -> Result<Duration, String> {
    match value.parse::<u64>() {
        Ok(0) => Err("must be greater than zero".to_string()),
        Ok(ms) => Ok(Duration::from_millis(ms)),
        Err(e) => Err(e.to_string()),
    }
}
