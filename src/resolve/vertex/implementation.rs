use crate::coord::LatLng;
use crate::marker::VertexRef;
use crate::resolve::vertex::definition::VertexResolver;
use crate::resolve::ResolveError;
use crate::service::request::ViewParams;
use crate::service::response::first_vertex;
use crate::service::WfsClient;

use async_trait::async_trait;
use log::debug;
#[cfg(feature = "tracing")]
use tracing::Level;

#[async_trait]
impl VertexResolver for WfsClient {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err(level = Level::INFO)))]
    async fn resolve(&self, point: &LatLng) -> Result<VertexRef, ResolveError> {
        let collection = self
            .features(&self.layers().vertex, &ViewParams::nearest_vertex(point))
            .await?;

        debug!(
            "{} nearest vertex candidates for {point}",
            collection.features.len()
        );

        first_vertex(&collection)?.ok_or(ResolveError::VertexNotFound(*point))
    }
}
