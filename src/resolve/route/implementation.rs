use crate::resolve::route::definition::RouteResolver;
use crate::resolve::{ResolveError, RouteQuery, RouteResult};
use crate::service::request::ViewParams;
use crate::service::response::first_path;
use crate::service::WfsClient;

use async_trait::async_trait;
#[cfg(feature = "tracing")]
use tracing::Level;

#[async_trait]
impl RouteResolver for WfsClient {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err(level = Level::INFO)))]
    async fn resolve(&self, query: &RouteQuery) -> Result<RouteResult, ResolveError> {
        let collection = self
            .features(&self.layers().route, &ViewParams::shortest_path(query))
            .await?;

        first_path(&collection, query)?.ok_or_else(|| ResolveError::NoRouteFound(query.clone()))
    }
}
