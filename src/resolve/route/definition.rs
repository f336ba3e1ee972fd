use crate::resolve::{ResolveError, RouteQuery, RouteResult};

use async_trait::async_trait;
use std::sync::Arc;

/// Resolves a vertex pair to the shortest path between them.
#[async_trait]
pub trait RouteResolver: Send + Sync {
    /// Finds the route for `query`.
    ///
    /// Fails with [`ResolveError::NoRouteFound`] when the service has no
    /// path, such as for disconnected components or identical endpoints.
    /// A [`RouteQuery`] can only be built from two resolved vertices, so
    /// this is never reached with an endpoint missing.
    async fn resolve(&self, query: &RouteQuery) -> Result<RouteResult, ResolveError>;
}

#[async_trait]
impl<T> RouteResolver for Arc<T>
where
    T: RouteResolver + ?Sized,
{
    async fn resolve(&self, query: &RouteQuery) -> Result<RouteResult, ResolveError> {
        (**self).resolve(query).await
    }
}
