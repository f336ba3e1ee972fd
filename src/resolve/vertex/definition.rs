use crate::coord::LatLng;
use crate::marker::VertexRef;
use crate::resolve::ResolveError;

use async_trait::async_trait;
use std::sync::Arc;

/// Resolves an arbitrary point to the nearest vertex of the road network.
#[async_trait]
pub trait VertexResolver: Send + Sync {
    /// Returns the first candidate vertex the lookup offers for `point`.
    ///
    /// ### Note
    /// Candidates are not ranked client-side. The service is trusted
    /// to return them ordered by proximity, so the first one wins.
    /// Nothing is cached, every call reaches the service.
    ///
    /// Fails with [`ResolveError::VertexNotFound`] when there is
    /// no candidate at all, for example outside the covered network.
    async fn resolve(&self, point: &LatLng) -> Result<VertexRef, ResolveError>;
}

#[async_trait]
impl<T> VertexResolver for Arc<T>
where
    T: VertexResolver + ?Sized,
{
    async fn resolve(&self, point: &LatLng) -> Result<VertexRef, ResolveError> {
        (**self).resolve(point).await
    }
}
