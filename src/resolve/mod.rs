//! Lookups against the external road network: point to vertex,
//! and vertex pair to route.

#[doc(hidden)]
pub mod error;
pub mod route;
pub mod vertex;

#[doc(inline)]
pub use error::ResolveError;
#[doc(inline)]
pub use route::{RouteQuery, RouteResolver, RouteResult};
#[doc(inline)]
pub use vertex::VertexResolver;
