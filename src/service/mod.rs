//! Client for a Web Feature Service publishing the `nearest_vertex`
//! and `shortest_path` views of a routable road network.

#[doc(hidden)]
pub mod client;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod request;
#[doc(hidden)]
pub mod response;

#[doc(inline)]
pub use client::{WfsClient, WfsLayers};
#[doc(inline)]
pub use error::ServiceError;
