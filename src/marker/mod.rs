//! The two draggable endpoints and the vertices they resolve to.

#[doc(hidden)]
pub mod entity;
#[doc(hidden)]
pub mod role;

#[doc(inline)]
pub use entity::{Marker, Markers, Revision, VertexRef};
#[doc(inline)]
pub use role::MarkerRole;
