//! Ownership of the one route layer shown on the map.

#[doc(hidden)]
pub mod presenter;
#[doc(hidden)]
pub mod surface;

#[doc(inline)]
pub use presenter::RouteLayerPresenter;
#[doc(inline)]
pub use surface::{HeadlessSurface, LayerId, MapSurface};
