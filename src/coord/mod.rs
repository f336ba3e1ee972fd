//! Geographic positions as the markers and the feature service see them.

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod latlng;
#[doc(hidden)]
#[cfg(test)]
mod test;

#[doc(inline)]
pub use error::GeoError;
#[doc(inline)]
pub use latlng::{Degree, LatLng};
