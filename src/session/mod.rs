//! Drives a [`DragCoordinator`](crate::coordinator::DragCoordinator)
//! from drag events, a debounce interval and resolver completions.

#[doc(hidden)]
pub mod driver;
#[doc(hidden)]
pub mod event;

#[doc(inline)]
pub use driver::DragSession;
#[doc(inline)]
pub use event::{DragEvent, EventParseError};
