//! The drag-to-route state machine.

#[doc(hidden)]
pub mod machine;
#[doc(hidden)]
pub mod state;

#[doc(inline)]
pub use machine::{DragCoordinator, MAX_RETRIES};
#[doc(inline)]
pub use state::{Command, DragState};
