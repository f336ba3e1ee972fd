#![doc = include_str!("../readme.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod config;
pub mod coord;
pub mod coordinator;
pub mod marker;
pub mod present;
pub mod resolve;
pub mod service;
pub mod session;

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod util;

#[doc(inline)]
pub use config::DragConfig;
#[doc(inline)]
pub use coordinator::{DragCoordinator, DragState};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use session::{DragEvent, DragSession};
#[cfg(feature = "tracing")]
pub use util::trace;
