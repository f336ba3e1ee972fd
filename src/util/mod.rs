pub mod err;
#[cfg(test)]
pub(crate) mod fixture;
#[cfg(feature = "tracing")]
pub mod trace;
