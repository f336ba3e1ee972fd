mod definition;
mod implementation;
mod query;
mod summary;

pub use definition::RouteResolver;
pub use query::{RouteQuery, RouteResult};
pub use summary::{format_distance, format_travel_time};
