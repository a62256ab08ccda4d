//! Value Objects - Immutable, identity-less domain primitives

mod local_timezone;
mod route_query;

pub use local_timezone::LocalTimezone;
pub use route_query::RouteQuery;
