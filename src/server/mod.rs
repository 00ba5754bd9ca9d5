//! Server module: host state, builder, and HTTP routes

pub mod builder;
pub mod host;
pub mod routes;

pub use builder::ServerBuilder;
pub use host::ServerHost;
