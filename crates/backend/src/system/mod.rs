pub mod middleware;
pub mod tracing;
