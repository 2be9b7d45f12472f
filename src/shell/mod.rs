// Composition root: reads config from the environment, wires the in-memory
// infrastructure into the use case handlers and exposes the HTTP router.

pub mod config;
pub mod http;
pub mod state;
