// Composition root.
//
// Responsibilities
// - Read configuration from arguments and environment.
// - Instantiate concrete adapters and wire them into the use case handlers.
// - Serve the account endpoint, or drive the submit handler from the command line.

pub mod config;
pub mod http;
pub mod state;
pub mod submit;
pub mod telemetry;
