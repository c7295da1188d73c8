//! Shared fixtures for the workspace integration tests.
//!
//! `RecordingGateway` stands in for the backend at the application layer and
//! counts every call; `StubBackend` is a real HTTP server on an ephemeral port
//! used to check what `KoraClient` puts on the wire.

pub mod fixtures;
pub mod recording_gateway;
pub mod stub_backend;

pub use recording_gateway::RecordingGateway;
pub use stub_backend::StubBackend;
