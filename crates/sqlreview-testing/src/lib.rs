//! Testing infrastructure for sqlreview.
//!
//! - `FakeTransport`: in-memory service that records every request
//! - `ScriptedConfirmer`: fixed answer to confirmation prompts, remembering them
//! - `fixtures`: JSON payloads shaped like the service's responses
//! - `TestWorld`: isolated data directory for running the CLI binary

pub mod fixtures;
pub mod transport;
pub mod world;

pub use transport::{FakeTransport, ScriptedConfirmer};
pub use world::TestWorld;
