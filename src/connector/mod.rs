//! # Connector Layer
//!
//! Transport implementations for the application layer:
//! - `reqwest` over HTTP for talking to the real backend
//! - an in-memory recorder for tests

pub mod adapter;

pub use adapter::*;
