//! # Application Layer
//!
//! The API client and the transport seam it is built on.

mod api_client;
pub mod interfaces;

pub use api_client::*;
pub use interfaces::*;
