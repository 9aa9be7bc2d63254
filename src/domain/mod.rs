//! # Domain Layer
//!
//! Request/response shapes for the document chat backend and the error types
//! shared by every layer. Nothing here performs I/O.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
