//! Outbound communication with the generation server.
//!
//! # Services
//!
//! - [`generate`] - multipart upload of the two reference files to the
//!   PolydisVae mix endpoint

pub mod generate;

pub use generate::*;
