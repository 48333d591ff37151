//! Optics

// Re-export.
pub mod common;
pub mod roos;

pub use common::Float;
pub use roos::Error;
