//! Glare

mod error;
mod metrics;
mod view;

// Re-export
pub use error::*;
pub use metrics::*;
pub use view::*;
