//! Materials

#[macro_use]
extern crate log;

mod cal;
mod glazing;

// Re-export
pub use cal::*;
pub use glazing::*;
