//! The components module contains all shared components for our app.

mod host_bridge;
mod reader;

pub use host_bridge::*;
pub use reader::*;
