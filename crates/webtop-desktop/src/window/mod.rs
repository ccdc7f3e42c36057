//! Window management module
//!
//! Provides the fixed window registry, stacking order and hit testing.

#[allow(clippy::module_inception)]
mod window;
mod config;
mod region;
mod registry;
mod stacking;

pub use window::{Visibility, Window};
pub use config::WindowConfig;
pub use region::WindowRegion;
pub use registry::WindowRegistry;
pub use stacking::ZOrder;

/// Stable window identifier, unique within a registry
pub type WindowId = String;
