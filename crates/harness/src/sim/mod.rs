//! Clock/reset orchestration and program loading.
//!
//! `DesignHarness` owns one simulated core and the bus devices behind it, and advances both
//! one cycle at a time. The loader turns a raw binary into the word sequence the harness
//! preloads before reset.

/// Harness driving one simulated core and its device table.
pub mod design;

/// Raw program loading.
pub mod loader;

pub use design::DesignHarness;
