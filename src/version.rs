// src/version.rs
//! Version accessor for the `aicode` distribution.
//!
//! Cargo records the distribution version in the package manifest and
//! republishes it to the build as `CARGO_PKG_VERSION`; the constant below
//! binds that value once. When no package metadata is available the `env!`
//! expansion fails the build, so a missing distribution surfaces before any
//! consumer can observe a placeholder value.

/// Version string recorded in the installed package metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
