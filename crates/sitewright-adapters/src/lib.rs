//! Infrastructure adapters for Sitewright.
//!
//! This crate implements the ports defined in
//! `sitewright-core::application::ports`. It contains all external
//! dependencies and I/O operations: process invocation of the control-plane
//! CLI and the DNS lookup utility, filesystem access, and randomness.

pub mod control_plane;
pub mod credentials;
pub mod dns;
pub mod runtime_catalog;
pub mod secrets;

// Re-export commonly used adapters
pub use control_plane::{ClpctlControlPlane, MemoryControlPlane};
pub use credentials::{HomeCredentialsStore, MemoryCredentialsStore};
pub use dns::{DigResolver, StaticResolver};
pub use runtime_catalog::{DirRuntimeCatalog, StaticRuntimeCatalog};
pub use secrets::{FixedSecretGenerator, RandSecretGenerator};
