//! Control-plane adapters.

mod clpctl;
mod memory;

pub use clpctl::ClpctlControlPlane;
pub use memory::MemoryControlPlane;
