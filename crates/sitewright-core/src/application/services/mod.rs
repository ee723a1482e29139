//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "provision a site" or "delete a site".

pub mod provision_service;

pub use provision_service::{ProvisionOutcome, ProvisionService};
