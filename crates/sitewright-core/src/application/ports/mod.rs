//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `sitewright-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ControlPlane`: the external CloudPanel CLI
//!   - `DnsResolver`: single-shot address lookup
//!   - `SecretGenerator`: password minting
//!   - `CredentialsStore`: credentials file emission
//!   - `RuntimeCatalog`: installed PHP version discovery
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    CertificateOutcome, ControlPlane, CredentialsStore, DatabaseSpec, DnsResolver, PASSWORD_LENGTH,
    RuntimeCatalog, SecretGenerator, SiteSpec,
};
