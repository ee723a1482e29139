//! Sitewright Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sitewright
//! site provisioning tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         sitewright-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ProvisionService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: ControlPlane, Dns, Secrets,    │
//! │  CredentialsStore, RuntimeCatalog)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   sitewright-adapters (Infrastructure)  │
//! │ (ClpctlControlPlane, DigResolver, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (DomainName, SiteIdentifier, Request)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use sitewright_core::domain::{DomainName, SiteIdentifier};
//!
//! // 1. Validate the domain and derive its identifier
//! let domain = DomainName::parse("staging.example.com").unwrap();
//! assert_eq!(SiteIdentifier::derive(&domain).as_str(), "example-staging");
//! ```
//!
//! The application service is wired with adapters from `sitewright-adapters`:
//!
//! ```rust,ignore
//! let service = ProvisionService::new(control_plane, secrets, credentials, runtimes);
//! let outcome = service.provision(domain, php, template)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ProvisionOutcome, ProvisionService,
        ports::{
            CertificateOutcome, ControlPlane, CredentialsStore, DatabaseSpec, DnsResolver,
            RuntimeCatalog, SecretGenerator, SiteSpec,
        },
    };
    pub use crate::domain::{
        DomainName, InstallRequest, InstallRequestBuilder, PhpVersion, ServerAddresses,
        SiteCredentials, SiteIdentifier, VhostTemplate,
    };
    pub use crate::error::{CoreError, CoreResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
