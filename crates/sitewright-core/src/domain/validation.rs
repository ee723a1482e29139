use crate::domain::{
    error::DomainError,
    value_objects::{DomainName, PhpVersion, VhostTemplate},
};

/// Centralized domain validation.
///
/// All validation entry points live here, not scattered across call sites.
/// Each delegates to the value object's own parser so the rules exist in
/// exactly one place.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_domain(input: &str) -> Result<DomainName, DomainError> {
        DomainName::parse(input)
    }

    pub fn validate_php_version(input: &str) -> Result<PhpVersion, DomainError> {
        input.parse()
    }

    pub fn validate_vhost_template(input: &str) -> Result<VhostTemplate, DomainError> {
        VhostTemplate::new(input)
    }
}
