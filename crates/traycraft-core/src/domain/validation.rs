use crate::domain::{
    entities::{OutputBundle, Specification},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_specification(spec: &Specification) -> Result<(), DomainError> {
        spec.validate()
    }

    pub fn validate_bundle(bundle: &OutputBundle) -> Result<(), DomainError> {
        bundle.validate()
    }
}
