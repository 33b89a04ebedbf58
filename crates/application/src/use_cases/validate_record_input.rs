use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument, warn};

use zonekeeper_domain::{
    IpAddressValidator, RecordType, TtlInput, Validated, ValidationErrors, ValidationResult,
};

use crate::ports::TtlValidation;

/// Raw record fields as submitted by the zone editor form. `glue_ips` carries
/// the comma-separated nameserver addresses accompanying a delegation.
#[derive(Debug, Clone)]
pub struct RecordInput {
    pub record_type: String,
    pub content: String,
    pub ttl: Option<String>,
    pub glue_ips: Option<String>,
}

/// Normalized record fields, ready to hand to the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedRecordInput {
    pub record_type: RecordType,
    pub content: String,
    pub ttl: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub glue_ips: Vec<String>,
}

/// Validates record form input before persistence: resolves the record type,
/// checks IP syntax for address-bearing types and glue addresses, and runs
/// the injected TTL policy. The fields are validated independently so the
/// form layer gets every field error in one round trip.
pub struct ValidateRecordInputUseCase {
    ttl_validation: Arc<dyn TtlValidation>,
    default_ttl: u32,
}

impl ValidateRecordInputUseCase {
    pub fn new(ttl_validation: Arc<dyn TtlValidation>, default_ttl: u32) -> Self {
        Self {
            ttl_validation,
            default_ttl,
        }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, input: &RecordInput) -> ValidationResult<ValidatedRecordInput> {
        // An unknown record type gates everything else: without it we can
        // neither pick an address family nor a TTL floor.
        let record_type: RecordType = input.record_type.parse().map_err(|e| {
            warn!(record_type = %input.record_type, "unknown record type");
            ValidationErrors::new(e)
        })?;

        let content = match record_type {
            RecordType::A => IpAddressValidator::validate_ipv4(&input.content).map(|v| v.value),
            RecordType::AAAA => IpAddressValidator::validate_ipv6(&input.content).map(|v| v.value),
            _ => Ok(input.content.clone()),
        };

        // Glue entries may be either family.
        let glue_ips = match input.glue_ips.as_deref() {
            Some(list) => IpAddressValidator::validate_multiple(list).map(|v| v.value),
            None => Ok(Vec::new()),
        };

        let ttl = self.ttl_validation.validate_ttl(
            TtlInput::from(input.ttl.as_deref()),
            self.default_ttl,
            Some(record_type),
        );

        match combine(content, combine(glue_ips, ttl)) {
            Ok((content, (glue_ips, ttl))) => {
                if ttl.has_warnings() {
                    debug!(
                        record_type = %record_type,
                        ttl = ttl.value,
                        warnings = ?ttl.warnings,
                        "record TTL outside recommended range"
                    );
                }
                Ok(Validated {
                    value: ValidatedRecordInput {
                        record_type,
                        content,
                        ttl: ttl.value,
                        glue_ips,
                    },
                    warnings: ttl.warnings,
                })
            }
            Err(errors) => {
                warn!(
                    record_type = %record_type,
                    error_count = errors.len(),
                    "record input failed validation"
                );
                Err(errors)
            }
        }
    }
}

/// Zips two field results, accumulating errors in form-field order.
fn combine<A, B>(
    a: Result<A, ValidationErrors>,
    b: Result<B, ValidationErrors>,
) -> Result<(A, B), ValidationErrors> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(errors), Ok(_)) | (Ok(_), Err(errors)) => Err(errors),
        (Err(mut first), Err(second)) => {
            first.merge(second);
            Err(first)
        }
    }
}
