use zonekeeper_domain::{RecordType, TtlInput, TtlValidator, ValidationResult};

/// TTL validation strategy used by the record-input use case. Injected as a
/// trait object so callers (and tests) can swap the warning policy without
/// touching the use case.
pub trait TtlValidation: Send + Sync {
    fn validate_ttl(
        &self,
        ttl: TtlInput,
        default_ttl: u32,
        record_type: Option<RecordType>,
    ) -> ValidationResult<u32>;
}

/// Production policy: recommended-range checks always on, with the record
/// type's own floor applied when one is known.
pub struct RecommendedTtlValidation;

impl TtlValidation for RecommendedTtlValidation {
    fn validate_ttl(
        &self,
        ttl: TtlInput,
        default_ttl: u32,
        record_type: Option<RecordType>,
    ) -> ValidationResult<u32> {
        match record_type {
            Some(rt) => TtlValidator::validate_for_record_type(ttl, default_ttl, rt),
            None => TtlValidator::validate(ttl, default_ttl, true),
        }
    }
}
