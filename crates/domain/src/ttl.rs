use crate::errors::ValidationError;
use crate::record_type::RecordType;
use crate::validation::{Validated, ValidationResult};

/// Protocol maximum: the DNS TTL field is a 32-bit value capped at 2^31 - 1.
pub const MAX_TTL: i64 = 2_147_483_647;

/// General recommended operating range, in seconds.
pub const RECOMMENDED_MIN_TTL: u32 = 300;
pub const RECOMMENDED_MAX_TTL: u32 = 604_800;

/// SOA records keep a stricter floor than the general minimum.
pub const SOA_RECOMMENDED_MIN_TTL: u32 = 3_600;

/// A TTL as it arrives from the record form: already numeric, free text,
/// or left blank. Normalization to a canonical integer happens in one place
/// instead of ad-hoc coercion at each call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TtlInput {
    Seconds(i64),
    Text(String),
    Empty,
}

impl TtlInput {
    /// Resolves the effective TTL: blank input falls back to `default_ttl`,
    /// text is parsed, and the result is range-checked against the protocol
    /// maximum.
    fn normalize(&self, default_ttl: u32) -> Result<u32, ValidationError> {
        match self {
            TtlInput::Empty => Ok(default_ttl),
            TtlInput::Seconds(n) => Self::check_range(*n),
            TtlInput::Text(s) => {
                let text = s.trim();
                // blank text means the field was left empty, however the
                // input was constructed
                if text.is_empty() {
                    return Ok(default_ttl);
                }
                match text.parse::<i64>() {
                    Ok(n) => Self::check_range(n),
                    // digits-only overflow is a magnitude problem, not a syntax one
                    Err(_) if Self::is_unsigned_digits(text) => {
                        Err(ValidationError::TtlExceedsMaximum)
                    }
                    Err(_) => Err(ValidationError::NonNumericTtl(text.to_string())),
                }
            }
        }
    }

    fn check_range(value: i64) -> Result<u32, ValidationError> {
        if value < 0 {
            Err(ValidationError::NegativeTtl(value))
        } else if value > MAX_TTL {
            Err(ValidationError::TtlExceedsMaximum)
        } else {
            Ok(value as u32)
        }
    }

    fn is_unsigned_digits(text: &str) -> bool {
        !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
    }
}

impl From<i64> for TtlInput {
    fn from(value: i64) -> Self {
        TtlInput::Seconds(value)
    }
}

impl From<&str> for TtlInput {
    fn from(value: &str) -> Self {
        if value.trim().is_empty() {
            TtlInput::Empty
        } else {
            TtlInput::Text(value.to_string())
        }
    }
}

impl From<Option<&str>> for TtlInput {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(s) => TtlInput::from(s),
            None => TtlInput::Empty,
        }
    }
}

/// Validates a TTL field against the protocol range and, optionally, the
/// recommended operating range. Out-of-recommendation values still validate:
/// they come back as Success with an advisory warning attached.
pub struct TtlValidator;

impl TtlValidator {
    pub fn validate(
        ttl: TtlInput,
        default_ttl: u32,
        check_recommended: bool,
    ) -> ValidationResult<u32> {
        Self::run(ttl, default_ttl, check_recommended, None)
    }

    /// Recommended-range validation with the record type's own floor applied.
    pub fn validate_for_record_type(
        ttl: TtlInput,
        default_ttl: u32,
        record_type: RecordType,
    ) -> ValidationResult<u32> {
        Self::run(ttl, default_ttl, true, Some(record_type))
    }

    fn run(
        ttl: TtlInput,
        default_ttl: u32,
        check_recommended: bool,
        record_type: Option<RecordType>,
    ) -> ValidationResult<u32> {
        let value = ttl.normalize(default_ttl)?;

        if !check_recommended {
            return Ok(Validated::new(value));
        }

        let mut warning = None;
        if value < RECOMMENDED_MIN_TTL {
            warning = Some(format!(
                "TTL value is below the recommended minimum of {RECOMMENDED_MIN_TTL} seconds"
            ));
        } else if value > RECOMMENDED_MAX_TTL {
            warning = Some(format!(
                "TTL value is above the recommended maximum of {RECOMMENDED_MAX_TTL} seconds"
            ));
        }

        // The record-type floor takes precedence over the general low warning;
        // at most one warning is attached.
        if let Some(rt) = record_type {
            if let Some(floor) = rt.recommended_min_ttl() {
                if value < floor {
                    warning = Some(format!(
                        "{rt} record TTL is below the recommended minimum of {floor} seconds"
                    ));
                }
            }
        }

        Ok(match warning {
            Some(w) => Validated::with_warning(value, w),
            None => Validated::new(value),
        })
    }
}
