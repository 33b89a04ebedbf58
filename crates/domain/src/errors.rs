use thiserror::Error;

use crate::ttl::MAX_TTL;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("'{0}' is not a valid IPv4 address")]
    InvalidIpv4(String),

    #[error("'{0}' is not a valid IPv6 address")]
    InvalidIpv6(String),

    #[error("'{0}' is not a valid IPv4 or IPv6 address")]
    InvalidIpAddress(String),

    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),

    #[error("TTL must be a number, got '{0}'")]
    NonNumericTtl(String),

    #[error("TTL cannot be negative, got {0}")]
    NegativeTtl(i64),

    #[error("TTL cannot exceed {MAX_TTL} seconds")]
    TtlExceedsMaximum,
}
