//! Zonekeeper Domain Layer
pub mod errors;
pub mod ip_address;
pub mod record_type;
pub mod ttl;
pub mod validation;

pub use errors::ValidationError;
pub use ip_address::IpAddressValidator;
pub use record_type::RecordType;
pub use ttl::{TtlInput, TtlValidator, MAX_TTL};
pub use validation::{Validated, ValidationErrors, ValidationResult};
