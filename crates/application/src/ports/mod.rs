mod ttl_validation;

pub use ttl_validation::{RecommendedTtlValidation, TtlValidation};
