//! Zonekeeper Application Layer
pub mod ports;
pub mod use_cases;

pub use ports::{RecommendedTtlValidation, TtlValidation};
pub use use_cases::{RecordInput, ValidateRecordInputUseCase, ValidatedRecordInput};
