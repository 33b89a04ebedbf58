mod validate_record_input;

pub use validate_record_input::{RecordInput, ValidateRecordInputUseCase, ValidatedRecordInput};
