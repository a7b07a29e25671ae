use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NpfError {
    #[error("Unknown sensor size: {given} (expected one of: {expected})")]
    UnknownSensorSize { given: String, expected: String },

    #[error("Unknown trail tolerance: {given} (expected one of: {expected})")]
    UnknownTrailTolerance { given: String, expected: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
