use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input decoding error: {message}")]
    DecodeError { message: String },

    #[error("Scan error: {message}")]
    ProcessingError { message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ScanError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScanError::IoError(_) => {
                "Check that the input file exists and is readable (see --input)"
            }
            ScanError::SerializationError(_) => {
                "Check that the report path is writable (see --report)"
            }
            ScanError::DecodeError { .. } => "The input file must be valid UTF-8 text",
            ScanError::ProcessingError { .. } => {
                "The input contains operands or totals beyond the supported integer range"
            }
            ScanError::InvalidConfigValueError { .. } => {
                "Fix the flagged option and run again (see --help)"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ScanError::InvalidConfigValueError { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
