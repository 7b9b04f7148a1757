use genesis_rom_convert::{ConvertError, FileOperationError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("No input file given.")]
    NoInput,
    #[error("Invalid source format \"{0}\". Valid formats are: bin, md, smd")]
    InvalidSourceFormat(String),
    #[error("Invalid target format \"{0}\". Valid formats are: bin, md, smd")]
    InvalidTargetFormat(String),
    #[error("Unable to open input file \"{}\": {source}", .path.display())]
    Load {
        path: PathBuf,
        source: FileOperationError,
    },
    #[error("Conversion not possible: {0}")]
    Convert(#[from] ConvertError),
    #[error("{0}")]
    Save(FileOperationError),
}

impl CliError {
    /// Process exit code reported for this error. Every kind of failure has its own code.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::NoInput => 1,
            CliError::InvalidSourceFormat(_) => 2,
            CliError::InvalidTargetFormat(_) => 3,
            CliError::Load { .. } => 4,
            CliError::Convert(ConvertError::UnsupportedConversion { .. }) => 5,
            CliError::Save(FileOperationError::SizeDiscrepancy { .. }) => 7,
            CliError::Save(_) => 6,
            CliError::Convert(ConvertError::MalformedInput { .. }) => 8,
            CliError::Convert(ConvertError::UnsupportedFormat { .. }) => 9,
        }
    }
}
