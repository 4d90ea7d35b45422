use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode sensor frame: {0}")]
    DecodeError(String),

    #[error("Malformed sample data: {0}")]
    NormalizationError(String),

    #[error("Failed to write output file: {0}")]
    WriteError(String),

    #[error("Color lookup table misconfigured: {0}")]
    MappingError(String),

    #[error("Mosaic assembly failed: {0}")]
    AssemblyError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Invalid metadata: {0}")]
    MetadataError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
