//! Error types for DOCX generation

use thiserror::Error;

/// Errors that can occur while building or writing a document package
#[derive(Error, Debug)]
pub enum DocxError {
    /// A required value is missing or inconsistent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Content violates a structural invariant
    #[error("Structural error: {0}")]
    Structural(#[from] StructuralError),

    /// Image bytes could not be decoded
    #[error("Image decode error: {0}")]
    ImageDecode(String),

    /// Image format is neither PNG nor JPEG
    #[error("Unsupported image format: {0}")]
    UnsupportedImage(String),

    /// Error reading or writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error writing the ZIP archive
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Invalid configuration file
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// An error annotated with the operation that failed
    #[error("{operation} failed")]
    Context {
        operation: String,
        #[source]
        source: Box<DocxError>,
    },
}

/// Structural invariant violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// A table row occupies more grid columns than the table declares
    #[error("row {row} occupies {required} grid columns but the table grid has {grid}")]
    GridTooNarrow {
        grid: usize,
        required: usize,
        row: usize,
    },

    /// List nesting used up the recursion budget
    #[error("list recursion limit of {limit} exceeded")]
    RecursionLimit { limit: usize },
}

impl DocxError {
    /// Innermost error, skipping every `Context` wrapper
    pub fn root_cause(&self) -> &DocxError {
        match self {
            Self::Context { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Structural error at the root of the chain, if any
    pub fn structural(&self) -> Option<&StructuralError> {
        match self.root_cause() {
            Self::Structural(err) => Some(err),
            _ => None,
        }
    }
}

impl From<image::ImageError> for DocxError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::Unsupported(unsupported) => {
                Self::UnsupportedImage(unsupported.to_string())
            }
            other => Self::ImageDecode(other.to_string()),
        }
    }
}

/// Result type for DOCX operations
pub type Result<T> = std::result::Result<T, DocxError>;

/// Attach the failing operation's name to an error
pub trait ResultExt<T> {
    fn context(self, operation: &str) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<DocxError>,
{
    fn context(self, operation: &str) -> Result<T> {
        self.map_err(|err| DocxError::Context {
            operation: operation.to_string(),
            source: Box::new(err.into()),
        })
    }
}
