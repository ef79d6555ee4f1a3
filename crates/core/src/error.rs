/// Failures raised while building or publishing the site.
///
/// An identifier with no registry entry is *not* one of these: lookups report absence
/// through [`crate::Resolution::NotFound`].
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid authored text: {0}")]
    Text(#[from] folio_types::TextError),
    #[error("duplicate content id: {0}")]
    DuplicateId(String),
    #[error("failed to render {page}: {message}")]
    Render { page: String, message: String },
    #[error("failed to create output directory: {0}")]
    OutputDirCreation(std::io::Error),
    #[error("failed to write page file: {0}")]
    FileWrite(std::io::Error),
}

pub type FolioResult<T> = std::result::Result<T, FolioError>;
