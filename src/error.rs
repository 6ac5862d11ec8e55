use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum DocError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error("document has no title")]
    /// The document to format was constructed without a title
    MissingTitle,

    #[error("document \"{0}\" has no sections")]
    /// The document to format has an empty section list
    NoSections(String),
}
