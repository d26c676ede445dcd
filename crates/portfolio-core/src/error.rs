//! Error types for the portfolio gallery

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for catalog and viewer operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// The viewer was asked to open an empty sequence
    #[error("Cannot open the viewer on an empty sequence")]
    EmptySequence,

    /// A start index does not address an image in the sequence
    #[error("Index {index} is out of range for a sequence of {len} images")]
    IndexOutOfRange { index: usize, len: usize },

    /// A pottery piece was declared without any images
    #[error("Pottery piece has no images: {0}")]
    EmptyPiece(String),

    /// An encoded asset URL did not decode to valid UTF-8
    #[error("Invalid percent-encoding: {0}")]
    InvalidEncoding(String),

    /// A catalog identifier has no matching file under the asset root
    #[error("Missing asset '{identifier}' (expected at {})", path.display())]
    MissingAsset { identifier: String, path: PathBuf },

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(
            format!("{}", err),
            "Index 4 is out of range for a sequence of 2 images"
        );
    }

    #[test]
    fn test_missing_asset_display() {
        let err = PortfolioError::MissingAsset {
            identifier: "Scan of roses.png".to_string(),
            path: PathBuf::from("assets/Scan of roses.png"),
        };
        assert_eq!(
            err.to_string(),
            "Missing asset 'Scan of roses.png' (expected at assets/Scan of roses.png)"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }
}
