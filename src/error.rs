use std::io;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// SpectraError – everything a submission can fail with
// ---------------------------------------------------------------------------

/// Failures surfaced to the user as an alert. None of them are fatal: the
/// chart keeps whatever it showed before the failed action.
#[derive(Error, Debug)]
pub enum SpectraError {
    /// The picker must hand over exactly one wavelength and one reflectance file.
    #[error("expected exactly 2 files, got {got}")]
    WrongFileCount { got: usize },

    /// One of the two input files could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Parsed columns do not pair up.
    #[error("data mismatch: {wavelengths} wavelengths vs {reflectances} reflectances")]
    MismatchedLengths {
        wavelengths: usize,
        reflectances: usize,
    },

    /// No reflectance values to derive an axis domain from.
    #[error("no reflectance values to scale the axis")]
    EmptyInput,

    /// The background reader went away without reporting.
    #[error("file reader stopped before finishing")]
    WorkerDisconnected,
}

pub type Result<T> = std::result::Result<T, SpectraError>;

impl SpectraError {
    /// Text for the body of the alert dialog.
    pub fn user_message(&self) -> String {
        match self {
            SpectraError::WrongFileCount { got } => format!(
                "Please select exactly two files: one with wavelengths and one with reflectance ({got} selected)."
            ),
            SpectraError::Read { path, source } => {
                format!("Error processing files: could not read {}: {source}", path.display())
            }
            SpectraError::MismatchedLengths {
                wavelengths,
                reflectances,
            } => format!(
                "The data does not match: {wavelengths} wavelengths vs {reflectances} reflectances."
            ),
            SpectraError::EmptyInput => {
                "Error processing files: no reflectance values were found.".to_string()
            }
            SpectraError::WorkerDisconnected => {
                "Error processing files: the file reader stopped unexpectedly.".to_string()
            }
        }
    }

    /// Short heading for the alert window.
    pub fn title(&self) -> &'static str {
        match self {
            SpectraError::WrongFileCount { .. } => "Wrong File Count",
            SpectraError::Read { .. } | SpectraError::WorkerDisconnected => "Read Error",
            SpectraError::MismatchedLengths { .. } => "Mismatched Data",
            SpectraError::EmptyInput => "Empty Data",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_carries_counts() {
        let err = SpectraError::MismatchedLengths {
            wavelengths: 3,
            reflectances: 2,
        };
        assert_eq!(
            err.to_string(),
            "data mismatch: 3 wavelengths vs 2 reflectances"
        );
        assert!(err.user_message().contains("3 wavelengths vs 2 reflectances"));
        assert_eq!(err.title(), "Mismatched Data");
    }

    #[test]
    fn test_read_error_names_the_file() {
        let err = SpectraError::Read {
            path: PathBuf::from("reflectance.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("reflectance.txt"));
        assert_eq!(err.title(), "Read Error");
    }

    #[test]
    fn test_wrong_file_count() {
        let err = SpectraError::WrongFileCount { got: 3 };
        assert!(err.user_message().contains("exactly two files"));
        assert!(err.user_message().contains("3 selected"));
    }
}
