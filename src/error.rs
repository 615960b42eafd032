use std::path::PathBuf;
use thiserror::Error;

pub type SummaryResult<T> = Result<T, SummaryError>;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("file access error: {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("spreadsheet format error: {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        source: calamine::Error,
    },
}

impl SummaryError {
    /// Path of the file the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            SummaryError::FileAccess { path, .. } => path,
            SummaryError::Format { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_file_access_message_names_path() {
        let err = SummaryError::FileAccess {
            path: PathBuf::from("missing.xlsx"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };

        let msg = err.to_string();
        assert!(msg.starts_with("file access error"), "got: {}", msg);
        assert!(msg.contains("missing.xlsx"), "got: {}", msg);
    }

    #[test]
    fn test_format_message_names_path() {
        let err = SummaryError::Format {
            path: PathBuf::from("notes.txt"),
            source: calamine::Error::Msg("unsupported format"),
        };

        let msg = err.to_string();
        assert!(msg.starts_with("spreadsheet format error"), "got: {}", msg);
        assert!(msg.contains("notes.txt"), "got: {}", msg);
    }

    #[test]
    fn test_path_accessor() {
        let err = SummaryError::FileAccess {
            path: PathBuf::from("a/b.xlsx"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(err.path(), &PathBuf::from("a/b.xlsx"));
    }
}
