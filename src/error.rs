use std::io;

use thiserror::Error;
use walkdir::Error as WalkDirError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildonomyError {
    #[error("File System error: {0}")]
    Io(String),
    #[error("Item Not Found: {0}")]
    NotFound(String),
    #[error("You do not have permission to access this resource")]
    PermissionDenied,
}

impl From<io::Error> for BuildonomyError {
    fn from(x: io::Error) -> Self {
        match x.kind() {
            io::ErrorKind::NotFound => BuildonomyError::NotFound(format!("{x}")),
            io::ErrorKind::PermissionDenied => BuildonomyError::PermissionDenied,
            _ => BuildonomyError::Io(format!("IOError: {}: {x}", x.kind())),
        }
    }
}

impl From<WalkDirError> for BuildonomyError {
    fn from(x: WalkDirError) -> Self {
        let path = x.path().map(|p| p.display().to_string());
        match x.into_io_error() {
            Some(io_error) => match (BuildonomyError::from(io_error), path) {
                (BuildonomyError::Io(msg), Some(path)) => {
                    BuildonomyError::Io(format!("{msg} (while walking {path})"))
                }
                (err, _) => err,
            },
            None => BuildonomyError::Io(format!(
                "Filesystem loop detected while walking {}",
                path.unwrap_or_default()
            )),
        }
    }
}
