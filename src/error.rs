use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed grammar entry {0:?}: expected \"<type> <name>\"")]
    MalformedRule(String),
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn malformed<T>(entry: impl Into<String>) -> Result<T> {
        Err(Error::MalformedRule(entry.into()))
    }

    pub fn write(path: impl AsRef<Path>, source: std::io::Error) -> Error {
        Error::Write {
            path: path.as_ref().to_owned(),
            source,
        }
    }
}
