//! Error types for lanlink.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LanlinkError {
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    #[error("File system error: {0}")]
    FileSystem(String),
}
