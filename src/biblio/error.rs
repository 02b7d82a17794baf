use thiserror::Error;

/// Failures of the outer shell (opening or reading a command script).
///
/// Command-level problems are never errors: they are reply lines carried in
/// a [`crate::commands::CmdResult`].
#[derive(Error, Debug)]
pub enum BiblioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BiblioError>;
