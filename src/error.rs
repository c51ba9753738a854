//! Error taxonomy for the orchestration core.
//!
//! Every fallible operation in the core returns [`Result`]; callers branch
//! once on success/failure and either continue the chain or stop and report.
//! None of these errors is fatal to the process; a failed workflow leaves
//! the user able to retry.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network or HTTP failure; carries the raw status/body payload.
    #[error("{0}")]
    Transport(String),

    /// The external tool emitted an `Error:`-prefixed message.
    #[error("{0}")]
    Tool(String),

    /// An action was invoked without the session state it requires.
    #[error("{0}")]
    Precondition(String),

    /// A required local config file is missing or unreadable.
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// A local metadata/manifest file exists but cannot be parsed.
    #[error("{0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::Precondition(_))
    }
}
