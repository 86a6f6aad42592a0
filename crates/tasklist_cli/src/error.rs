use std::error::Error;
use std::fmt::{Display, Formatter};
use tasklist_core::{KvError, StoreError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub enum CliError {
    Io(std::io::Error),
    Kv(KvError),
    Store(StoreError),
    UnknownRoute(String),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Kv(err) => write!(f, "failed to open task storage: {err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::UnknownRoute(path) => write!(f, "unknown route: {path}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Kv(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::UnknownRoute(_) => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<KvError> for CliError {
    fn from(value: KvError) -> Self {
        Self::Kv(value)
    }
}

impl From<StoreError> for CliError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
