use std::fmt::{self, Display, Formatter};

use key_path::{KeyPath, ParseKeyPathError};

use crate::MutationMode;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum MissingKey {
    Parent(String),
    Final(String),
}

impl Display for MissingKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MissingKey::Parent(key) => write!(f, "key '{}'", key),
            MissingKey::Final(key) => write!(f, "final key '{}'", key),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MutateError {
    #[error(transparent)]
    InvalidPath(#[from] ParseKeyPathError),
    #[error("path '{path}' does not exist, {missing} is missing")]
    PathNotFound { path: KeyPath, missing: MissingKey },
    #[error("cannot look up key '{key}' in path '{path}': value is not an object")]
    TypeMismatch { path: KeyPath, key: String },
    #[error("new value is required when using --{mode}")]
    MissingValue { mode: MutationMode },
}
