use std::fmt::{self, Display, Formatter};

use key_path::KeyPath;
use serde_json::Value;

/// A progress report emitted while a mutation walks a document.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationEvent {
    Created { path: KeyPath, key: String },
    Replaced { path: KeyPath, old: Value, new: Value },
    Added { key: String, value: Value },
    Removed { path: KeyPath },
    KeyNotFound { key: String },
    PathNotFound { path: KeyPath },
    FinalKeyNotFound { key: String },
}

impl Display for MutationEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MutationEvent::Created { path, key } => {
                write!(f, "Creating key '{}' in path {}", key, path)
            }
            MutationEvent::Replaced { path, old, new } => {
                write!(f, "Replacing {}={} with {}", path, old, new)
            }
            MutationEvent::Added { key, value } => {
                write!(f, "Adding new key {} with value {}", key, value)
            }
            MutationEvent::Removed { path } if path.is_single() => {
                write!(f, "Removing key '{}'", path.final_key())
            }
            MutationEvent::Removed { path } => write!(f, "Removing {}", path),
            MutationEvent::KeyNotFound { key } => {
                write!(f, "Key '{}' not found, nothing to remove", key)
            }
            MutationEvent::PathNotFound { path } => {
                write!(f, "Path '{}' does not exist, nothing to remove", path)
            }
            MutationEvent::FinalKeyNotFound { key } => {
                write!(f, "Final key '{}' not found, nothing to remove", key)
            }
        }
    }
}

pub trait EventSink {
    fn emit(&mut self, event: MutationEvent);
}

impl EventSink for Vec<MutationEvent> {
    fn emit(&mut self, event: MutationEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: MutationEvent) {
        (**self).emit(event);
    }
}
