use std::fmt::{self, Display, Formatter};

use serde_json::Value;

use crate::{coerce_value, MutateError};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MutationMode {
    /// Set the value, creating missing parent objects.
    Add,
    /// Set the value only if the whole path already exists.
    Replace,
    /// Delete the final key; a missing path is a no-op.
    Remove,
}

impl Display for MutationMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MutationMode::Add => "add",
            MutationMode::Replace => "replace",
            MutationMode::Remove => "remove",
        })
    }
}

/// A mutation mode together with the value it writes.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Add { value: Value },
    Replace { value: Value },
    Remove,
}

impl Mutation {
    /// Builds a mutation from a raw command line value.
    ///
    /// The raw value is coerced for `Add` and `Replace` and ignored for `Remove`.
    pub fn from_raw(mode: MutationMode, raw: Option<&str>) -> Result<Self, MutateError> {
        match (mode, raw) {
            (MutationMode::Remove, _) => Ok(Mutation::Remove),
            (MutationMode::Add, Some(raw)) => Ok(Mutation::Add {
                value: coerce_value(raw),
            }),
            (MutationMode::Replace, Some(raw)) => Ok(Mutation::Replace {
                value: coerce_value(raw),
            }),
            (mode, None) => Err(MutateError::MissingValue { mode }),
        }
    }

    pub fn mode(&self) -> MutationMode {
        match self {
            Mutation::Add { .. } => MutationMode::Add,
            Mutation::Replace { .. } => MutationMode::Replace,
            Mutation::Remove => MutationMode::Remove,
        }
    }
}
