use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use mutator::{MutateError, Mutation, MutationMode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[clap(author, version, about)]
#[clap(allow_negative_numbers = true)]
#[clap(group(ArgGroup::new("mode").required(true).args(&["add", "replace", "remove"])))]
pub struct EditConfig {
    /// Pattern for matching JSON files (glob pattern)
    pub(crate) file_pattern: String,
    /// Path in JSON file, format: "[key1][key2]..."
    pub(crate) json_path: String,
    /// New value to set at the specified path (not used with --remove)
    #[clap(required_unless_present = "remove")]
    pub(crate) new_value: Option<String>,
    /// Add keys if they don't exist
    #[clap(long)]
    pub(crate) add: bool,
    /// Only modify existing keys
    #[clap(long)]
    pub(crate) replace: bool,
    /// Remove the specified path
    #[clap(long)]
    pub(crate) remove: bool,
    /// Write the modified JSON here instead of overwriting the original files
    #[clap(long)]
    pub(crate) output_file: Option<PathBuf>,
}

impl EditConfig {
    pub fn new(
        file_pattern: impl Into<String>,
        json_path: impl Into<String>,
        mode: MutationMode,
    ) -> Self {
        Self {
            file_pattern: file_pattern.into(),
            json_path: json_path.into(),
            new_value: None,
            add: mode == MutationMode::Add,
            replace: mode == MutationMode::Replace,
            remove: mode == MutationMode::Remove,
            output_file: None,
        }
    }

    #[must_use]
    pub fn new_value(self, value: impl Into<String>) -> Self {
        Self {
            new_value: Some(value.into()),
            ..self
        }
    }

    #[must_use]
    pub fn output_file(self, path: impl Into<PathBuf>) -> Self {
        Self {
            output_file: Some(path.into()),
            ..self
        }
    }

    pub fn parse() -> Self {
        Parser::parse()
    }

    pub fn mode(&self) -> MutationMode {
        if self.remove {
            MutationMode::Remove
        } else if self.add {
            MutationMode::Add
        } else {
            MutationMode::Replace
        }
    }

    /// Coerces the raw new value for the selected mode.
    pub fn mutation(&self) -> Result<Mutation, MutateError> {
        Mutation::from_raw(self.mode(), self.new_value.as_deref())
    }
}
