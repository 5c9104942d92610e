#[derive(Debug, thiserror::Error, Clone, Eq, PartialEq)]
#[error("invalid path format: `{input}`, expected format like `[key1][key2]`")]
pub struct ParseKeyPathError {
    pub input: String,
}
