use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

use crate::{parser::parse_key_path, ParseKeyPathError};

/// An ordered, non-empty sequence of object keys, written as `[a][b][c]`.
///
/// Segments are literal keys. A segment like `0` is never an array index.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct KeyPath(Vec<String>);

impl Display for KeyPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            f.write_str("[")?;
            f.write_str(segment)?;
            f.write_str("]")?;
        }

        Ok(())
    }
}

impl Debug for KeyPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for KeyPath {
    type Err = ParseKeyPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_path(s).map(Self)
    }
}

impl KeyPath {
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    /// Splits into the parent segments and the final key.
    pub fn split_last(&self) -> (&[String], &str) {
        match self.0.split_last() {
            Some((key, parents)) => (parents, key),
            None => unreachable!("key path is never empty"),
        }
    }

    #[inline]
    pub fn final_key(&self) -> &str {
        self.split_last().1
    }

    #[inline]
    pub fn is_single(&self) -> bool {
        self.0.len() == 1
    }
}
