mod macros;

mod error;
mod key_path;
mod parser;
mod value_ext;

pub use error::ParseKeyPathError;
pub use key_path::KeyPath;
pub use value_ext::ValueExt;
