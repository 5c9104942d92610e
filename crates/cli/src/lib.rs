mod config;
mod error;
mod files;
mod runner;

pub use config::EditConfig;
pub use error::EditError;
pub use runner::{edit_file, run};
