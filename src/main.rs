use std::process::ExitCode;

use cli::{run, EditConfig};

fn main() -> ExitCode {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = EditConfig::parse();
    match run(&config) {
        Ok(_) => {
            tracing::info!("All files processed successfully.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("Process failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
