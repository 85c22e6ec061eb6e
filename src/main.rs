//! Checks a server configuration file and prints the resulting config.

use std::path::PathBuf;

use clap::Parser;

use server_config::config::load_config;
use server_config::observability::init_logging;

#[derive(Parser)]
#[command(name = "server-config")]
#[command(about = "Validate a server configuration file", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    path: PathBuf,

    /// Print the configuration as JSON.
    #[arg(long)]
    json: bool,

    /// Log directive used when RUST_LOG is not set.
    #[arg(long, default_value = "server_config=info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let config = match load_config(&cli.path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(path = %cli.path.display(), error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{}", config);
    }

    Ok(())
}
