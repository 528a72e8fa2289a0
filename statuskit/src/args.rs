use std::path::PathBuf;

use clap::Parser;

/// statuskit showcase server
#[derive(Debug, Parser)]
#[command(name = "statuskit", about = "Serve the HTTP status and WebSocket close-code exception catalog")]
pub struct Args {
    /// Path to configuration file (defaults are used when it does not exist)
    #[arg(short, long, default_value = "statuskit.toml", env = "STATUSKIT_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "STATUSKIT_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
