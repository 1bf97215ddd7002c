use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the configuration file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the cache key a route maps to.
    Key {
        route: String,
        /// Hostname used when host prefixing is enabled.
        #[arg(long)]
        host: Option<String>,
        /// Context values for postfix functions, as key=value.
        #[arg(long = "param")]
        params: Vec<String>,
    },
    /// Compare the stored version with the configured one, resetting on mismatch.
    CheckVersion,
    /// Remove every entry from the cache.
    Reset,
    /// Check that the cache backend answers.
    Ping,
}
