use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gaia-reader",
    about = "Gaia storage hub — read-path resolver",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve one object reference against a storage root
    Resolve(ResolveArgs),
    /// Start the read-path HTTP server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Bucket identifier
    pub bucket: String,
    /// Object path relative to the bucket
    pub path: String,
    #[arg(long, default_value = ".")]
    pub root: String,
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1:8008")]
    pub bind: String,
    #[arg(long, default_value = ".")]
    pub root: String,
    /// TOML configuration file; takes precedence over --bind and --root
    #[arg(long)]
    pub config: Option<String>,
}
