use colored::Colorize;

use gaia_reader_core::{DiskReader, DiskSettings, Resolution};
use gaia_reader_server::{ReaderServer, ServerConfig};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Resolve(args) => cmd_resolve(args, cli.format).await,
        Command::Serve(args) => cmd_serve(args).await,
    }
}

async fn cmd_resolve(args: ResolveArgs, format: OutputFormat) -> anyhow::Result<()> {
    let reader = DiskReader::open(DiskSettings::new(&args.root))?;
    let resolution = reader.resolve(&args.bucket, &args.path).await?;
    match format {
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "exists": resolution.exists(),
                "contentType": resolution.content_type(),
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Text => match &resolution {
            Resolution::Absent => {
                println!("{} {}/{}", "absent".red(), args.bucket.bold(), args.path)
            }
            Resolution::Present { content_type } => println!(
                "{} {}/{}  {}",
                "present".green(),
                args.bucket.bold(),
                args.path,
                content_type.cyan()
            ),
        },
    }
    Ok(())
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = match args.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig {
            bind_addr: args.bind.parse()?,
            disk: DiskSettings::new(&args.root),
        },
    };
    ReaderServer::new(config).serve().await?;
    Ok(())
}
