mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use panel_lib::{PanelClient, PanelConfig, TracingNotifier};

use crate::output::OutputFormat;

/// Default log levels for this binary and the library it drives.
const LOG_DIRECTIVES: [&str; 2] = ["panelctl=info", "panel_lib=info"];

#[derive(Parser)]
#[command(name = "panelctl")]
#[command(about = "Browse and manage estate panel resources")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API root URL (overrides config file and PANEL_API_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of a resource
    List(commands::list::ListArgs),
    /// Show a single entry by id
    Get(commands::get::GetArgs),
    /// Delete one or more entries by id
    Delete(commands::delete::DeleteArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVES[0].parse()?)
                .add_directive(LOG_DIRECTIVES[1].parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);

    let mut config = PanelConfig::load(cli.config.as_deref())?;
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    let client = PanelClient::from_config(&config, TracingNotifier)?;

    match &cli.command {
        Commands::List(args) => commands::list::run(args, &client, &format).await?,
        Commands::Get(args) => commands::get::run(args, &client, &format).await?,
        Commands::Delete(args) => commands::delete::run(args, &client, &format).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_directive_targets_this_binary() {
        let target = format!("{}=info", env!("CARGO_CRATE_NAME"));
        assert_eq!(LOG_DIRECTIVES[0], target);
    }
}
