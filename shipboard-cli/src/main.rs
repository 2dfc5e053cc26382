use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shipboard_core::{
    load_page, Config, OutputFormat, Page, PageKind, ShipBrokerHttpClient, Table, TableSink,
    ToRow,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "shipboard", version, about = "Vessel and cargo boards from the ship broker API")]
struct Cli {
    /// API base URL, e.g. http://localhost:8000
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Config file (defaults to ./shipboard.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load the boards of a page and print it.
    Show {
        /// index, vessels or cargoes
        #[arg(long)]
        page: Option<PageKind>,

        /// html or text
        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// Print a single vessel as a board row.
    Vessel { id: i64 },
    /// Print a single cargo as a board row.
    Cargo { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::load_from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            config.apply_env_overrides();
            config
        }
        None => Config::load()?,
    };
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }

    let client = ShipBrokerHttpClient::with_timeout(&config.api.base_url, config.api.timeout())
        .context("building HTTP client")?;

    match cli.command {
        Commands::Show { page, format } => {
            let kind = page.unwrap_or(config.board.default_page);
            let format = format.unwrap_or(config.board.format);
            info!("🔌 Loading {} page from {}", kind, client.base_url());

            let mut page = Page::layout(
                kind,
                &config.board.vessels_table_id,
                &config.board.cargoes_table_id,
            );
            // Loader failures are logged by the loaders and do not change the exit status.
            let report = load_page(&client, &mut page).await;
            info!("📊 {} rows loaded ({:?})", report.total_rows(), report);

            print!("{}", page.render(format));
        }
        Commands::Vessel { id } => {
            let vessel = client
                .get_vessel(id)
                .await
                .with_context(|| format!("fetching vessel {}", id))?;
            print_single(&vessel, &config.board.vessels_table_id, config.board.format)?;
        }
        Commands::Cargo { id } => {
            let cargo = client
                .get_cargo(id)
                .await
                .with_context(|| format!("fetching cargo {}", id))?;
            print_single(&cargo, &config.board.cargoes_table_id, config.board.format)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so stdout carries only the rendered board.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_single<R: ToRow>(record: &R, table_id: &str, format: OutputFormat) -> Result<()> {
    let mut table = Table::new(table_id, R::HEADERS);
    table.append_row(record.to_row())?;
    print!("{}", table.render(format));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_show() {
        let cli = Cli::parse_from([
            "shipboard",
            "--base-url",
            "http://broker:8000",
            "show",
            "--page",
            "vessels",
            "--format",
            "text",
        ]);
        assert_eq!(cli.base_url.as_deref(), Some("http://broker:8000"));
        match cli.command {
            Commands::Show { page, format } => {
                assert_eq!(page, Some(PageKind::Vessels));
                assert_eq!(format, Some(OutputFormat::Text));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_detail_lookup() {
        let cli = Cli::parse_from(["shipboard", "cargo", "42", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Cargo { id: 42 }));
    }

    #[test]
    fn test_cli_rejects_unknown_page() {
        let result = Cli::try_parse_from(["shipboard", "show", "--page", "auctions"]);
        assert!(result.is_err());
    }
}
