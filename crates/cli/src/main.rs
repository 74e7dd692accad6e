mod commands;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use media_tracker_core::AppConfig;
use media_tracker_lookup::OmdbClient;
use media_tracker_service::{CollectionService, SearchService};
use media_tracker_storage::PgStorage;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "media-tracker")]
#[command(about = "Track favorite and to-watch movies and shows", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API and viewer
    Serve {
        /// Overrides PORT
        #[arg(short, long)]
        port: Option<u16>,
        /// Overrides HOST
        #[arg(short = 'H', long)]
        host: Option<String>,
    },
    /// Create the favorites and watchlist tables
    InitDb,
    /// Look a title up on OMDb
    Search { title: String },
    /// Print a saved list as JSON
    List {
        /// favorites or watchlist
        kind: String,
        /// Only entries of this type (movie, series, episode)
        #[arg(short = 't', long = "type")]
        media_type: Option<String>,
        /// Only entries whose year contains this text
        #[arg(short, long)]
        year: Option<String>,
    },
}

async fn collections(config: &AppConfig) -> Result<CollectionService> {
    let store = PgStorage::new(&config.database_url).await?;
    Ok(CollectionService::new(Arc::new(store)))
}

fn search_service(config: &AppConfig) -> Result<SearchService> {
    let client = OmdbClient::new(config.omdb_api_key.clone(), config.omdb_base_url.clone())?;
    Ok(SearchService::new(Arc::new(client)))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env();

    match cli.command {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            commands::serve::run(&config).await?;
        },
        Commands::InitDb => commands::admin::run_init_db(&config).await?,
        Commands::Search { title } => commands::query::run_search(&config, &title).await?,
        Commands::List { kind, media_type, year } => {
            commands::query::run_list(&config, &kind, media_type.as_deref(), year.as_deref())
                .await?;
        },
    }

    Ok(())
}
