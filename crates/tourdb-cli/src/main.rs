mod db;
mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tourdb-cli")]
#[command(about = "Tourist place search command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Places within a radius of a coordinate, nearest first
    Nearby {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Search radius in km (defaults to `TOURDB_SEARCH_DEFAULT_RADIUS_KM`)
        #[arg(long)]
        radius_km: Option<f64>,
        #[arg(long, default_value = "1")]
        page: i64,
        /// Caller id used to resolve bookmark status
        #[arg(long)]
        caller: Option<i64>,
        /// Print the page as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Places whose name, country, city or district contains a keyword
    Search {
        #[arg(long)]
        keyword: String,
        /// Reference latitude for distance tie-breaks
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Reference longitude for distance tie-breaks
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
        #[arg(long, default_value = "1")]
        page: i64,
        #[arg(long)]
        caller: Option<i64>,
        #[arg(long)]
        json: bool,
    },
    /// Apply pending database migrations
    Migrate,
    /// Load places from a JSON seed file
    Seed {
        #[arg(long)]
        file: std::path::PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("tourdb-cli ready; run with --help for commands");
        return Ok(());
    };

    let config = tourdb_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let pool_config = tourdb_db::PoolConfig::from_app_config(&config);
    let pool = tourdb_db::connect_pool(&config.database_url, pool_config).await?;
    tracing::debug!(command = ?command, "dispatching");

    match command {
        Commands::Nearby {
            lat,
            lng,
            radius_km,
            page,
            caller,
            json,
        } => {
            search::run_nearby(
                &pool,
                config.search,
                search::NearbyArgs {
                    lat,
                    lng,
                    radius_km,
                    page,
                    caller,
                },
                json,
            )
            .await
        }
        Commands::Search {
            keyword,
            lat,
            lng,
            page,
            caller,
            json,
        } => {
            search::run_keyword(
                &pool,
                config.search,
                search::KeywordArgs {
                    keyword,
                    lat,
                    lng,
                    page,
                    caller,
                },
                json,
            )
            .await
        }
        Commands::Migrate => db::run_migrate(&pool).await,
        Commands::Seed { file } => db::run_seed(&pool, &file).await,
    }
}

#[cfg(test)]
mod tests;
