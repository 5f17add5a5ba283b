mod report;
mod scrape;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "wbscan-cli")]
#[command(about = "Marketplace category scraper and product store")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape one catalog category and store its products
    Scrape {
        /// Category page URL as shown in the browser
        #[arg(long)]
        url: String,

        /// Lower price bound in roubles
        #[arg(long, default_value_t = 1)]
        low_price: u64,

        /// Upper price bound in roubles
        #[arg(long, default_value_t = 1_000_000)]
        top_price: u64,

        /// Only products with at least this discount percent
        #[arg(long)]
        discount: Option<u32>,
    },
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// Print aggregate statistics over stored products
    Report {
        /// Number of brands listed in the top-brands table
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(i64).range(1..))]
        top_brands: i64,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Apply pending migrations
    Migrate,
    /// Check that the database is reachable
    Ping,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("wbscan-cli: no command given; see --help");
        return Ok(());
    };

    // Reject bad filters before any network or database I/O.
    let filter = match &command {
        Commands::Scrape {
            low_price,
            top_price,
            discount,
            ..
        } => Some(scrape::build_filter(*low_price, *top_price, *discount)?),
        _ => None,
    };

    let config = wbscan_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool_config = wbscan_db::PoolConfig::from_app_config(&config);
    let pool = wbscan_db::connect_pool(&config.database, pool_config).await?;

    let result = run_command(&pool, &config, command, filter).await;

    // The pool is released on success and on failure alike.
    pool.close().await;
    result
}

async fn run_command(
    pool: &sqlx::PgPool,
    config: &wbscan_core::AppConfig,
    command: Commands,
    filter: Option<wbscan_core::ScrapeFilter>,
) -> anyhow::Result<()> {
    match command {
        Commands::Scrape { url, .. } => {
            let filter = filter.unwrap_or_default();
            let summary = scrape::run_scrape(pool, config, &url, &filter).await?;
            println!("{}", scrape::format_summary(&summary));
        }
        Commands::Db {
            command: DbCommands::Migrate,
        } => {
            let applied = wbscan_db::run_migrations(pool).await?;
            println!("applied {applied} migration(s)");
        }
        Commands::Db {
            command: DbCommands::Ping,
        } => {
            wbscan_db::ping(pool).await?;
            println!("database is reachable");
        }
        Commands::Report { top_brands } => {
            report::run_report(pool, top_brands).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
