use anyhow::Result;
use clap::{Parser, Subcommand};
use sewna_catalog::{DesignerService, MatchView};
use sewna_common::{logger, AppConfig};
use std::path::PathBuf;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    match find_project_root().map(|root| root.join(".env")) {
        Some(env_path) if env_path.exists() => {
            dotenv::from_path(&env_path).ok();
        }
        _ => {
            dotenv::dotenv().ok();
        }
    }
}

#[derive(Parser)]
#[command(name = "sewna")]
#[command(about = "Sewna - match a style description against designer profiles", long_about = None)]
struct Cli {
    /// Catalog file (overrides CATALOG_PATH)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank designers against a free-text description
    Match {
        /// What the user is looking for
        description: String,

        /// Number of designers to return
        #[arg(long, short)]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Seed the sample designers if the catalog is empty
    Seed,

    /// Delete all designers and seed again
    Reset,

    /// List designers in the catalog
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    let mut config = AppConfig::from_env()?;
    if let Some(catalog) = cli.catalog {
        config.catalog_path = catalog;
    }
    config.validate()?;

    logger::setup_logging(&config.log_dir, &config.log_level)?;
    tracing::info!("Catalog: {}", config.catalog_path.display());

    let service = DesignerService::from_config(&config)?;

    match cli.command {
        Commands::Match {
            description,
            limit,
            json,
        } => {
            service.initialize_sample_designers().await?;

            let limit = limit.unwrap_or(config.match_limit);
            let matches = service.find_matching_designers(&description, limit).await?;
            let views: Vec<MatchView> = matches.iter().map(MatchView::from).collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else if views.is_empty() {
                println!("No designers in catalog");
            } else {
                for (rank, view) in views.iter().enumerate() {
                    println!(
                        "{}. {:<20} {:>3}%  {}",
                        rank + 1,
                        view.designer.name,
                        view.similarity,
                        view.designer.styles.join(", ")
                    );
                }
            }
        }
        Commands::Seed => {
            let created = service.initialize_sample_designers().await?;
            println!("Seeded {} designers", created);
        }
        Commands::Reset => {
            let created = service.reset_designers().await?;
            println!("Catalog reset, {} designers seeded", created);
        }
        Commands::List { json } => {
            service.initialize_sample_designers().await?;
            let designers = service.list_designers().await;

            if json {
                println!("{}", serde_json::to_string_pretty(&designers)?);
            } else {
                for designer in &designers {
                    println!("{:<20} {}", designer.name, designer.styles.join(", "));
                }
            }
        }
    }

    Ok(())
}
