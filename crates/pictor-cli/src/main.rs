//! Pictor CLI — administrative commands for the image store.
//!
//! Set DATABASE_URL, and METADATA_ENCRYPTION_KEY when locations are
//! encrypted at rest.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use pictor_cli::init_tracing;
use pictor_core::{Config, LocationCipher};
use pictor_db::ImageLocationRepository;
use pictor_migrate::{migrate, Direction};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;

#[derive(Parser)]
#[command(name = "pictor", about = "Pictor image store admin CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite every stored location's encrypted credentials between the
    /// quoted and unquoted encodings
    MigrateCredentials {
        /// Target credential encoding
        #[arg(long, value_enum)]
        to: CredentialForm,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CredentialForm {
    /// Percent-encoded user and key
    Quoted,
    /// Literal user and key
    Unquoted,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::MigrateCredentials { to } => {
            let direction = match to {
                CredentialForm::Quoted => Direction::ToQuoted,
                CredentialForm::Unquoted => Direction::ToUnquoted,
            };

            let cipher = config
                .metadata_encryption_key
                .as_deref()
                .map(LocationCipher::from_base64)
                .transpose()
                .context("METADATA_ENCRYPTION_KEY must be a base64-encoded 32-byte key")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(&config.database_url)
                .await
                .context("Failed to connect to database")?;
            let records = ImageLocationRepository::new(pool);

            let report = migrate(direction, cipher.as_ref(), &records).await?;
            print_json(&report)?;
        }
    }

    Ok(())
}
