use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use configuration::{ConfigArgs, Settings, StorageBackend};
use std::net::SocketAddr;

mod telemetry;

/// The main entry point for the Charging API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the settings may come from elsewhere.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => {
            let mut settings = args.config.load().context("load settings")?;
            if let Some(bind) = args.bind {
                settings.server.host = bind.ip().to_string();
                settings.server.port = bind.port();
            }
            let _guard = telemetry::init_tracing(&settings.logging)?;
            log_settings(&settings);
            web_server::run_server(&settings).await
        }
        Commands::Migrate(args) => {
            let settings = args.config.load().context("load settings")?;
            let _guard = telemetry::init_tracing(&settings.logging)?;
            log_settings(&settings);
            handle_migrate(&settings).await
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A small CRUD API over the `Usuario` entity.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web host.
    Serve(ServeArgs),
    /// Create the database schema and exit.
    Migrate(MigrateArgs),
}

#[derive(Args)]
struct ServeArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Address to listen on (e.g. "127.0.0.1:5000"), overriding the settings.
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[derive(Args)]
struct MigrateArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

/// Reports where the settings came from, once the subscriber is installed.
fn log_settings(settings: &Settings) {
    if settings.connection_strings.from_database_url {
        tracing::info!("No DefaultConnection configured, using DATABASE_URL.");
    }
    tracing::debug!(
        backend = %settings.database.backend,
        bind = %settings.server.bind_address(),
        "Settings loaded."
    );
}

// ==============================================================================
// Migrate Command Logic
// ==============================================================================

async fn handle_migrate(settings: &Settings) -> anyhow::Result<()> {
    if settings.database.backend == StorageBackend::Memory {
        tracing::info!("The in-memory store has no schema; nothing to do.");
        return Ok(());
    }

    database::connect_and_migrate(settings)
        .await
        .context("connect to the database and create the schema")?;

    tracing::info!("Database schema is up to date.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_accepts_config_and_bind() {
        let cli = Cli::try_parse_from([
            "charging",
            "serve",
            "--config",
            "custom.toml",
            "--bind",
            "127.0.0.1:8080",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.config.config.as_deref(), Some(std::path::Path::new("custom.toml")));
                assert_eq!(args.bind, Some("127.0.0.1:8080".parse().unwrap()));
            }
            Commands::Migrate(_) => panic!("expected serve"),
        }
    }

    #[test]
    fn bad_bind_address_is_rejected() {
        assert!(Cli::try_parse_from(["charging", "serve", "--bind", "not-an-addr"]).is_err());
    }
}
