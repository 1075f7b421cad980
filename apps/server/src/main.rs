use anyhow::Context;
use clap::{Parser, Subcommand};
use roster_backend_runtime::{telemetry, BackendServices};
use roster_config::load as load_config;
use roster_gateway::{build_router, GatewayState, JwtConfig};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "roster-backend")]
#[command(about = "Roster backend server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server().await,
        Commands::Migrate => run_migrations().await,
    }
}

async fn run_server() -> anyhow::Result<()> {
    telemetry::init_tracing().context("failed to initialise tracing")?;

    info!("starting Roster backend");

    let config = load_config().context("failed to load configuration")?;

    let services = BackendServices::initialise(&config)
        .await
        .context("failed to initialise backend services")?;

    let jwt_config = JwtConfig {
        secret: config
            .auth
            .secret
            .clone()
            .context("jwt signing key is not configured")?,
        issuer: config.auth.issuer.clone(),
        audience: config.auth.audience.clone(),
    };

    let state = GatewayState::new(services.db_pool.clone(), jwt_config);
    let app = build_router(state);

    let address = format!("{}:{}", config.http.address, config.http.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind http listener on {address}"))?;

    info!(%address, "http server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(roster_backend_runtime::shutdown_signal())
        .await
        .context("http server error")?;

    info!("backend shut down");
    Ok(())
}

async fn run_migrations() -> anyhow::Result<()> {
    telemetry::init_tracing().context("failed to initialise tracing")?;

    let config = load_config().context("failed to load configuration")?;

    // Initialisation connects and applies migrations in one step.
    BackendServices::initialise(&config)
        .await
        .context("failed to apply migrations")?;

    info!(database = %config.database.url, "migrations applied");
    Ok(())
}
