mod config;
mod http;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use migration::{Migrator, MigratorTrait};
use platform_db::{DbPool, connect};
use platform_obs::{ObsConfig, init_tracing, shutdown_tracing};
use products_hr::{HrState, seed::seed_demo};
use tracing::{info, warn};

use crate::{
    config::AppConfig,
    http::{AppState, ServeConfig},
};

#[derive(Parser, Debug)]
#[command(name = "hr-server", version, about = "Employee and department directory")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server.
    Serve(ServeCommand),
    /// Manage database migrations.
    #[command(subcommand)]
    Migrate(MigrateCommand),
    /// Insert demo data into an empty database.
    Seed,
}

#[derive(Subcommand, Debug)]
enum MigrateCommand {
    /// Apply pending migrations.
    Up,
    /// Rollback the most recent migration.
    Down,
    /// List pending migrations.
    Status,
}

#[derive(Args, Debug)]
struct ServeCommand {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: std::net::IpAddr,
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,
    #[arg(long, help = "Allow starting even when migrations are pending")]
    allow_dirty: bool,
}

impl From<&ServeCommand> for ServeConfig {
    fn from(value: &ServeCommand) -> Self {
        ServeConfig::new(value.host, value.port)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(ObsConfig::from_env()?)?;
    let cli = Cli::parse();
    let result = run(cli).await;
    let flushed = shutdown_tracing();
    result.and(flushed)
}

async fn run(cli: Cli) -> Result<()> {
    let config = Arc::new(AppConfig::load()?);
    let pool = connect(&config.database)
        .await
        .context("failed to open database pool")?;
    match cli.command {
        Command::Serve(cmd) => run_server(cmd, pool, config).await,
        Command::Migrate(action) => match action {
            MigrateCommand::Up => migrate_up(&pool).await,
            MigrateCommand::Down => migrate_down(&pool).await,
            MigrateCommand::Status => migrate_status(&pool).await,
        },
        Command::Seed => run_seed(pool).await,
    }
}

async fn run_server(cmd: ServeCommand, pool: DbPool, config: Arc<AppConfig>) -> Result<()> {
    ensure_migrations(&pool, config.auto_migrate, cmd.allow_dirty).await?;
    let state = AppState { pool, config };
    http::serve((&cmd).into(), state).await
}

async fn ensure_migrations(pool: &DbPool, auto_migrate: bool, allow_dirty: bool) -> Result<()> {
    let pending = Migrator::get_pending_migrations(pool).await?;
    if pending.is_empty() {
        return Ok(());
    }
    if auto_migrate {
        info!(count = pending.len(), "applying pending migrations");
        Migrator::up(pool, None).await?;
        return Ok(());
    }
    if !allow_dirty {
        anyhow::bail!(
            "pending migrations detected; run `hr-server migrate up`, set AUTO_MIGRATE=1 or pass --allow-dirty"
        );
    }
    warn!(count = pending.len(), "starting with pending migrations");
    Ok(())
}

async fn migrate_up(pool: &DbPool) -> Result<()> {
    Migrator::up(pool, None).await?;
    info!("database migrations applied");
    Ok(())
}

async fn migrate_down(pool: &DbPool) -> Result<()> {
    Migrator::down(pool, Some(1)).await?;
    info!("most recent migration rolled back");
    Ok(())
}

async fn migrate_status(pool: &DbPool) -> Result<()> {
    let pending = Migrator::get_pending_migrations(pool).await?;
    if pending.is_empty() {
        info!("schema is up to date");
    }
    for migration in pending {
        info!(name = migration.name(), "pending migration");
    }
    Ok(())
}

async fn run_seed(pool: DbPool) -> Result<()> {
    ensure_migrations(&pool, true, false).await?;
    match seed_demo(&HrState::new(pool)).await? {
        Some(seeded) => info!(
            department = ?seeded.department.id,
            employee = ?seeded.employee.id,
            "seed complete"
        ),
        None => info!("nothing to seed"),
    }
    Ok(())
}
