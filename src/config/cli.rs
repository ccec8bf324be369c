use clap::Parser;
use std::path::PathBuf;

/// Command-line flags. Every setting can also come from the environment.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "portfolio-api")]
#[command(about = "Backend API for a developer portfolio site")]
pub struct CliConfig {
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    #[arg(long, env = "DATABASE_NAME")]
    pub database_name: Option<String>,

    #[arg(long, env = "PORTFOLIO_CONFIG", help = "Optional TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}
