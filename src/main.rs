mod model;
mod server;

use chrono::Duration;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, model::auth::Role, service::token::TokenService, startup,
};

#[derive(Parser)]
#[command(version, about = "CRUD API for company advertisements")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run migrations, seed baseline advertisements and serve the API (default)
    Serve,
    /// Print a signed bearer token for the given roles
    IssueToken {
        /// Subject recorded in the token
        #[arg(long)]
        subject: String,
        /// Role to grant; repeat for several roles
        #[arg(long = "role", required = true)]
        roles: Vec<Role>,
        /// Hours until the token expires
        #[arg(long, default_value_t = 24)]
        ttl_hours: i64,
    },
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let db = startup::connect_to_database(&config).await?;
            startup::seed_advertisements(&db).await?;

            tracing::info!("Starting server");

            startup::serve(&config, db).await?;
        }
        Command::IssueToken {
            subject,
            roles,
            ttl_hours,
        } => {
            let tokens = TokenService::new(&config.jwt_secret, config.jwt_issuer.clone());
            let token = tokens.issue(&subject, &roles, Duration::hours(ttl_hours))?;

            println!("{}", token);
        }
    }

    Ok(())
}
