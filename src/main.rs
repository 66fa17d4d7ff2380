use clap::Parser;
use recipe_api::cli::{self, Cli, Command};
use recipe_api::config::AppConfig;
use recipe_api::infrastructure::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    init_logging(&config.logging)?;

    match cli.command {
        Command::Serve => cli::serve::run(config).await,
        Command::CreateSuperuser(args) => cli::create_superuser::run(config, args).await,
    }
}
