//! Create-superuser command

use clap::Args;
use tracing::{info, warn};

use crate::api::state::AppState;
use crate::config::AppConfig;
use crate::domain::User;
use crate::infrastructure::storage::StorageType;

#[derive(Debug, Args)]
pub struct CreateSuperuserArgs {
    /// Login email; the domain part is lowercased
    #[arg(long)]
    pub email: String,

    /// Password; omit to create an account that cannot log in
    #[arg(long, env = "SUPERUSER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Display name
    #[arg(long)]
    pub name: Option<String>,
}

/// Create the superuser against the configured storage
pub async fn run(config: AppConfig, args: CreateSuperuserArgs) -> anyhow::Result<()> {
    if is_in_memory(&config) {
        warn!("Storage backend is in-memory; the account will not outlive this process");
    }

    let state = crate::create_app_state_with_config(&config).await?;
    let user = create(&state, args).await?;

    info!(user_id = %user.id(), email = %user.email(), "Superuser created");
    Ok(())
}

fn is_in_memory(config: &AppConfig) -> bool {
    matches!(config.storage.backend.parse::<StorageType>(), Ok(StorageType::InMemory))
}

async fn create(state: &AppState, args: CreateSuperuserArgs) -> anyhow::Result<User> {
    let user = state
        .user_service
        .create_superuser(
            Some(&args.email),
            args.password.as_deref(),
            args.name.as_deref(),
        )
        .await?;

    Ok(user)
}
