pub mod apps;
pub mod federated;
pub mod groups;
pub mod profile;
pub mod shares;
pub mod users;

use super::app::{Cli, Commands};
use super::output::{print_envelope, Rendering};
use anyhow::{Context, Result};
use log::info;
use nextcloud_admin::api::{ClientManager, Envelope};
use nextcloud_admin::auth::Credentials;
use nextcloud_admin::config::Config;
use std::process::ExitCode;

/// A response and how to render it
pub struct Outcome {
    pub envelope: Envelope,
    pub rendering: Rendering,
}

impl Outcome {
    pub fn data(envelope: Envelope) -> Self {
        Self {
            envelope,
            rendering: Rendering::Data,
        }
    }

    pub fn list(envelope: Envelope, path: &'static [&'static str]) -> Self {
        Self {
            envelope,
            rendering: Rendering::List(path),
        }
    }
}

/// Run a parsed command line; a remote `failure` status exits with 1
pub async fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = Config::load()?;

    let outcome = match cli.command {
        Commands::Profile(args) => {
            profile::handle_profile_command(&mut config, args)?;
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Users(args) => {
            let manager = client_manager(&config, cli.profile.as_deref())?;
            users::handle_users_command(manager.users_client(), args).await?
        }
        Commands::Groups(args) => {
            let manager = client_manager(&config, cli.profile.as_deref())?;
            groups::handle_groups_command(manager.groups_client(), args).await?
        }
        Commands::Shares(args) => {
            let manager = client_manager(&config, cli.profile.as_deref())?;
            shares::handle_shares_command(manager.shares_client(), args).await?
        }
        Commands::Federated(args) => {
            let manager = client_manager(&config, cli.profile.as_deref())?;
            federated::handle_federated_command(manager.federated_shares_client(), args).await?
        }
        Commands::Apps(args) => {
            let manager = client_manager(&config, cli.profile.as_deref())?;
            apps::handle_apps_command(manager.apps_client(), args).await?
        }
    };

    print_envelope(&outcome.envelope, &outcome.rendering, cli.json)?;

    Ok(if outcome.envelope.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// `--profile` wins, then environment variables, then the current profile
fn client_manager(config: &Config, profile: Option<&str>) -> Result<ClientManager> {
    let credentials = match profile {
        Some(name) => config.get_profile(name)?.credentials(),
        None => {
            dotenvy::dotenv().ok();
            match Credentials::from_env() {
                Ok(credentials) => credentials,
                Err(_) => {
                    info!("No credentials in environment, using current profile");
                    config.get_current_profile()?.credentials()
                }
            }
        }
    };

    ClientManager::with_config(credentials, config.transport.to_transport_config())
        .context("Failed to create OCS client")
}
