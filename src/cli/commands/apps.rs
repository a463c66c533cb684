use super::Outcome;
use anyhow::Result;
use clap::{Args, Subcommand};
use nextcloud_admin::api::{AppFilter, AppsClient};

#[derive(Args)]
pub struct AppsCommands {
    #[command(subcommand)]
    pub command: AppsSubcommands,
}

#[derive(Subcommand)]
pub enum AppsSubcommands {
    /// List apps
    List {
        /// "enabled" or "disabled"
        #[arg(long)]
        filter: Option<AppFilter>,
    },
    /// Show an app's info
    Info { app: String },
    Enable { app: String },
    Disable { app: String },
}

pub async fn handle_apps_command(client: &AppsClient, args: AppsCommands) -> Result<Outcome> {
    let outcome = match args.command {
        AppsSubcommands::List { filter } => Outcome::list(client.get_apps(filter).await?, &["apps"]),
        AppsSubcommands::Info { app } => Outcome::data(client.get_app_info(&app).await?),
        AppsSubcommands::Enable { app } => Outcome::data(client.enable_app(&app).await?),
        AppsSubcommands::Disable { app } => Outcome::data(client.disable_app(&app).await?),
    };
    Ok(outcome)
}
