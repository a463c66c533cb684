use super::commands::apps::AppsCommands;
use super::commands::federated::FederatedCommands;
use super::commands::groups::GroupsCommands;
use super::commands::profile::ProfileCommands;
use super::commands::shares::SharesCommands;
use super::commands::users::UsersCommands;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nextcloud-admin")]
#[command(about = "A CLI tool for the Nextcloud OCS administration API")]
#[command(version)]
pub struct Cli {
    /// Profile to use instead of environment variables or the current profile
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Print the response envelope as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// User provisioning
    Users(UsersCommands),
    /// Group provisioning
    Groups(GroupsCommands),
    /// File and folder shares
    Shares(SharesCommands),
    /// Federated cloud shares received from other instances
    Federated(FederatedCommands),
    /// App management
    Apps(AppsCommands),
    /// Connection profile management
    Profile(ProfileCommands),
}
