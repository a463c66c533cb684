use super::Outcome;
use anyhow::Result;
use clap::{Args, Subcommand};
use nextcloud_admin::api::FederatedSharesClient;

#[derive(Args)]
pub struct FederatedCommands {
    #[command(subcommand)]
    pub command: FederatedSubcommands,
}

#[derive(Subcommand)]
pub enum FederatedSubcommands {
    /// List accepted federated shares
    List,
    Get { id: String },
    /// Locally remove an accepted federated share
    Delete { id: String },
    /// List shares waiting to be accepted
    Pending,
    Accept { id: String },
    Decline { id: String },
}

pub async fn handle_federated_command(
    client: &FederatedSharesClient,
    args: FederatedCommands,
) -> Result<Outcome> {
    let envelope = match args.command {
        FederatedSubcommands::List => client.list_accepted_cloud_shares().await?,
        FederatedSubcommands::Get { id } => client.get_cloud_share_information(&id).await?,
        FederatedSubcommands::Delete { id } => client.delete_cloud_share(&id).await?,
        FederatedSubcommands::Pending => client.list_pending_cloud_shares().await?,
        FederatedSubcommands::Accept { id } => client.accept_pending_cloud_share(&id).await?,
        FederatedSubcommands::Decline { id } => client.decline_pending_cloud_share(&id).await?,
    };
    Ok(Outcome::data(envelope))
}
