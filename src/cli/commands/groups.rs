use super::Outcome;
use anyhow::Result;
use clap::{Args, Subcommand};
use nextcloud_admin::api::GroupsClient;

#[derive(Args)]
pub struct GroupsCommands {
    #[command(subcommand)]
    pub command: GroupsSubcommands,
}

#[derive(Subcommand)]
pub enum GroupsSubcommands {
    /// List groups, optionally filtered by a search string
    List {
        #[arg(short, long)]
        search: Option<String>,
    },
    Create { group: String },
    /// List the members of a group
    Members { group: String },
    /// List the sub-admins of a group
    Subadmins { group: String },
    Delete { group: String },
}

pub async fn handle_groups_command(client: &GroupsClient, args: GroupsCommands) -> Result<Outcome> {
    let outcome = match args.command {
        GroupsSubcommands::List { search } => {
            Outcome::list(client.search_groups(search.as_deref()).await?, &["groups"])
        }
        GroupsSubcommands::Create { group } => Outcome::data(client.create_group(&group).await?),
        GroupsSubcommands::Members { group } => {
            Outcome::list(client.get_group_users(&group).await?, &["users"])
        }
        GroupsSubcommands::Subadmins { group } => {
            Outcome::list(client.get_group_sub_admins(&group).await?, &[])
        }
        GroupsSubcommands::Delete { group } => Outcome::data(client.delete_group(&group).await?),
    };
    Ok(outcome)
}
