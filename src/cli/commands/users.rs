use super::Outcome;
use anyhow::Result;
use clap::{Args, Subcommand};
use nextcloud_admin::api::{Params, UsersClient};

#[derive(Args)]
pub struct UsersCommands {
    #[command(subcommand)]
    pub command: UsersSubcommands,
}

#[derive(Subcommand)]
pub enum UsersSubcommands {
    /// List users
    List {
        /// Only users matching this string
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
    },
    /// Show a user
    Get { user: String },
    /// Create a user
    Add {
        user: String,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        display_name: Option<String>,
        /// Quota, e.g. "5 GB"
        #[arg(long)]
        quota: Option<String>,
        #[arg(long)]
        language: Option<String>,
    },
    /// Set one field (email, quota, displayname, phone, address, website, twitter, password)
    Edit {
        user: String,
        field: String,
        value: String,
    },
    Disable { user: String },
    Enable { user: String },
    Delete { user: String },
    /// List the groups of a user
    Groups { user: String },
    AddToGroup { user: String, group: String },
    RemoveFromGroup { user: String, group: String },
    /// Make a user sub-admin of a group
    Promote { user: String, group: String },
    /// Revoke a user's sub-admin rights on a group
    Demote { user: String, group: String },
    /// List the groups a user is sub-admin of
    SubadminGroups { user: String },
    /// Resend the welcome email
    Welcome { user: String },
    /// List the fields the current user may edit
    Fields,
}

pub async fn handle_users_command(client: &UsersClient, args: UsersCommands) -> Result<Outcome> {
    let outcome = match args.command {
        UsersSubcommands::List { search, limit, offset } => {
            let params = Params::new()
                .with_opt("search", search)
                .with_opt("limit", limit)
                .with_opt("offset", offset);
            Outcome::list(client.get_users(params).await?, &["users"])
        }
        UsersSubcommands::Get { user } => Outcome::data(client.get_user(&user).await?),
        UsersSubcommands::Add {
            user,
            password,
            email,
            display_name,
            quota,
            language,
        } => {
            let options = Params::new()
                .with_opt("password", password)
                .with_opt("email", email)
                .with_opt("displayName", display_name)
                .with_opt("quota", quota)
                .with_opt("language", language);
            Outcome::data(client.add_user(&user, options).await?)
        }
        UsersSubcommands::Edit { user, field, value } => {
            Outcome::data(client.edit_user(&user, &field, value).await?)
        }
        UsersSubcommands::Disable { user } => Outcome::data(client.disable_user(&user).await?),
        UsersSubcommands::Enable { user } => Outcome::data(client.enable_user(&user).await?),
        UsersSubcommands::Delete { user } => Outcome::data(client.delete_user(&user).await?),
        UsersSubcommands::Groups { user } => {
            Outcome::list(client.get_user_groups(&user).await?, &["groups"])
        }
        UsersSubcommands::AddToGroup { user, group } => {
            Outcome::data(client.add_user_to_group(&user, &group).await?)
        }
        UsersSubcommands::RemoveFromGroup { user, group } => {
            Outcome::data(client.remove_user_from_group(&user, &group).await?)
        }
        UsersSubcommands::Promote { user, group } => {
            Outcome::data(client.promote_user_sub_admin_of_group(&user, &group).await?)
        }
        UsersSubcommands::Demote { user, group } => {
            Outcome::data(client.demote_user_sub_admin_of_group(&user, &group).await?)
        }
        UsersSubcommands::SubadminGroups { user } => {
            Outcome::list(client.get_user_sub_admin_groups(&user).await?, &[])
        }
        UsersSubcommands::Welcome { user } => {
            Outcome::data(client.resend_welcome_email(&user).await?)
        }
        UsersSubcommands::Fields => Outcome::list(client.get_user_fields().await?, &[]),
    };
    Ok(outcome)
}
