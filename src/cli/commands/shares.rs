use super::Outcome;
use anyhow::Result;
use clap::{Args, Subcommand};
use nextcloud_admin::api::{Params, SharesClient};

#[derive(Args)]
pub struct SharesCommands {
    #[command(subcommand)]
    pub command: SharesSubcommands,
}

#[derive(Subcommand)]
pub enum SharesSubcommands {
    /// List all shares, or the shares of one path
    List {
        #[arg(long)]
        path: Option<String>,
        /// With --path: include reshares by other users
        #[arg(long, requires = "path")]
        reshares: bool,
        /// With --path on a folder: list the shares of its files
        #[arg(long, requires = "path")]
        subfiles: bool,
    },
    /// Show one share
    Get { id: String },
    /// Share a file or folder
    Create {
        path: String,
        /// 0 = user, 1 = group, 3 = public link, 6 = federated cloud share
        #[arg(long)]
        share_type: i64,
        /// User, group or cloud id to share with (not needed for public links)
        #[arg(long)]
        share_with: Option<String>,
        #[arg(long)]
        public_upload: bool,
        #[arg(long)]
        password: Option<String>,
        /// 1 = read, 2 = update, 4 = create, 8 = delete, 16 = share, 31 = all
        #[arg(long)]
        permissions: Option<i64>,
    },
    /// Update one attribute (permissions, password, publicUpload, expireDate)
    Update {
        id: String,
        field: String,
        value: String,
    },
    Delete { id: String },
}

pub async fn handle_shares_command(client: &SharesClient, args: SharesCommands) -> Result<Outcome> {
    let outcome = match args.command {
        SharesSubcommands::List {
            path: Some(path),
            reshares,
            subfiles,
        } => {
            let params = Params::new()
                .with_opt("reshares", reshares.then_some(true))
                .with_opt("subfiles", subfiles.then_some(true));
            Outcome::data(client.get_shares_from_file_or_folder(&path, params).await?)
        }
        SharesSubcommands::List { path: None, .. } => Outcome::data(client.get_all_shares().await?),
        SharesSubcommands::Get { id } => Outcome::data(client.get_share_information(&id).await?),
        SharesSubcommands::Create {
            path,
            share_type,
            share_with,
            public_upload,
            password,
            permissions,
        } => {
            let params = Params::new()
                .with("path", path)
                .with("shareType", share_type)
                .with_null("shareWith")
                .with_opt("shareWith", share_with)
                .with_opt("publicUpload", public_upload.then_some(true))
                .with_opt("password", password)
                .with_opt("permissions", permissions);
            Outcome::data(client.create_share(params).await?)
        }
        SharesSubcommands::Update { id, field, value } => {
            Outcome::data(client.update_share(&id, &field, value).await?)
        }
        SharesSubcommands::Delete { id } => Outcome::data(client.delete_share(&id).await?),
    };
    Ok(outcome)
}
