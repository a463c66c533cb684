use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::*;
use nextcloud_admin::config::{Config, Profile};

#[derive(Args)]
pub struct ProfileCommands {
    #[command(subcommand)]
    pub command: ProfileSubcommands,
}

#[derive(Subcommand)]
pub enum ProfileSubcommands {
    /// Add or replace a connection profile
    Add {
        /// Name for this profile (e.g., "production")
        name: String,
        /// OCS base URI, e.g. https://cloud.example.com/ocs/
        #[arg(long)]
        base_uri: String,
        #[arg(long)]
        username: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
        /// Make this the current profile
        #[arg(long)]
        select: bool,
    },
    /// List profiles
    List,
    /// Select the current profile
    Select { name: String },
    /// Remove a profile
    Remove { name: String },
}

pub fn handle_profile_command(config: &mut Config, args: ProfileCommands) -> Result<()> {
    match args.command {
        ProfileSubcommands::Add {
            name,
            base_uri,
            username,
            password,
            select,
        } => {
            let password = match password {
                Some(password) => password,
                None => rpassword::prompt_password(format!("Password for {}: ", username))
                    .context("Failed to read password")?,
            };

            config.add_profile(
                name.clone(),
                Profile {
                    base_uri,
                    username,
                    password,
                },
            );
            if select {
                config.select_profile(&name)?;
            }
            config.save()?;

            println!("{} Profile '{}' added successfully", "✓".bright_green().bold(), name.bright_yellow().bold());
            if config.current_profile.as_deref() == Some(name.as_str()) {
                println!("{} Set '{}' as current profile", "✓".bright_green().bold(), name.bright_green().bold());
            }
        }
        ProfileSubcommands::List => list_profiles(config),
        ProfileSubcommands::Select { name } => {
            config.select_profile(&name)?;
            config.save()?;
            println!("{} Set '{}' as current profile", "✓".bright_green().bold(), name.bright_green().bold());
        }
        ProfileSubcommands::Remove { name } => {
            config.remove_profile(&name)?;
            config.save()?;
            println!("{} Profile '{}' removed successfully", "✓".bright_green().bold(), name.bright_yellow().bold());
        }
    }
    Ok(())
}

fn list_profiles(config: &Config) {
    if config.profiles.is_empty() {
        println!("  {}", "⚠️  No profiles configured".bright_yellow().bold());
        println!("  {}", "Use 'nextcloud-admin profile add' to create one.".dimmed());
        return;
    }

    println!();
    println!("  {}", "Configured profiles:".bright_white().bold());
    for (name, profile) in &config.profiles {
        let is_current = config.current_profile.as_deref() == Some(name.as_str());
        let marker = if is_current { "•".bright_green() } else { "•".dimmed() };
        println!(
            "  {} {} {}@{}",
            marker,
            name.bright_yellow().bold(),
            profile.username,
            profile.base_uri.dimmed()
        );
    }
    println!();
}
