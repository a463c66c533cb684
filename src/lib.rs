//! Client library for the Nextcloud OCS administration API.
//!
//! [`api::ClientManager`] is the entry point; [`config`] holds the profile
//! file used by the `nextcloud-admin` binary.

pub mod api;
pub mod auth;
pub mod config;
