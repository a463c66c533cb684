
mod apps;
mod federated_shares;
mod groups;
mod manager;
mod transport;
