//! External data access: the Discord REST API and the on-disk settings store.

pub mod discord;
pub mod settings;
