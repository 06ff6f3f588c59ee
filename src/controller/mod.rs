//! HTTP request handlers.

pub mod auth;
pub mod guild;
pub mod settings;
