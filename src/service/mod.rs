//! Business logic between the HTTP handlers and the data layer.

pub mod guild;
pub mod oauth;
