//! API data transfer objects.

pub mod api;
