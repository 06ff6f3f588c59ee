//! Factories for Serenity model objects used in tests.

pub mod guild;
pub mod user;
