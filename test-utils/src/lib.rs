//! ExoBot Test Utils
//!
//! Shared testing utilities for the ExoBot dashboard backend. Provides
//! factory functions that build Serenity model objects from JSON, simulating
//! what Discord's API would return. Serenity's model structs are
//! `#[non_exhaustive]`, so deserializing JSON is the supported way to
//! construct them in tests.

pub mod serenity;
