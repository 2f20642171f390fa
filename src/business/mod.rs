//! Business logic layer
//!
//! This module provides the create/clear operations and the interactive
//! seeder that the shell and the CLI drive.

pub mod operations;
pub mod seeder;

pub use operations::SeedDefaults;
pub use seeder::{Seeder, SeedReport};
