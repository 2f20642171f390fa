//! Utility functions

pub mod common;

pub use common::{format_list_for_display, trim_line_ending, with_db_extension};
