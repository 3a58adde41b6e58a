//! Utility functions for display formatting and locale handling.
//!
//! - [`formatters`] - Date, skill level and technology list formatting
//! - [`locale`] - Display locale selection

pub mod formatters;
pub mod locale;
