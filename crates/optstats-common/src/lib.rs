//! # optstats-common
//!
//! Foundation layer for optstats: column identifiers, column sets, and errors.
//!
//! This crate has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (ColumnId, ColSet)
//! - [`utils`] - Error type and input validation helpers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{ColSet, ColumnId};
pub use utils::error::{Error, Result};
