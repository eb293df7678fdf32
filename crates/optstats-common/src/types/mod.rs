//! Core type definitions for optstats.
//!
//! - Identifier types ([`ColumnId`])
//! - Column sets ([`ColSet`])

mod colset;
mod id;

pub use colset::ColSet;
pub use id::ColumnId;
