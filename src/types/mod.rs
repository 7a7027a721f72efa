//! Core data types for the shelter allocation kernel
//!
//! ## Types
//!
//! - [`catalog`]: Static animal → toy preference table and toy vocabulary
//! - [`AdopterId`]: First or second prospective adopter
//! - [`Outcome`]: Adopted by someone, or stays at the shelter
//! - [`AllocationEntry`]: One animal with its outcome
//! - [`AllocationReceipt`]: Summary of an allocation round

pub mod catalog;
mod outcome;
mod receipt;

pub use outcome::{AdopterId, AllocationEntry, Outcome};
pub use receipt::AllocationReceipt;
