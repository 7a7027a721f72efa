//! # Animal Shelter
//!
//! Deterministic allocation of shelter animals to two prospective adopters.
//!
//! ## Architecture
//!
//! - **Types**: Toy catalog, outcomes, allocation receipts
//! - **Engine**: The allocator and its `{ list, error }` response
//! - **Config**: Allocation policy (adoption cap)
//!
//! ## Rules
//!
//! 1. **Ordered Preferences**: An adopter qualifies when the animal's toys
//!    appear in their toys in the same relative order
//! 2. **Any-Order Animal**: Loco needs only one of its toys
//! 3. **No Sharing**: Two qualifying adopters send the animal to the shelter
//! 4. **Adoption Cap**: Nobody takes home more than three animals

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: catalog, Outcome, AllocationEntry, AllocationReceipt
pub mod types;

/// Allocation engine: Allocator and AllocationResponse
pub mod engine;

/// Allocation policy
pub mod config;

/// Validation errors
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::AllocationPolicy;
pub use engine::{AllocationResponse, Allocator};
pub use error::AllocationError;
pub use types::{AdopterId, AllocationEntry, AllocationReceipt, Outcome};
