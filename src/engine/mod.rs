//! Allocation engine module.
//!
//! ## Design Principles
//!
//! The allocator is designed for:
//!
//! 1. **Determinism**: Same input always produces same output
//! 2. **Fail-Fast Validation**: No partial results alongside an error
//! 3. **Synchronous Execution**: Animals are decided one after another
//! 4. **Call-Local State**: Adoption counters never outlive a call
//!
//! ## Example
//!
//! ```
//! use animal_shelter::engine::Allocator;
//!
//! let allocator = Allocator::new();
//! let response = allocator.respond(&["RATO", "BOLA"], &["RATO", "BOLA"], &["Rex"]);
//!
//! assert_eq!(response.list, Some(vec!["Rex - abrigo".to_string()]));
//! assert_eq!(response.error, None);
//! ```

pub mod allocator;
pub mod response;

pub use allocator::Allocator;
pub use response::AllocationResponse;
