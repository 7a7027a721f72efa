//! Allocation policy.
//!
//! The only tunable of an allocation round is how many animals a single
//! adopter may take home. The catalog itself is fixed reference data and is
//! not configurable.

/// Default maximum number of adoptions per adopter in one call
pub const DEFAULT_ADOPTION_CAP: usize = 3;

/// Per-call allocation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationPolicy {
    /// Maximum adoptions per adopter (inclusive)
    pub adoption_cap: usize,
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self {
            adoption_cap: DEFAULT_ADOPTION_CAP,
        }
    }
}

impl AllocationPolicy {
    /// Create a policy with a custom adoption cap
    pub fn with_cap(adoption_cap: usize) -> Self {
        Self { adoption_cap }
    }

    /// Whether an adopter with `adopted` animals may still adopt
    #[inline]
    pub fn has_capacity(&self, adopted: usize) -> bool {
        adopted < self.adoption_cap
    }
}
