//! Allocation outcomes.
//!
//! An [`AllocationEntry`] pairs an animal with where it ends up: with one of
//! the two adopters, or back at the shelter.
//!
//! ## Text Form
//!
//! Entries render as `"<animal> - <outcome>"`:
//!
//! ```
//! use animal_shelter::types::{AdopterId, AllocationEntry, Outcome};
//!
//! let entry = AllocationEntry::new("Rex", Outcome::Adopter(AdopterId::First));
//! assert_eq!(entry.to_string(), "Rex - pessoa 1");
//!
//! let entry = AllocationEntry::new("Mimi", Outcome::Shelter);
//! assert_eq!(entry.to_string(), "Mimi - abrigo");
//! ```

use std::fmt;

/// Which of the two prospective adopters
///
/// Represented as u8 index:
/// - First = 0
/// - Second = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AdopterId {
    /// Adopter 0, rendered as "pessoa 1"
    First,
    /// Adopter 1, rendered as "pessoa 2"
    Second,
}

impl AdopterId {
    /// Both adopters, in evaluation order
    pub const ALL: [AdopterId; 2] = [AdopterId::First, AdopterId::Second];

    /// Zero-based index
    pub fn index(self) -> usize {
        match self {
            AdopterId::First => 0,
            AdopterId::Second => 1,
        }
    }

    /// One-based number shown to users
    pub fn number(self) -> usize {
        self.index() + 1
    }
}

/// Where an animal goes after allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Adopted by the given adopter
    Adopter(AdopterId),
    /// Not adopted in this round
    Shelter,
}

impl Outcome {
    /// The adopter taking the animal, if any
    pub fn adopter(self) -> Option<AdopterId> {
        match self {
            Outcome::Adopter(id) => Some(id),
            Outcome::Shelter => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Adopter(id) => write!(f, "pessoa {}", id.number()),
            Outcome::Shelter => f.write_str("abrigo"),
        }
    }
}

/// One output record of an allocation call
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AllocationEntry {
    /// Animal name, as given in the animal order
    pub animal: String,

    /// Decision for this animal
    pub outcome: Outcome,
}

impl AllocationEntry {
    pub fn new(animal: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            animal: animal.into(),
            outcome,
        }
    }
}

impl fmt::Display for AllocationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.animal, self.outcome)
    }
}
