//! Allocation of shelter animals to two prospective adopters.
//!
//! ## Pipeline
//!
//! 1. Validate owned toys against the catalog vocabulary
//! 2. Validate the animal order (no duplicates, every name known)
//! 3. Walk the animals in the given order, deciding each outcome
//! 4. Render entries and sort them lexicographically
//!
//! Validation fails fast and nothing is processed after the first error.
//!
//! ## Decision Rules
//!
//! - An adopter is a candidate if they qualify for the animal and are still
//!   below the adoption cap
//! - No candidate: the animal stays at the shelter
//! - Two candidates: the animal stays at the shelter (cats never share, and
//!   there is no tie-break between two claimants)
//! - One candidate: that adopter takes the animal and their count goes up
//!
//! Animals are evaluated strictly in order since later decisions depend on
//! the counts left behind by earlier ones.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::AllocationPolicy;
use crate::engine::AllocationResponse;
use crate::error::AllocationError;
use crate::types::{catalog, AdopterId, AllocationEntry, AllocationReceipt, Outcome};

/// Per-call adopter state
#[derive(Debug)]
struct Adopter<'a, S> {
    id: AdopterId,
    toys: &'a [S],
    adopted: usize,
}

/// Deterministic allocator for a single round of adoptions.
///
/// The allocator holds only its policy. Adoption counters live inside each
/// call, so one allocator can serve any number of independent rounds.
///
/// ## Example
///
/// ```
/// use animal_shelter::engine::Allocator;
///
/// let allocator = Allocator::new();
/// let result = allocator
///     .allocate(&["RATO", "BOLA"], &["RATO", "NOVELO"], &["Rex", "Fofo"])
///     .unwrap();
///
/// assert_eq!(result, vec!["Fofo - abrigo", "Rex - pessoa 1"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Allocator {
    policy: AllocationPolicy,
}

impl Allocator {
    /// Create an allocator with the default policy (cap of 3)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: AllocationPolicy) -> Self {
        Self { policy }
    }

    // ========================================================================
    // Eligibility
    // ========================================================================

    /// Check whether an adopter owning `owned` toys qualifies for `animal`.
    ///
    /// For any-order animals a single shared toy is enough. For every other
    /// animal the preference list must appear in the owned toys as a
    /// subsequence: same relative order, other toys allowed in between.
    ///
    /// Unknown animals never qualify.
    ///
    /// ```
    /// use animal_shelter::engine::Allocator;
    ///
    /// assert!(Allocator::qualifies("Rex", &["RATO", "CAIXA", "BOLA"]));
    /// assert!(!Allocator::qualifies("Rex", &["BOLA", "RATO"]));
    /// assert!(Allocator::qualifies("Loco", &["RATO"]));
    /// ```
    pub fn qualifies<S: AsRef<str>>(animal: &str, owned: &[S]) -> bool {
        match catalog::preferences(animal) {
            Some(preferences) if catalog::is_any_order(animal) => {
                owned.iter().any(|toy| preferences.contains(&toy.as_ref()))
            }
            Some(preferences) => is_subsequence(preferences, owned),
            None => false,
        }
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate all inputs of an allocation call.
    ///
    /// Toys are checked before animals, first adopter before second.
    pub fn validate<S: AsRef<str>>(
        toys_a: &[S],
        toys_b: &[S],
        animal_order: &[S],
    ) -> Result<(), AllocationError> {
        if let Some(toy) = toys_a
            .iter()
            .chain(toys_b)
            .map(AsRef::as_ref)
            .find(|toy| !catalog::is_valid_toy(toy))
        {
            warn!(toy, "rejecting unknown toy");
            return Err(AllocationError::InvalidToy(toy.to_string()));
        }

        let mut seen = HashSet::with_capacity(animal_order.len());
        if let Some(animal) = animal_order
            .iter()
            .map(AsRef::as_ref)
            .find(|animal| !seen.insert(*animal))
        {
            warn!(animal, "rejecting duplicated animal");
            return Err(AllocationError::InvalidAnimal(animal.to_string()));
        }

        if let Some(animal) = animal_order
            .iter()
            .map(AsRef::as_ref)
            .find(|animal| !catalog::contains_animal(animal))
        {
            warn!(animal, "rejecting unknown animal");
            return Err(AllocationError::InvalidAnimal(animal.to_string()));
        }

        Ok(())
    }

    // ========================================================================
    // Allocation
    // ========================================================================

    /// Run the allocation and return typed entries in processing order.
    pub fn allocate_entries<S: AsRef<str>>(
        &self,
        toys_a: &[S],
        toys_b: &[S],
        animal_order: &[S],
    ) -> Result<Vec<AllocationEntry>, AllocationError> {
        Self::validate(toys_a, toys_b, animal_order)?;

        let mut adopters = [
            Adopter {
                id: AdopterId::First,
                toys: toys_a,
                adopted: 0,
            },
            Adopter {
                id: AdopterId::Second,
                toys: toys_b,
                adopted: 0,
            },
        ];

        let entries = animal_order
            .iter()
            .map(AsRef::as_ref)
            .map(|animal| {
                let outcome = self.decide(animal, &mut adopters);
                debug!(animal, %outcome, "allocated");
                AllocationEntry::new(animal, outcome)
            })
            .collect();

        Ok(entries)
    }

    /// Run the allocation and return the sorted result lines.
    pub fn allocate<S: AsRef<str>>(
        &self,
        toys_a: &[S],
        toys_b: &[S],
        animal_order: &[S],
    ) -> Result<Vec<String>, AllocationError> {
        let entries = self.allocate_entries(toys_a, toys_b, animal_order)?;
        Ok(render_sorted(&entries))
    }

    /// Run the allocation and return the sorted lines with a round summary.
    pub fn allocate_with_receipt<S: AsRef<str>>(
        &self,
        toys_a: &[S],
        toys_b: &[S],
        animal_order: &[S],
    ) -> Result<(Vec<String>, AllocationReceipt), AllocationError> {
        let entries = self.allocate_entries(toys_a, toys_b, animal_order)?;
        let lines = render_sorted(&entries);
        let receipt = AllocationReceipt::summarize(&entries, &lines);

        debug!(
            processed = receipt.animals_processed,
            adopted = receipt.total_adopted(),
            digest = %receipt.digest_hex(),
            "allocation round complete"
        );

        Ok((lines, receipt))
    }

    /// Run the allocation and wrap the result in the `{ list, error }` form.
    pub fn respond<S: AsRef<str>>(
        &self,
        toys_a: &[S],
        toys_b: &[S],
        animal_order: &[S],
    ) -> AllocationResponse {
        self.allocate(toys_a, toys_b, animal_order).into()
    }

    /// Decide one animal and update the winning adopter's count.
    fn decide<S: AsRef<str>>(&self, animal: &str, adopters: &mut [Adopter<'_, S>; 2]) -> Outcome {
        let candidates: Vec<usize> = adopters
            .iter()
            .enumerate()
            .filter(|(_, adopter)| {
                self.policy.has_capacity(adopter.adopted) && Self::qualifies(animal, adopter.toys)
            })
            .map(|(index, _)| index)
            .collect();

        match candidates.as_slice() {
            [only] => {
                let adopter = &mut adopters[*only];
                adopter.adopted += 1;
                Outcome::Adopter(adopter.id)
            }
            [_, _] if catalog::is_cat(animal) => {
                debug!(animal, "cat refuses to be shared");
                Outcome::Shelter
            }
            [_, _] => {
                debug!(animal, "two claimants, no tie-break");
                Outcome::Shelter
            }
            _ => Outcome::Shelter,
        }
    }
}

/// Greedy left-to-right subsequence match of `preferences` within `owned`
fn is_subsequence<S: AsRef<str>>(preferences: &[&str], owned: &[S]) -> bool {
    let mut next = 0;
    for toy in owned {
        if next < preferences.len() && toy.as_ref() == preferences[next] {
            next += 1;
        }
    }
    next == preferences.len()
}

/// Render entries to text and sort lexicographically
fn render_sorted(entries: &[AllocationEntry]) -> Vec<String> {
    let mut lines: Vec<String> = entries.iter().map(ToString::to_string).collect();
    lines.sort();
    lines
}

// ============================================================================
// Unit Tests
// ============================================================================
