//! Allocation receipt for a single allocation round.
//!
//! The AllocationReceipt summarizes one call of the allocator, including a
//! digest of the sorted result list for verification.

use rust_decimal::Decimal;
use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

use crate::types::{AdopterId, AllocationEntry};

/// Summary of a processed allocation round.
///
/// ## Result Digest
///
/// The 32-byte digest is a SHA-256 hash of the sorted result lines joined
/// with `'\n'`. Two rounds with identical output share the same digest.
///
/// ## SSZ Layout
///
/// Fixed-size container: 8 + 8 + 8 + 8 + 32 = 64 bytes.
///
/// ## Example
///
/// ```
/// use animal_shelter::types::{AdopterId, AllocationEntry, AllocationReceipt, Outcome};
///
/// let entries = vec![
///     AllocationEntry::new("Rex", Outcome::Adopter(AdopterId::First)),
///     AllocationEntry::new("Mimi", Outcome::Shelter),
/// ];
/// let lines = vec!["Mimi - abrigo".to_string(), "Rex - pessoa 1".to_string()];
///
/// let receipt = AllocationReceipt::summarize(&entries, &lines);
/// assert_eq!(receipt.animals_processed, 2);
/// assert_eq!(receipt.first_adoptions, 1);
/// assert_eq!(receipt.sheltered, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct AllocationReceipt {
    /// Number of animals evaluated in this round
    pub animals_processed: u64,

    /// Animals taken by the first adopter
    pub first_adoptions: u64,

    /// Animals taken by the second adopter
    pub second_adoptions: u64,

    /// Animals that stay at the shelter
    pub sheltered: u64,

    /// SHA-256 of the sorted result lines
    pub result_digest: [u8; 32],
}

impl AllocationReceipt {
    /// Build a receipt from the processed entries and the sorted output lines
    pub fn summarize(entries: &[AllocationEntry], sorted_lines: &[String]) -> Self {
        let mut receipt = Self {
            animals_processed: entries.len() as u64,
            result_digest: Self::compute_digest(sorted_lines),
            ..Self::default()
        };

        for entry in entries {
            match entry.outcome.adopter() {
                Some(AdopterId::First) => receipt.first_adoptions += 1,
                Some(AdopterId::Second) => receipt.second_adoptions += 1,
                None => receipt.sheltered += 1,
            }
        }

        receipt
    }

    /// Compute the SHA-256 digest of result lines joined by newlines
    pub fn compute_digest(lines: &[String]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(lines.join("\n").as_bytes());
        let result = hasher.finalize();

        let mut digest = [0u8; 32];
        digest.copy_from_slice(&result);
        digest
    }

    /// Get the result digest as a hex string
    pub fn digest_hex(&self) -> String {
        hex::encode(self.result_digest)
    }

    /// Total adoptions across both adopters
    pub fn total_adopted(&self) -> u64 {
        self.first_adoptions + self.second_adoptions
    }

    pub fn is_empty(&self) -> bool {
        self.animals_processed == 0
    }

    /// Share of processed animals that found a home
    ///
    /// Returns None if no animals were processed.
    pub fn adoption_rate(&self) -> Option<Decimal> {
        Decimal::from(self.total_adopted()).checked_div(Decimal::from(self.animals_processed))
    }
}
