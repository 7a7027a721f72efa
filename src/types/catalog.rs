//! Static toy catalog.
//!
//! ## Reference Data
//!
//! Every animal the shelter knows about is listed here with its ranked toy
//! preferences. The table is compiled in and never mutated.
//!
//! | Animal | Preferences            | Cat |
//! |--------|------------------------|-----|
//! | Rex    | RATO, BOLA             |     |
//! | Mimi   | BOLA, LASER            | yes |
//! | Fofo   | BOLA, RATO, LASER      | yes |
//! | Zero   | RATO, BOLA             | yes |
//! | Bola   | CAIXA, NOVELO          |     |
//! | Bebe   | LASER, RATO, BOLA      |     |
//! | Loco   | SKATE, RATO            |     |
//!
//! Loco is the only animal that accepts its toys in any order.
//!
//! ## Example
//!
//! ```
//! use animal_shelter::types::catalog;
//!
//! assert_eq!(catalog::preferences("Rex"), Some(&["RATO", "BOLA"][..]));
//! assert!(catalog::is_valid_toy("NOVELO"));
//! assert!(!catalog::is_valid_toy("PIPA"));
//! assert!(catalog::is_cat("Mimi"));
//! ```

use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Animal name to ranked toy preferences
pub const TOY_CATALOG: &[(&str, &[&str])] = &[
    ("Rex", &["RATO", "BOLA"]),
    ("Mimi", &["BOLA", "LASER"]),
    ("Fofo", &["BOLA", "RATO", "LASER"]),
    ("Zero", &["RATO", "BOLA"]),
    ("Bola", &["CAIXA", "NOVELO"]),
    ("Bebe", &["LASER", "RATO", "BOLA"]),
    ("Loco", &["SKATE", "RATO"]),
];

/// Cats refuse to be shared between two adopters
pub const CATS: &[&str] = &["Mimi", "Fofo", "Zero"];

/// Animals that only need one matching toy, in any order
pub const ANY_ORDER_ANIMALS: &[&str] = &["Loco"];

/// Every toy that appears anywhere in the catalog
static VALID_TOYS: LazyLock<BTreeSet<&'static str>> = LazyLock::new(|| {
    TOY_CATALOG
        .iter()
        .flat_map(|(_, toys)| toys.iter().copied())
        .collect()
});

/// Ranked preferences of an animal, or `None` if the shelter doesn't know it
pub fn preferences(animal: &str) -> Option<&'static [&'static str]> {
    TOY_CATALOG
        .iter()
        .find(|(name, _)| *name == animal)
        .map(|(_, toys)| *toys)
}

/// Check whether an animal exists in the catalog
#[inline]
pub fn contains_animal(animal: &str) -> bool {
    preferences(animal).is_some()
}

/// The derived toy vocabulary
pub fn valid_toys() -> &'static BTreeSet<&'static str> {
    &VALID_TOYS
}

/// Check whether a toy token belongs to the vocabulary
#[inline]
pub fn is_valid_toy(toy: &str) -> bool {
    VALID_TOYS.contains(toy)
}

#[inline]
pub fn is_cat(animal: &str) -> bool {
    CATS.contains(&animal)
}

#[inline]
pub fn is_any_order(animal: &str) -> bool {
    ANY_ORDER_ANIMALS.contains(&animal)
}

/// All animal names, in catalog order
pub fn animal_names() -> impl Iterator<Item = &'static str> {
    TOY_CATALOG.iter().map(|(name, _)| *name)
}
