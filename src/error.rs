//! Error taxonomy for the allocation kernel.
//!
//! Both variants are terminal for a whole allocation call: validation fails
//! fast and no partial result is ever produced alongside an error.
//!
//! The `Display` output is the fixed, user-visible message of each variant.
//! The offending token is kept for logging and diagnostics only.

use thiserror::Error;

/// Fixed message for an unknown toy token
pub const INVALID_TOY_MESSAGE: &str = "Brinquedo inválido";

/// Fixed message for an unknown or duplicated animal name
pub const INVALID_ANIMAL_MESSAGE: &str = "Animal inválido";

/// Validation failure of an allocation call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// An owned-toy token is not part of the catalog's toy vocabulary
    #[error("Brinquedo inválido")]
    InvalidToy(String),

    /// An animal name is duplicated in the order or missing from the catalog
    #[error("Animal inválido")]
    InvalidAnimal(String),
}

impl AllocationError {
    /// The fixed user-visible message for this error
    pub fn message(&self) -> &'static str {
        match self {
            AllocationError::InvalidToy(_) => INVALID_TOY_MESSAGE,
            AllocationError::InvalidAnimal(_) => INVALID_ANIMAL_MESSAGE,
        }
    }

    /// The token that failed validation
    pub fn token(&self) -> &str {
        match self {
            AllocationError::InvalidToy(token) | AllocationError::InvalidAnimal(token) => token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_fixed_messages() {
        let toy = AllocationError::InvalidToy("PIPA".to_string());
        let animal = AllocationError::InvalidAnimal("Lulu".to_string());

        assert_eq!(toy.to_string(), INVALID_TOY_MESSAGE);
        assert_eq!(animal.to_string(), INVALID_ANIMAL_MESSAGE);
        assert_eq!(toy.message(), toy.to_string());
        assert_eq!(animal.message(), animal.to_string());
    }

    #[test]
    fn test_token_is_preserved() {
        assert_eq!(AllocationError::InvalidToy("PIPA".into()).token(), "PIPA");
        assert_eq!(AllocationError::InvalidAnimal("Rex".into()).token(), "Rex");
    }
}
