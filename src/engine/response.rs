//! Discriminated `{ list, error }` result of an allocation call.
//!
//! Exactly one of the two fields is set. Callers must check `error` before
//! using `list`.

use serde::Serialize;

use crate::error::AllocationError;

/// Caller-facing allocation result
///
/// Serializes as `{"list": [...], "error": null}` on success and
/// `{"list": null, "error": "<message>"}` on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationResponse {
    /// Sorted result lines, absent on error
    pub list: Option<Vec<String>>,

    /// Fixed user-visible error message, absent on success
    pub error: Option<String>,
}

impl AllocationResponse {
    pub fn success(list: Vec<String>) -> Self {
        Self {
            list: Some(list),
            error: None,
        }
    }

    pub fn failure(error: &AllocationError) -> Self {
        Self {
            list: None,
            error: Some(error.message().to_string()),
        }
    }

    pub fn from_result(result: Result<Vec<String>, AllocationError>) -> Self {
        match result {
            Ok(list) => Self::success(list),
            Err(error) => Self::failure(&error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

impl From<Result<Vec<String>, AllocationError>> for AllocationResponse {
    fn from(result: Result<Vec<String>, AllocationError>) -> Self {
        Self::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_shape() {
        let response = AllocationResponse::success(vec!["Rex - abrigo".into()]);
        assert!(response.is_success());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "list": ["Rex - abrigo"], "error": null }));
    }

    #[test]
    fn test_failure_shape() {
        let result: Result<Vec<String>, AllocationError> =
            Err(AllocationError::InvalidToy("PIPA".into()));
        let response = AllocationResponse::from(result);
        assert!(!response.is_success());
        assert_eq!(response.list, None);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "list": null, "error": "Brinquedo inválido" }));
    }
}
