// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// The error body the backend sends with non 2xx responses. Every field is optional since
/// different endpoints fill different ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

/// One entry of `errors[]`: a bean validation failure on a request field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl ApiErrorBody {
    /// Lenient parse. A body that is not JSON (eg: an HTML error page from a proxy) gives
    /// an empty [`ApiErrorBody`].
    #[must_use]
    pub fn parse_lenient(body: &str) -> Self { serde_json::from_str(body).unwrap_or_default() }

    /// `detail` if present, else `message`.
    #[must_use]
    pub fn best_message(&self) -> Option<&str> {
        self.detail.as_deref().or(self.message.as_deref())
    }

    #[must_use]
    pub fn detail_mentions(&self, needle: &str) -> bool {
        self.detail.as_deref().is_some_and(|it| it.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_lenient() {
        let body = r#"{"detail":"Vagas esgotadas","errors":[{"field":"nome","message":"curto"}]}"#;
        let it = ApiErrorBody::parse_lenient(body);
        assert!(it.detail_mentions("Vagas"));
        assert_eq!(it.best_message(), Some("Vagas esgotadas"));
        assert_eq!(it.errors[0].field, "nome");

        let it = ApiErrorBody::parse_lenient("<html>502</html>");
        assert_eq!(it, ApiErrorBody::default());
        assert_eq!(it.best_message(), None);
    }
}
