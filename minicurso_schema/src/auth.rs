// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// Roles that grant access to the admin console. The backend has used both spellings.
pub const ADMIN_ROLES: [&str; 2] = ["ADMIN", "ROLE_ADMIN"];

/// Body of `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Never print the password, not even in debug logs.
impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl LoginResponse {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.roles
            .iter()
            .any(|role| ADMIN_ROLES.contains(&role.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(&["ADMIN"], true)]
    #[test_case(&["USER", "ROLE_ADMIN"], true)]
    #[test_case(&["USER"], false)]
    #[test_case(&[], false)]
    #[test_case(&["admin"], false)]
    fn test_is_admin(roles: &[&str], expected: bool) {
        let response = LoginResponse {
            token: "t".into(),
            username: None,
            roles: roles.iter().map(ToString::to_string).collect(),
        };
        assert_eq!(response.is_admin(), expected);
    }

    #[test]
    fn test_login_request_debug_hides_password() {
        let it = LoginRequest {
            username: "root".into(),
            password: "hunter2".into(),
        };
        assert!(!format!("{it:?}").contains("hunter2"));
    }
}
