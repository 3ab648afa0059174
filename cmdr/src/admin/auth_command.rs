// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use minicurso_list_engine::SourceError;
use minicurso_schema::{LoginRequest, LoginResponse};

use super::{AdminContext, ui_str};
use crate::common::prompt;
use crate::{FormOutcome, MinicursoError, Session, Toast};

/// How a login attempt ended, before anything is stored.
#[derive(Debug)]
pub enum LoginVerdict {
    Granted(Session),
    Denied(MinicursoError),
}

/// Pure part of the login: classifies the server answer. A refusal carries the server's
/// message when it sent one.
#[must_use]
pub fn judge_login(outcome: FormOutcome<LoginResponse>, typed_username: &str) -> LoginVerdict {
    match outcome {
        FormOutcome::Accepted(response) => {
            match Session::try_from_login(response, typed_username) {
                Ok(session) => LoginVerdict::Granted(session),
                Err(error) => LoginVerdict::Denied(error),
            }
        }
        FormOutcome::Refused { status, body } => {
            // % is Display, ? is Debug.
            tracing::debug!(message = "login refused", status = status, body = ?body);
            let detail = body
                .message
                .as_deref()
                .filter(|it| !it.trim().is_empty())
                .unwrap_or(ui_str::auth::INVALID_CREDENTIALS)
                .to_owned();
            LoginVerdict::Denied(MinicursoError::LoginFailed { detail })
        }
    }
}

/// # Errors
///
/// Refused credentials, a non admin account, a connection problem, or a session file
/// that can't be written.
pub async fn try_login(
    context: &AdminContext,
    username: Option<String>,
    password: Option<String>,
) -> Result<(), MinicursoError> {
    let username = match username {
        Some(it) => it,
        None => prompt::read_line(ui_str::auth::USERNAME_PROMPT)?
            .ok_or(MinicursoError::Cancelled)?,
    };
    let password = match password {
        Some(it) => it,
        None => prompt::read_password(ui_str::auth::PASSWORD_PROMPT)?,
    };
    let request = LoginRequest {
        username: username.trim().to_owned(),
        password,
    };

    let outcome = match context.public_client().login(&request).await {
        Ok(it) => it,
        Err(error @ SourceError::Transport { .. }) => {
            Toast::error(ui_str::auth::CONNECTION_ERROR).show();
            return Err(error.into());
        }
        Err(error) => {
            Toast::error(ui_str::auth::INVALID_CREDENTIALS).show();
            return Err(error.into());
        }
    };

    match judge_login(outcome, &request.username) {
        LoginVerdict::Granted(session) => {
            context.store().save(&session)?;
            Toast::success(ui_str::auth::welcome_msg(&session.username)).show();
            Ok(())
        }
        LoginVerdict::Denied(error) => {
            let message = match &error {
                MinicursoError::AccessDenied { .. } => ui_str::auth::ACCESS_DENIED.to_owned(),
                MinicursoError::LoginFailed { detail } => detail.clone(),
                other => other.to_string(),
            };
            Toast::error(message).show();
            Err(error)
        }
    }
}

/// # Errors
///
/// When the session file exists but can't be removed.
pub fn try_logout(context: &AdminContext) -> Result<(), MinicursoError> {
    if context.store().clear()? {
        Toast::success(ui_str::auth::LOGGED_OUT).show();
    } else {
        Toast::info(ui_str::auth::NOT_LOGGED_IN).show();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use minicurso_schema::ApiErrorBody;
    use pretty_assertions::assert_eq;

    use super::*;

    fn response(roles: &[&str]) -> LoginResponse {
        LoginResponse {
            token: "jwt".into(),
            username: None,
            roles: roles.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_admin_is_granted() {
        let verdict = judge_login(FormOutcome::Accepted(response(&["ROLE_ADMIN"])), "ana");
        let LoginVerdict::Granted(session) = verdict else {
            panic!("expected a session");
        };
        assert_eq!(session.username, "ana");
        assert_eq!(session.token, "jwt");
    }

    #[test]
    fn test_non_admin_is_denied() {
        let verdict = judge_login(FormOutcome::Accepted(response(&["USER"])), "ana");
        assert!(matches!(
            verdict,
            LoginVerdict::Denied(MinicursoError::AccessDenied { .. })
        ));
    }

    #[test]
    fn test_refusal_uses_server_message_or_default() {
        let with_message = judge_login(
            FormOutcome::Refused {
                status: 401,
                body: ApiErrorBody {
                    message: Some("Conta bloqueada".into()),
                    ..Default::default()
                },
            },
            "ana",
        );
        let LoginVerdict::Denied(MinicursoError::LoginFailed { detail }) = with_message else {
            panic!("expected a refusal");
        };
        assert_eq!(detail, "Conta bloqueada");

        let without_message = judge_login(
            FormOutcome::Refused {
                status: 401,
                body: ApiErrorBody::default(),
            },
            "ana",
        );
        let LoginVerdict::Denied(MinicursoError::LoginFailed { detail }) = without_message
        else {
            panic!("expected a refusal");
        };
        assert_eq!(detail, ui_str::auth::INVALID_CREDENTIALS);
    }
}
