// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! How HTTP failures turn into [`SourceError`]s.
//!
//! | status | error                                 |
//! |--------|---------------------------------------|
//! | 401    | `Unauthorized`, the session is dropped |
//! | 404    | `NotFound`                            |
//! | 409    | `Conflict`                            |
//! | other  | `Rejected { status, detail }`         |

use minicurso_list_engine::SourceError;
use minicurso_schema::ApiErrorBody;
use reqwest::StatusCode;

/// `what` names the resource for a 404 (e.g.: `inscricao 7`). The detail of the other
/// errors comes from the JSON error body when the server sent one.
#[must_use]
pub fn map_error_status(status: u16, body: &str, what: &str) -> SourceError {
    let parsed = ApiErrorBody::parse_lenient(body);
    let detail = || {
        parsed
            .best_message()
            .map_or_else(|| default_reason(status), ToOwned::to_owned)
    };

    match status {
        401 => SourceError::Unauthorized,
        404 => SourceError::NotFound {
            what: what.to_owned(),
        },
        409 => SourceError::Conflict { detail: detail() },
        _ => SourceError::Rejected {
            status,
            detail: detail(),
        },
    }
}

/// `Bad Request`, `Internal Server Error`, or `HTTP 599` for an unknown code.
#[must_use]
pub fn default_reason(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|it| it.canonical_reason())
        .map_or_else(|| format!("HTTP {status}"), ToOwned::to_owned)
}

/// Connection, timeout and TLS failures are [`SourceError::Transport`], a body that isn't
/// the expected JSON is [`SourceError::Decode`].
#[must_use]
pub fn map_transport_error(error: &reqwest::Error) -> SourceError {
    if error.is_decode() {
        SourceError::Decode {
            message: error.to_string(),
        }
    } else {
        SourceError::Transport {
            message: error.to_string(),
        }
    }
}

#[must_use]
pub fn map_decode_error(error: &serde_json::Error) -> SourceError {
    SourceError::Decode {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_unauthorized() {
        assert_eq!(map_error_status(401, "", "x"), SourceError::Unauthorized);
    }

    #[test]
    fn test_not_found_uses_what() {
        assert_eq!(
            map_error_status(404, r#"{"message":"nope"}"#, "inscricao 7"),
            SourceError::NotFound {
                what: "inscricao 7".into()
            }
        );
    }

    #[test_case(409, r#"{"detail":"Email ja cadastrado"}"#,
        SourceError::Conflict { detail: "Email ja cadastrado".into() }; "conflict detail")]
    #[test_case(400, r#"{"message":"Titulo obrigatorio"}"#,
        SourceError::Rejected { status: 400, detail: "Titulo obrigatorio".into() }; "message fallback")]
    #[test_case(400, r#"{"message":"m","detail":"d"}"#,
        SourceError::Rejected { status: 400, detail: "d".into() }; "detail wins")]
    #[test_case(500, "<html>Bad Gateway</html>",
        SourceError::Rejected { status: 500, detail: "Internal Server Error".into() }; "not json")]
    #[test_case(599, "",
        SourceError::Rejected { status: 599, detail: "HTTP 599".into() }; "unknown status")]
    fn test_map_error_status(status: u16, body: &str, expected: SourceError) {
        assert_eq!(map_error_status(status, body, "evento"), expected);
    }
}
