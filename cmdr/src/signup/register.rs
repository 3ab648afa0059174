// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{BufRead, Write};

use minicurso_list_engine::SourceError;
use minicurso_schema::{ApiErrorBody, Event, NewRegistration, RegistrationStatus};

use super::{FieldIssue, RegisterArgs, SignupField, SignupForm, ui_str, validate};
use crate::common::prompt;
use crate::{ApiClient, FormOutcome, MinicursoError, Toast};

/// How a registration attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    Registered,
    DuplicateEmail,
    SoldOut,
    Closed,
    FieldErrors(Vec<FieldIssue>),
    Failed,
}

/// Reads a server refusal. The checks run in this order, the first match wins.
#[must_use]
pub fn classify_refusal(status: u16, body: &ApiErrorBody) -> SignupOutcome {
    if status == 409 || body.detail_mentions("Email") {
        SignupOutcome::DuplicateEmail
    } else if body.detail_mentions("Vagas") {
        SignupOutcome::SoldOut
    } else if body.detail_mentions("encerradas") {
        SignupOutcome::Closed
    } else if !body.errors.is_empty() {
        SignupOutcome::FieldErrors(body.errors.iter().map(FieldIssue::from).collect())
    } else {
        SignupOutcome::Failed
    }
}

/// Whether the event state already rules the registration out.
#[must_use]
pub fn local_refusal(event: &Event) -> Option<SignupOutcome> {
    match event.registration_status() {
        RegistrationStatus::Open => None,
        RegistrationStatus::Closed => Some(SignupOutcome::Closed),
        RegistrationStatus::SoldOut => Some(SignupOutcome::SoldOut),
    }
}

/// Asks for the required fields that the flags left out. End of input leaves the field
/// empty, validation catches it.
///
/// # Errors
///
/// When the terminal can't be read or written.
pub fn fill_missing_with(
    args: &RegisterArgs,
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> Result<SignupForm, MinicursoError> {
    let mut form = args.to_form();
    if args.no_input {
        return Ok(form);
    }

    #[rustfmt::skip]
    let missing = [
        (SignupField::Name,   args.name.is_none(),   ui_str::prompt::NAME),
        (SignupField::Email,  args.email.is_none(),  ui_str::prompt::EMAIL),
        (SignupField::Course, args.course.is_none(), ui_str::prompt::COURSE),
        (SignupField::Level,  args.level.is_none(),  ui_str::prompt::LEVEL),
    ];

    for (field, is_missing, question) in missing {
        if !is_missing {
            continue;
        }
        let answer = prompt::read_line_with(reader, writer, question)?.unwrap_or_default();
        match field {
            SignupField::Name => form.name = answer,
            SignupField::Email => form.email = answer,
            SignupField::Course => form.course = answer,
            SignupField::Level => form.level = answer,
            SignupField::Phone | SignupField::Period | SignupField::Expectation => {}
        }
    }
    Ok(form)
}

/// Event check, email pre-check, then the POST. A failing event fetch or pre-check is
/// logged and skipped, the server has the final say.
///
/// # Errors
///
/// Only when the POST itself could not be completed.
pub async fn submit_registration(
    client: &ApiClient,
    registration: &NewRegistration,
) -> Result<SignupOutcome, SourceError> {
    match client.get_event().await {
        Ok(Some(event)) => {
            if let Some(refusal) = local_refusal(&event) {
                return Ok(refusal);
            }
        }
        Ok(None) => tracing::debug!(message = "no event configured, submitting anyway"),
        // % is Display, ? is Debug.
        Err(error) => tracing::warn!(message = "event check skipped", error = %error),
    }

    match client.check_email(&registration.email).await {
        Ok(check) if check.exists => return Ok(SignupOutcome::DuplicateEmail),
        Ok(_) => {}
        Err(error) => tracing::warn!(message = "email pre-check skipped", error = %error),
    }

    Ok(match client.register(registration).await? {
        FormOutcome::Accepted(()) => SignupOutcome::Registered,
        FormOutcome::Refused { status, body } => {
            tracing::debug!(message = "registration refused", status = status, body = ?body);
            classify_refusal(status, &body)
        }
    })
}

fn print_field_issues(issues: &[FieldIssue]) {
    for issue in issues {
        eprintln!("{}", ui_str::field_issue_line(issue.label(), &issue.message));
    }
}

/// Tells the user how it went.
///
/// # Errors
///
/// Every outcome other than [`SignupOutcome::Registered`].
pub fn report_outcome(outcome: SignupOutcome) -> Result<(), MinicursoError> {
    let refused = |reason: &str| -> Result<(), MinicursoError> {
        Toast::error(reason).show();
        Err(MinicursoError::RegistrationRefused {
            reason: reason.to_owned(),
        })
    };
    match outcome {
        SignupOutcome::Registered => {
            Toast::success(ui_str::register::REGISTERED).show();
            Ok(())
        }
        SignupOutcome::DuplicateEmail => {
            print_field_issues(&[FieldIssue::new(
                SignupField::Email,
                ui_str::register::DUPLICATE_EMAIL,
            )]);
            refused(ui_str::register::DUPLICATE_EMAIL)
        }
        SignupOutcome::SoldOut => refused(ui_str::register::SOLD_OUT),
        SignupOutcome::Closed => refused(ui_str::register::CLOSED),
        SignupOutcome::FieldErrors(issues) => {
            print_field_issues(&issues);
            Toast::error(ui_str::register::FAILED).show();
            Err(MinicursoError::InvalidForm {
                count: issues.len(),
            })
        }
        SignupOutcome::Failed => refused(ui_str::register::FAILED),
    }
}

/// # Errors
///
/// An invalid form, a refusal, or a connection problem.
pub async fn try_register(client: &ApiClient, args: &RegisterArgs) -> Result<(), MinicursoError> {
    let form = fill_missing_with(args, &mut std::io::stdin().lock(), &mut std::io::stderr())?;

    let registration = match validate(&form) {
        Ok(it) => it,
        Err(issues) => {
            print_field_issues(&issues);
            return Err(MinicursoError::InvalidForm {
                count: issues.len(),
            });
        }
    };

    let outcome = match submit_registration(client, &registration).await {
        Ok(it) => it,
        Err(error @ SourceError::Transport { .. }) => {
            Toast::error(ui_str::register::CONNECTION_ERROR).show();
            return Err(error.into());
        }
        Err(error) => {
            Toast::error(ui_str::register::FAILED).show();
            return Err(error.into());
        }
    };

    let registered = outcome == SignupOutcome::Registered;
    report_outcome(outcome)?;

    if registered && let Ok(count) = client.registration_count().await {
        Toast::info(format!("Total de inscritos: {}", count.total)).show();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use minicurso_schema::FieldError;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn body_with_detail(detail: &str) -> ApiErrorBody {
        ApiErrorBody {
            detail: Some(detail.into()),
            ..Default::default()
        }
    }

    #[test_case(409, body_with_detail("qualquer coisa"), SignupOutcome::DuplicateEmail)]
    #[test_case(400, body_with_detail("Email ja cadastrado"), SignupOutcome::DuplicateEmail)]
    #[test_case(400, body_with_detail("Vagas esgotadas"), SignupOutcome::SoldOut)]
    #[test_case(400, body_with_detail("Inscricoes encerradas"), SignupOutcome::Closed)]
    #[test_case(500, ApiErrorBody::default(), SignupOutcome::Failed)]
    fn test_classify_refusal(status: u16, body: ApiErrorBody, expected: SignupOutcome) {
        assert_eq!(classify_refusal(status, &body), expected);
    }

    #[test]
    fn test_classify_refusal_field_errors() {
        let body = ApiErrorBody {
            errors: vec![FieldError {
                field: "curso".into(),
                message: "obrigatorio".into(),
            }],
            ..Default::default()
        };
        let SignupOutcome::FieldErrors(issues) = classify_refusal(400, &body) else {
            panic!("expected field errors");
        };
        assert_eq!(issues[0].label(), "Curso");
        assert_eq!(issues[0].message, "obrigatorio");
    }

    #[test]
    fn test_email_in_detail_wins_over_errors() {
        let body = ApiErrorBody {
            detail: Some("Email ja cadastrado".into()),
            errors: vec![FieldError::default()],
            ..Default::default()
        };
        assert_eq!(classify_refusal(400, &body), SignupOutcome::DuplicateEmail);
    }

    #[test_case(Some(0), Some(true), Some(SignupOutcome::SoldOut))]
    #[test_case(Some(0), Some(false), Some(SignupOutcome::SoldOut))]
    #[test_case(Some(5), Some(false), Some(SignupOutcome::Closed))]
    #[test_case(Some(5), None, None)]
    #[test_case(None, None, None)]
    fn test_local_refusal(
        seats: Option<i64>,
        open: Option<bool>,
        expected: Option<SignupOutcome>,
    ) {
        let event = Event {
            available_seats: seats,
            registrations_open: open,
            ..Default::default()
        };
        assert_eq!(local_refusal(&event), expected);
    }

    #[test]
    fn test_fill_missing_prompts_required_fields_only() {
        let args = RegisterArgs {
            name: Some("Ana Lima".into()),
            course: Some("Computacao".into()),
            ..Default::default()
        };
        let mut input = Cursor::new("ana@x.io\niniciante\n");
        let mut output = Vec::new();

        let form = fill_missing_with(&args, &mut input, &mut output).unwrap();

        assert_eq!(form.name, "Ana Lima");
        assert_eq!(form.email, "ana@x.io");
        assert_eq!(form.level, "iniciante");
        assert_eq!(form.phone, None);
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Email"));
        assert!(!printed.contains("Nome"));
    }

    #[test]
    fn test_fill_missing_respects_no_input() {
        let args = RegisterArgs {
            no_input: true,
            ..Default::default()
        };
        let mut input = Cursor::new("should not be read\n");
        let mut output = Vec::new();

        let form = fill_missing_with(&args, &mut input, &mut output).unwrap();

        assert_eq!(form, SignupForm::default());
        assert!(output.is_empty());
    }

    #[test]
    fn test_end_of_input_leaves_fields_empty() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let form = fill_missing_with(&RegisterArgs::default(), &mut input, &mut output).unwrap();
        assert_eq!(form.name, "");
        assert!(validate(&form).is_err());
    }

    #[test]
    fn test_report_outcome() {
        assert!(report_outcome(SignupOutcome::Registered).is_ok());
        assert!(matches!(
            report_outcome(SignupOutcome::SoldOut),
            Err(MinicursoError::RegistrationRefused { .. })
        ));
        assert!(matches!(
            report_outcome(SignupOutcome::FieldErrors(vec![FieldIssue::new(
                SignupField::Name,
                "x"
            )])),
            Err(MinicursoError::InvalidForm { count: 1 })
        ));
    }
}
