// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Client side checks of the signup form. Every failing field is reported, not only the
//! first one.

use std::sync::LazyLock;

use minicurso_schema::{FieldError, NewRegistration, ProgrammingLevel};
use regex::Regex;

use super::ui_str;

const MIN_NAME_CHARS: usize = 3;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex")
});

/// What the user typed, untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub course: String,
    pub period: Option<String>,
    pub level: String,
    pub expectation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignupField {
    Name,
    Email,
    Phone,
    Course,
    Period,
    Level,
    Expectation,
}

impl SignupField {
    #[rustfmt::skip]
    const ALL: [(SignupField, &'static str, &'static str); 7] = [
        (SignupField::Name,        "nome",             "Nome"),
        (SignupField::Email,       "email",            "Email"),
        (SignupField::Phone,       "telefone",         "Telefone"),
        (SignupField::Course,      "curso",            "Curso"),
        (SignupField::Period,      "periodo",          "Periodo"),
        (SignupField::Level,       "nivelProgramacao", "Nivel"),
        (SignupField::Expectation, "expectativa",      "Expectativa"),
    ];

    /// Key used by the API, also in the `errors[]` of a refusal.
    #[must_use]
    pub fn wire_key(self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(field, ..)| *field == self)
            .map_or("", |(_, key, _)| key)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(field, ..)| *field == self)
            .map_or("", |(.., label)| label)
    }

    #[must_use]
    pub fn from_wire_key(key: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|(_, it, _)| *it == key)
            .map(|(field, ..)| *field)
    }
}

/// One failing field. `field` is the wire key, which may be one this client does not
/// know when it comes from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    #[must_use]
    pub fn new(field: SignupField, message: impl Into<String>) -> Self {
        Self {
            field: field.wire_key().to_owned(),
            message: message.into(),
        }
    }

    /// Label for display, the raw key for fields this client doesn't know.
    #[must_use]
    pub fn label(&self) -> &str {
        SignupField::from_wire_key(&self.field).map_or(self.field.as_str(), |field| field.label())
    }
}

impl From<&FieldError> for FieldIssue {
    fn from(error: &FieldError) -> Self {
        Self {
            field: error.field.clone(),
            message: error.message.clone(),
        }
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Matches the wire label or the display name, ignoring case and surrounding space.
/// Blank input or an unknown level gives `None`.
#[must_use]
pub fn parse_level(input: &str) -> Option<ProgrammingLevel> {
    let input = input.trim();
    ProgrammingLevel::KNOWN.into_iter().find(|level| {
        level.label().eq_ignore_ascii_case(input) || level.display_name().eq_ignore_ascii_case(input)
    })
}

fn optional(text: Option<&String>) -> Option<String> {
    text.map(String::as_str)
        .map(str::trim)
        .filter(|it| !it.is_empty())
        .map(ToOwned::to_owned)
}

/// Checks the form and builds the request body: text trimmed, email lower cased, blank
/// optional fields as `None`.
///
/// # Errors
///
/// Every failing field, in form order.
pub fn validate(form: &SignupForm) -> Result<NewRegistration, Vec<FieldIssue>> {
    let mut issues = vec![];

    let name = form.name.trim();
    if name.chars().count() < MIN_NAME_CHARS {
        issues.push(FieldIssue::new(SignupField::Name, ui_str::validation::NAME_TOO_SHORT));
    }

    let email = form.email.trim();
    if !is_valid_email(email) {
        issues.push(FieldIssue::new(SignupField::Email, ui_str::validation::INVALID_EMAIL));
    }

    let course = form.course.trim();
    if course.is_empty() {
        issues.push(FieldIssue::new(SignupField::Course, ui_str::validation::COURSE_REQUIRED));
    }

    let level = parse_level(&form.level);
    if level.is_none() {
        issues.push(FieldIssue::new(SignupField::Level, ui_str::validation::LEVEL_REQUIRED));
    }

    match level {
        Some(programming_level) if issues.is_empty() => Ok(NewRegistration {
            name: name.to_owned(),
            email: email.to_lowercase(),
            phone: optional(form.phone.as_ref()),
            course: course.to_owned(),
            period: optional(form.period.as_ref()),
            programming_level,
            expectation: optional(form.expectation.as_ref()),
        }),
        _ => {
            // % is Display, ? is Debug.
            tracing::debug!(message = "signup form rejected", issues = ?issues);
            Err(issues)
        }
    }
}
