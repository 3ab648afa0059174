// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result as FmtResult},
          str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::iso_datetime;

/// A person's registration record for the event. Read only on the client side.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registrant {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "curso")]
    pub course: String,
    #[serde(rename = "periodo", default)]
    pub period: Option<String>,
    #[serde(rename = "nivelProgramacao")]
    pub programming_level: ProgrammingLevel,
    #[serde(rename = "expectativa", default)]
    pub expectation: Option<String>,
    #[serde(rename = "createdAt", default, with = "iso_datetime")]
    pub created_at: Option<NaiveDateTime>, /* server clock, no offset */
}

/// The programming experience a registrant declares on the signup form.
///
/// The backend owns the set of labels. Labels this client does not know about are kept
/// verbatim in [`ProgrammingLevel::Other`] so a new backend label never breaks decoding.
/// Equality is exact and case-sensitive on the label, `"iniciante"` is not
/// [`ProgrammingLevel::Beginner`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProgrammingLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Other(String),
}

mod level_labels {
    pub const BEGINNER: &str = "INICIANTE";
    pub const INTERMEDIATE: &str = "INTERMEDIARIO";
    pub const ADVANCED: &str = "AVANCADO";
}

impl ProgrammingLevel {
    /// The levels offered on the signup form, in the order they are shown.
    pub const KNOWN: [ProgrammingLevel; 3] = [
        ProgrammingLevel::Beginner,
        ProgrammingLevel::Intermediate,
        ProgrammingLevel::Advanced,
    ];

    /// The exact label used on the wire.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            ProgrammingLevel::Beginner => level_labels::BEGINNER,
            ProgrammingLevel::Intermediate => level_labels::INTERMEDIATE,
            ProgrammingLevel::Advanced => level_labels::ADVANCED,
            ProgrammingLevel::Other(label) => label,
        }
    }

    /// Human readable name, used by the renderers.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            ProgrammingLevel::Beginner => "Iniciante",
            ProgrammingLevel::Intermediate => "Intermediario",
            ProgrammingLevel::Advanced => "Avancado",
            ProgrammingLevel::Other(label) => label,
        }
    }
}

impl From<String> for ProgrammingLevel {
    fn from(label: String) -> Self {
        match label.as_str() {
            level_labels::BEGINNER => ProgrammingLevel::Beginner,
            level_labels::INTERMEDIATE => ProgrammingLevel::Intermediate,
            level_labels::ADVANCED => ProgrammingLevel::Advanced,
            _ => ProgrammingLevel::Other(label),
        }
    }
}

impl From<ProgrammingLevel> for String {
    fn from(level: ProgrammingLevel) -> Self {
        match level {
            ProgrammingLevel::Other(label) => label,
            known => known.label().to_owned(),
        }
    }
}

impl FromStr for ProgrammingLevel {
    type Err = std::convert::Infallible;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Ok(ProgrammingLevel::from(label.to_owned()))
    }
}

impl Display for ProgrammingLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "{}", self.label()) }
}

/// Body of `POST /minicurso/inscricao`. Optional fields that the user left blank are
/// sent as `null`, never as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRegistration {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    #[serde(rename = "curso")]
    pub course: String,
    #[serde(rename = "periodo")]
    pub period: Option<String>,
    #[serde(rename = "nivelProgramacao")]
    pub programming_level: ProgrammingLevel,
    #[serde(rename = "expectativa")]
    pub expectation: Option<String>,
}

/// Response of `GET /minicurso/inscricoes/count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationCount {
    #[serde(default)]
    pub total: u64,
}

/// Response of `GET /minicurso/inscricao/check?email=...`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailCheck {
    #[serde(default)]
    pub exists: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_decode_registrant_from_backend_json() {
        let json = r#"{
            "id": 7,
            "nome": "Ana Souza",
            "email": "ana@ufx.br",
            "telefone": null,
            "curso": "Ciencia da Computacao",
            "periodo": "3",
            "nivelProgramacao": "INTERMEDIARIO",
            "createdAt": "2025-03-01T14:05:09.123"
        }"#;

        let registrant: Registrant = serde_json::from_str(json).unwrap();

        assert_eq!(registrant.id, 7);
        assert_eq!(registrant.name, "Ana Souza");
        assert_eq!(registrant.phone, None);
        assert_eq!(registrant.period.as_deref(), Some("3"));
        assert_eq!(registrant.programming_level, ProgrammingLevel::Intermediate);
        assert_eq!(registrant.expectation, None);
        assert_eq!(
            registrant.created_at.map(|it| it.format("%d/%m/%Y %H:%M").to_string()),
            Some("01/03/2025 14:05".to_string())
        );
    }

    #[test]
    fn test_decode_registrant_without_optional_fields() {
        let json = r#"{"id":1,"nome":"B","email":"b@x.io","curso":"SI","nivelProgramacao":"AVANCADO"}"#;
        let registrant: Registrant = serde_json::from_str(json).unwrap();
        assert_eq!(registrant.created_at, None);
        assert_eq!(registrant.phone, None);
    }

    #[test_case("INICIANTE", ProgrammingLevel::Beginner)]
    #[test_case("INTERMEDIARIO", ProgrammingLevel::Intermediate)]
    #[test_case("AVANCADO", ProgrammingLevel::Advanced)]
    #[test_case("iniciante", ProgrammingLevel::Other("iniciante".into()))]
    #[test_case("EXPERT", ProgrammingLevel::Other("EXPERT".into()))]
    fn test_level_label_is_exact(label: &str, expected: ProgrammingLevel) {
        assert_eq!(label.parse::<ProgrammingLevel>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_level_survives_reencoding() {
        let level: ProgrammingLevel = serde_json::from_str(r#""GURU""#).unwrap();
        assert_eq!(serde_json::to_string(&level).unwrap(), r#""GURU""#);
    }

    #[test]
    fn test_new_registration_sends_nulls_for_blank_optionals() {
        let it = NewRegistration {
            name: "Caio".into(),
            email: "caio@x.io".into(),
            phone: None,
            course: "ADS".into(),
            period: None,
            programming_level: ProgrammingLevel::Beginner,
            expectation: None,
        };
        let value = serde_json::to_value(&it).unwrap();
        assert_eq!(value["telefone"], serde_json::Value::Null);
        assert_eq!(value["nivelProgramacao"], "INICIANTE");
        assert_eq!(value["nome"], "Caio");
    }
}
