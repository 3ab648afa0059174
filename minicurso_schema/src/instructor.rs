// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// A course facilitator, optionally linked to one or more modules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "moduloIds", default)]
    pub module_ids: Vec<i64>,
}

/// Body of `POST /minicurso/instrutores` and `PUT /minicurso/instrutores/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorUpsert {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "moduloIds")]
    pub module_ids: Vec<i64>,
}

impl From<&Instructor> for InstructorUpsert {
    fn from(it: &Instructor) -> Self {
        InstructorUpsert {
            name: it.name.clone(),
            email: it.email.clone(),
            bio: it.bio.clone(),
            module_ids: it.module_ids.clone(),
        }
    }
}
