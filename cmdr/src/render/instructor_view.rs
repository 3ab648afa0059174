// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use minicurso_schema::Instructor;

use crate::{Table, dim, sanitize, sanitize_or_dash};

pub const NO_INSTRUCTORS_MESSAGE: &str = "Nenhum instrutor cadastrado.";

#[must_use]
pub fn render_instructor_table(instructors: &[Instructor]) -> String {
    if instructors.is_empty() {
        return dim(NO_INSTRUCTORS_MESSAGE);
    }

    let mut table = Table::new(&["ID", "Nome", "Email", "Modulos", "Bio"]);
    for it in instructors {
        let module_ids = if it.module_ids.is_empty() {
            "-".to_owned()
        } else {
            it.module_ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        };
        table.push_row(vec![
            it.id.to_string(),
            sanitize(&it.name),
            sanitize_or_dash(it.email.as_deref()),
            module_ids,
            sanitize_or_dash(it.bio.as_deref()),
        ]);
    }
    table.render()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::strip_styles;

    #[test]
    fn test_instructor_rows() {
        let rendered = strip_styles(&render_instructor_table(&[Instructor {
            id: 3,
            name: "Carla".into(),
            email: None,
            bio: Some("Rustacea\ndesde 2018".into()),
            module_ids: vec![10, 11],
        }]));
        let row = rendered.lines().nth(2).unwrap();
        assert_eq!(
            row.split_whitespace().collect::<Vec<_>>(),
            vec!["3", "Carla", "-", "10,11", "Rustacea", "desde", "2018"]
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(strip_styles(&render_instructor_table(&[])), NO_INSTRUCTORS_MESSAGE);
    }
}
