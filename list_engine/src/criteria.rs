// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result as FmtResult};

use minicurso_schema::ProgrammingLevel;

/// The per-column filter constraints. An empty string (or `None` for the level) means "no
/// constraint on this column".
///
/// There is exactly one of these per view session, owned by
/// [`crate::RegistrantListState`]. The table and the cards surfaces both read it from
/// there, they never keep their own copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub name: String,
    pub email: String,
    pub course: String,
    pub level: Option<ProgrammingLevel>,
}

/// Addresses one column of [`FilterCriteria`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Name,
    Email,
    Course,
    Level,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::Name,
        FilterField::Email,
        FilterField::Course,
        FilterField::Level,
    ];

    #[must_use]
    #[rustfmt::skip]
    pub fn label(self) -> &'static str {
        match self {
            FilterField::Name   => "nome",
            FilterField::Email  => "email",
            FilterField::Course => "curso",
            FilterField::Level  => "nivel",
        }
    }
}

impl FilterCriteria {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.course.is_empty()
            && self.level.is_none()
    }

    /// Writes one column. For [`FilterField::Level`] an empty value clears the constraint,
    /// anything else is taken verbatim as the level label.
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Name => self.name = value,
            FilterField::Email => self.email = value,
            FilterField::Course => self.course = value,
            FilterField::Level => {
                self.level = if value.is_empty() {
                    None
                } else {
                    Some(ProgrammingLevel::from(value))
                };
            }
        }
    }

    #[must_use]
    pub fn with(mut self, field: FilterField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// The non empty columns, as `(field, value)` pairs, in [`FilterField::ALL`] order.
    #[must_use]
    pub fn active(&self) -> Vec<(FilterField, String)> {
        FilterField::ALL
            .into_iter()
            .filter_map(|field| {
                let value = match field {
                    FilterField::Name => self.name.clone(),
                    FilterField::Email => self.email.clone(),
                    FilterField::Course => self.course.clone(),
                    FilterField::Level => self
                        .level
                        .as_ref()
                        .map(|it| it.label().to_owned())
                        .unwrap_or_default(),
                };
                (!value.is_empty()).then_some((field, value))
            })
            .collect()
    }
}

/// `nome~"ana" nivel=INICIANTE`, or `-` when nothing is set.
impl Display for FilterCriteria {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let active = self.active();
        if active.is_empty() {
            return write!(f, "-");
        }
        let parts: Vec<String> = active
            .into_iter()
            .map(|(field, value)| match field {
                FilterField::Level => format!("{}={value}", field.label()),
                _ => format!("{}~{value:?}", field.label()),
            })
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_set_level_empty_clears() {
        let mut it = FilterCriteria::default().with(FilterField::Level, "AVANCADO");
        assert_eq!(it.level, Some(ProgrammingLevel::Advanced));
        it.set(FilterField::Level, "");
        assert_eq!(it.level, None);
        assert!(it.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(FilterCriteria::default().to_string(), "-");
        let it = FilterCriteria::default()
            .with(FilterField::Name, "ana")
            .with(FilterField::Level, "INICIANTE");
        assert_eq!(it.to_string(), r#"nome~"ana" nivel=INICIANTE"#);
    }
}
