// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use minicurso_schema::{ProgrammingLevel, Registrant};

use crate::FilterCriteria;

/// Keeps the registrants that satisfy every non empty column of `criteria`.
///
/// - `name`, `email`, `course`: case-insensitive substring containment (Unicode lower
///   case on both sides).
/// - `level`: exact, case-sensitive equality on the label.
///
/// Input order is preserved. With empty criteria the result is the whole input.
#[must_use]
pub fn apply_filters<'a>(
    all: &'a [Registrant],
    criteria: &FilterCriteria,
) -> Vec<&'a Registrant> {
    let needles = Needles::new(criteria);
    all.iter().filter(|it| needles.matches(it)).collect()
}

/// Same as [`apply_filters`] but clones the matches.
#[must_use]
pub fn apply_filters_owned(all: &[Registrant], criteria: &FilterCriteria) -> Vec<Registrant> {
    let needles = Needles::new(criteria);
    all.iter().filter(|it| needles.matches(it)).cloned().collect()
}

#[must_use]
pub fn matches(registrant: &Registrant, criteria: &FilterCriteria) -> bool {
    Needles::new(criteria).matches(registrant)
}

/// The criteria lower-cased once, instead of once per registrant.
#[derive(Debug)]
struct Needles<'a> {
    name: Option<String>,
    email: Option<String>,
    course: Option<String>,
    level: Option<&'a ProgrammingLevel>,
}

impl<'a> Needles<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        let fold = |it: &str| (!it.is_empty()).then(|| it.to_lowercase());
        Self {
            name: fold(&criteria.name),
            email: fold(&criteria.email),
            course: fold(&criteria.course),
            level: criteria.level.as_ref(),
        }
    }

    fn matches(&self, registrant: &Registrant) -> bool {
        contains_folded(&registrant.name, self.name.as_deref())
            && contains_folded(&registrant.email, self.email.as_deref())
            && contains_folded(&registrant.course, self.course.as_deref())
            && self
                .level
                .is_none_or(|level| *level == registrant.programming_level)
    }
}

fn contains_folded(haystack: &str, maybe_needle: Option<&str>) -> bool {
    match maybe_needle {
        None => true,
        Some(needle) => haystack.to_lowercase().contains(needle),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::FilterField;

    fn registrant(id: i64, name: &str, email: &str, course: &str, level: &str) -> Registrant {
        Registrant {
            id,
            name: name.into(),
            email: email.into(),
            course: course.into(),
            programming_level: level.parse().unwrap(),
            ..Default::default()
        }
    }

    fn fixture() -> Vec<Registrant> {
        vec![
            registrant(1, "Ana Souza", "ana@uni.br", "Computação", "INICIANTE"),
            registrant(2, "Bruno Lima", "bruno@mail.com", "Engenharia", "AVANCADO"),
            registrant(3, "Carla Anaya", "carla@uni.br", "Computação", "INTERMEDIARIO"),
            registrant(4, "ÉRICO", "erico@uni.br", "Sistemas", "INICIANTE"),
        ]
    }

    fn ids(it: &[&Registrant]) -> Vec<i64> { it.iter().map(|r| r.id).collect() }

    #[test_case(FilterField::Name, "ana", &[1, 3]; "name is case insensitive")]
    #[test_case(FilterField::Name, "érico", &[4]; "name lower cases non ascii")]
    #[test_case(FilterField::Email, "UNI.BR", &[1, 3, 4]; "email")]
    #[test_case(FilterField::Course, "comp", &[1, 3]; "course")]
    #[test_case(FilterField::Level, "INICIANTE", &[1, 4]; "level exact")]
    #[test_case(FilterField::Level, "iniciante", &[]; "level is case sensitive")]
    #[test_case(FilterField::Name, "zzz", &[]; "no match")]
    fn test_single_column(field: FilterField, value: &str, expected: &[i64]) {
        let all = fixture();
        let criteria = FilterCriteria::default().with(field, value);
        assert_eq!(ids(&apply_filters(&all, &criteria)), expected);
    }

    #[test]
    fn test_columns_are_conjunctive() {
        let all = fixture();
        let criteria = FilterCriteria::default()
            .with(FilterField::Email, "uni.br")
            .with(FilterField::Level, "INICIANTE")
            .with(FilterField::Course, "sis");
        assert_eq!(ids(&apply_filters(&all, &criteria)), vec![4]);
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let all = fixture();
        assert_eq!(apply_filters_owned(&all, &FilterCriteria::default()), all);
    }
}
