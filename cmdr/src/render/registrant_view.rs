// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The two registrant surfaces. Both take their rows from the same page slice and their
//! active filters line from the same [`FilterCriteria`], the one owned by
//! [`RegistrantListState`].

use clap::ValueEnum;
use minicurso_list_engine::{FilterCriteria, RegistrantListState};
use minicurso_schema::Registrant;

use crate::{Table, dim, emphasis, format_date_time, header, render_pagination_bar,
            sanitize, sanitize_or_dash, warning};

pub const EMPTY_LIST_MESSAGE: &str = "Nenhuma inscricao encontrada.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum ViewMode {
    /// One row per registrant.
    #[default]
    Table,
    /// One block per registrant, for narrow terminals.
    Cards,
}

#[rustfmt::skip]
const TABLE_HEADERS: [&str; 8] = [
    "ID", "Nome", "Email", "Telefone", "Curso", "Nivel", "Periodo", "Inscrito em",
];

#[must_use]
pub fn render_registrant_table(registrants: &[Registrant]) -> String {
    let mut table = Table::new(&TABLE_HEADERS);
    for it in registrants {
        table.push_row(vec![
            it.id.to_string(),
            sanitize(&it.name),
            sanitize(&it.email),
            sanitize_or_dash(it.phone.as_deref()),
            sanitize(&it.course),
            sanitize(it.programming_level.label()),
            sanitize_or_dash(it.period.as_deref()),
            format_date_time(it.created_at.as_ref()),
        ]);
    }
    table.render()
}

#[must_use]
pub fn render_registrant_cards(registrants: &[Registrant]) -> String {
    registrants
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_card(it: &Registrant) -> String {
    let field = |label: &str, value: String| format!("  {} {value}", dim(format!("{label:<9}")));
    [
        format!(
            "{} {}  {}",
            dim(format!("#{}", it.id)),
            header(sanitize(&it.name)),
            emphasis(format!("[{}]", sanitize(it.programming_level.label())))
        ),
        field("email", sanitize(&it.email)),
        field("telefone", sanitize_or_dash(it.phone.as_deref())),
        field("curso", sanitize(&it.course)),
        field("periodo", sanitize_or_dash(it.period.as_deref())),
        field("inscrito", format_date_time(it.created_at.as_ref())),
    ]
    .join("\n")
}

/// `Filtros: nome~"ana" nivel=INICIANTE`, or `None` when no filter is set.
#[must_use]
pub fn render_active_filters(criteria: &FilterCriteria) -> Option<String> {
    (!criteria.is_empty())
        .then(|| format!("{} {}", dim("Filtros:"), sanitize(&criteria.to_string())))
}

/// Filters line, the current page in the chosen mode (or the empty message), and the
/// pagination bar.
#[must_use]
pub fn render_registrant_view(state: &RegistrantListState, mode: ViewMode) -> String {
    let mut sections = vec![];

    if let Some(filters) = render_active_filters(state.criteria()) {
        sections.push(filters);
    }

    let page = state.page();
    if page.is_empty() {
        sections.push(warning(EMPTY_LIST_MESSAGE));
    } else {
        sections.push(match mode {
            ViewMode::Table => render_registrant_table(page.items()),
            ViewMode::Cards => render_registrant_cards(page.items()),
        });
    }

    sections.push(render_pagination_bar(state));
    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use minicurso_list_engine::{Action, FilterField};
    use minicurso_schema::ProgrammingLevel;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::strip_styles;

    fn ana() -> Registrant {
        Registrant {
            id: 7,
            name: "Ana \u{1b}[31mSouza".into(),
            email: "ana@ufx.br".into(),
            phone: None,
            course: "CC".into(),
            period: Some("3".into()),
            programming_level: ProgrammingLevel::Intermediate,
            expectation: None,
            created_at: NaiveDate::from_ymd_opt(2025, 3, 1)
                .and_then(|it| it.and_hms_opt(14, 5, 0)),
        }
    }

    fn loaded(registrants: Vec<Registrant>) -> RegistrantListState {
        let mut it = RegistrantListState::default();
        let ticket = it.begin_load();
        it.complete_load(ticket, Ok(registrants)).unwrap();
        it
    }

    #[test]
    fn test_table_row_is_sanitized_and_uses_fallbacks() {
        let rendered = strip_styles(&render_registrant_table(&[ana()]));
        let row = rendered.lines().nth(2).unwrap();
        assert_eq!(
            row.split_whitespace().collect::<Vec<_>>(),
            vec!["7", "Ana", "Souza", "ana@ufx.br", "-", "CC", "INTERMEDIARIO", "3", "01/03/2025", "14:05"]
        );
    }

    #[test]
    fn test_card_layout() {
        let rendered = strip_styles(&render_registrant_cards(&[ana()]));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "#7 Ana Souza  [INTERMEDIARIO]");
        assert_eq!(lines[2], "  telefone  -");
        assert_eq!(lines[5], "  inscrito  01/03/2025 14:05");
    }

    #[test]
    fn test_missing_created_at_shows_placeholder() {
        let it = Registrant {
            created_at: None,
            ..ana()
        };
        let rendered = strip_styles(&render_registrant_cards(&[it]));
        assert!(rendered.ends_with("inscrito  --"));
    }

    #[test]
    fn test_both_modes_share_filters_line() {
        let mut state = loaded(vec![ana()]);
        state.dispatch(Action::SetFilter(FilterField::Name, "ana".into()));

        for mode in [ViewMode::Table, ViewMode::Cards] {
            let rendered = strip_styles(&render_registrant_view(&state, mode));
            assert!(rendered.starts_with("Filtros: nome~\"ana\""), "{rendered}");
            assert!(rendered.ends_with("Mostrando 1-1 de 1  (10 por pagina)"));
        }
    }

    #[test]
    fn test_empty_view() {
        let mut state = loaded(vec![ana()]);
        state.dispatch(Action::SetFilter(FilterField::Email, "nobody".into()));
        let rendered = strip_styles(&render_registrant_view(&state, ViewMode::Cards));
        assert!(rendered.contains(EMPTY_LIST_MESSAGE));
        assert!(rendered.ends_with("Nenhum resultado  (10 por pagina)"));
    }
}
