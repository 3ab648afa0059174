// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use minicurso_list_engine::{NavState, PageMarker, PageResult, RegistrantListState};
use minicurso_schema::Registrant;

use crate::{dim, emphasis, normal};

/// `Mostrando 11-20 de 23`, or `Nenhum resultado` for an empty filtered set.
#[must_use]
pub fn pagination_summary(page: &PageResult<'_, Registrant>) -> String {
    match page {
        PageResult::Empty => "Nenhum resultado".to_owned(),
        PageResult::Page(it) => format!(
            "Mostrando {}-{} de {}",
            it.first_shown, it.last_shown, it.total_items
        ),
    }
}

/// `1 … 4 [5] 6 … 10`. The current page is bracketed.
#[must_use]
pub fn page_window_line(window: &[PageMarker], current: usize) -> String {
    window
        .iter()
        .map(|marker| match marker {
            PageMarker::Page(number) if *number == current => emphasis(format!("[{number}]")),
            PageMarker::Page(number) => normal(number),
            PageMarker::Gap => dim(marker),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `« primeira  ‹ anterior  proxima ›  ultima »`, disabled controls are dimmed.
#[must_use]
pub fn nav_line(nav: NavState) -> String {
    let control = |label: &str, enabled: bool| {
        if enabled { normal(label) } else { dim(label) }
    };
    [
        control("« primeira", nav.first),
        control("‹ anterior", nav.prev),
        control("proxima ›", nav.next),
        control("ultima »", nav.last),
    ]
    .join("  ")
}

/// Summary line, then (only when there is more than one page) the page window and the
/// navigation controls.
#[must_use]
pub fn render_pagination_bar(state: &RegistrantListState) -> String {
    let page = state.page();
    let mut lines = vec![format!(
        "{}  {}",
        pagination_summary(&page),
        dim(format!("({} por pagina)", state.page_size()))
    )];

    let window = state.page_window();
    if !window.is_empty() {
        lines.push(page_window_line(&window, state.current_page()));
    }
    let nav = page.nav();
    if nav.any() {
        lines.push(nav_line(nav));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use minicurso_list_engine::{Action, compute_visible_pages};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::strip_styles;

    fn loaded(count: usize) -> RegistrantListState {
        let mut it = RegistrantListState::default();
        let ticket = it.begin_load();
        let registrants = (0..count)
            .map(|index| Registrant {
                id: i64::try_from(index).unwrap(),
                name: format!("Pessoa {index:03}"),
                ..Default::default()
            })
            .collect();
        it.complete_load(ticket, Ok(registrants)).unwrap();
        it
    }

    #[test]
    fn test_page_window_line_brackets_current() {
        let window = compute_visible_pages(5, 10);
        assert_eq!(strip_styles(&page_window_line(&window, 5)), "1 … 4 [5] 6 … 10");
    }

    #[test]
    fn test_bar_for_middle_page() {
        let mut state = loaded(23);
        state.dispatch(Action::NextPage);

        let bar = strip_styles(&render_pagination_bar(&state));
        let lines: Vec<&str> = bar.lines().collect();

        assert_eq!(lines[0], "Mostrando 11-20 de 23  (10 por pagina)");
        assert_eq!(lines[1], "1 [2] 3");
        assert_eq!(lines[2], "« primeira  ‹ anterior  proxima ›  ultima »");
    }

    #[test]
    fn test_bar_for_single_page_has_no_controls() {
        let bar = strip_styles(&render_pagination_bar(&loaded(4)));
        assert_eq!(bar, "Mostrando 1-4 de 4  (10 por pagina)");
    }

    #[test]
    fn test_bar_for_empty_set() {
        let bar = strip_styles(&render_pagination_bar(&RegistrantListState::default()));
        assert_eq!(bar, "Nenhum resultado  (10 por pagina)");
    }
}
