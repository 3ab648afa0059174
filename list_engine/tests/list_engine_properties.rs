// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Properties of the whole fetch ─▶ sort ─▶ filter ─▶ paginate pipeline, driven through
//! the public API only.

use std::sync::{Arc,
                atomic::{AtomicUsize, Ordering}};

use async_trait::async_trait;
use minicurso_list_engine::{Action, ExportBlob, FilterCriteria, FilterField, LoadOutcome,
                            MutationOutcome, PageResult, PageSize, RegistrantListController,
                            RegistrantListState, RegistrantSource, SourceError,
                            apply_filters, paginate};
use minicurso_schema::{ProgrammingLevel, Registrant};
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;

fn fixture() -> Vec<Registrant> {
    let names = [
        "Ana Clara", "Bruno", "Álvaro", "Camila", "Daniel", "Érika", "Fábio", "Gabriela",
        "Heitor", "Isabela", "João", "Karina", "Lucas", "Mariana", "Nicolas", "Olívia",
        "Paulo", "Queila", "Rafael", "Sofia", "Tiago", "Úrsula", "Vitor",
    ];
    names
        .iter()
        .enumerate()
        .map(|(index, name)| Registrant {
            id: i64::try_from(index).unwrap() + 1,
            name: (*name).to_string(),
            email: format!(
                "{}@{}",
                name.to_lowercase(),
                if index % 3 == 0 { "uni.br" } else { "mail.com" }
            ),
            course: ["Computação", "Sistemas", "Engenharia"][index % 3].to_string(),
            programming_level: ProgrammingLevel::KNOWN[index % 3].clone(),
            ..Default::default()
        })
        .collect()
}

fn criteria_samples() -> Vec<FilterCriteria> {
    let empty = FilterCriteria::default();
    vec![
        empty.clone(),
        empty.clone().with(FilterField::Name, "a"),
        empty.clone().with(FilterField::Email, "UNI"),
        empty.clone().with(FilterField::Course, "sis"),
        empty.clone().with(FilterField::Level, "AVANCADO"),
        empty
            .clone()
            .with(FilterField::Name, "a")
            .with(FilterField::Level, "INICIANTE"),
        empty.with(FilterField::Name, "não existe"),
    ]
}

fn ids(it: &[&Registrant]) -> Vec<i64> { it.iter().map(|r| r.id).collect() }

#[test]
fn test_filter_is_idempotent() {
    let all = fixture();
    for criteria in criteria_samples() {
        let once: Vec<Registrant> = apply_filters(&all, &criteria).into_iter().cloned().collect();
        let twice = apply_filters(&once, &criteria);
        assert_eq!(ids(&twice), once.iter().map(|r| r.id).collect::<Vec<_>>());
    }
}

#[test]
fn test_adding_a_constraint_never_grows_the_result() {
    let all = fixture();
    for criteria in criteria_samples() {
        let before = apply_filters(&all, &criteria).len();
        for (field, value) in [
            (FilterField::Name, "o"),
            (FilterField::Email, "mail"),
            (FilterField::Course, "comp"),
            (FilterField::Level, "INTERMEDIARIO"),
        ] {
            let narrower = criteria.clone().with(field, value);
            assert!(apply_filters(&all, &narrower).len() <= before);
        }
    }
}

#[test]
fn test_filter_output_is_an_ordered_subsequence() {
    let all = fixture();
    for criteria in criteria_samples() {
        let result = apply_filters(&all, &criteria);
        let mut cursor = all.iter();
        for kept in result {
            assert!(cursor.any(|it| std::ptr::eq(it, kept)));
        }
    }
}

#[test]
fn test_pages_concatenate_to_the_filtered_sequence() {
    let all = fixture();
    for page_size in PageSize::ALLOWED {
        let page_size = PageSize::try_from(page_size).unwrap();
        for criteria in criteria_samples() {
            let filtered = apply_filters(&all, &criteria);
            let mut rebuilt = vec![];
            let mut page = 1;
            loop {
                match paginate(&filtered, page, page_size) {
                    PageResult::Empty => break,
                    PageResult::Page(it) => {
                        rebuilt.extend(it.items.iter().copied());
                        if page == it.total_pages {
                            break;
                        }
                        page += 1;
                    }
                }
            }
            assert_eq!(ids(&rebuilt), ids(&filtered));
        }
    }
}

#[test]
fn test_current_page_stays_in_bounds_through_any_action_sequence() {
    let mut state = RegistrantListState::default();
    let ticket = state.begin_load();
    state.complete_load(ticket, Ok(fixture())).unwrap();

    let actions = vec![
        Action::LastPage,
        Action::NextPage,
        Action::SetFilter(FilterField::Course, "comp".into()),
        Action::GoToPage(999),
        Action::SetPageSize(PageSize::try_from(25).unwrap()),
        Action::PrevPage,
        Action::SetFilter(FilterField::Name, "zzz".into()),
        Action::LastPage,
        Action::ClearFilters,
        Action::GoToPage(0),
        Action::LastPage,
    ];
    for action in actions {
        state.dispatch(action);
        let max = state
            .filtered_registrants()
            .len()
            .div_ceil(state.page_size().get())
            .max(1);
        assert!((1..=max).contains(&state.current_page()));
    }
}

/// In-memory provider. `fail_next_fetch` makes the next fetch fail once.
#[derive(Debug, Default)]
struct FakeSource {
    registrants: Mutex<Vec<Registrant>>,
    fail_next_fetch: Mutex<Option<SourceError>>,
    fetch_count: AtomicUsize,
}

#[async_trait]
impl RegistrantSource for FakeSource {
    async fn fetch_registrants(&self) -> Result<Vec<Registrant>, SourceError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.fail_next_fetch.lock().await.take() {
            return Err(error);
        }
        Ok(self.registrants.lock().await.clone())
    }

    async fn delete_registrant(&self, id: i64) -> Result<(), SourceError> {
        let mut registrants = self.registrants.lock().await;
        let Some(index) = registrants.iter().position(|it| it.id == id) else {
            return Err(SourceError::NotFound { what: format!("inscricao {id}") });
        };
        registrants.remove(index);
        Ok(())
    }

    async fn export_registrants(&self) -> Result<ExportBlob, SourceError> {
        Ok(ExportBlob {
            bytes: b"PK\x03\x04".to_vec(),
            content_type: Some("application/vnd.ms-excel".into()),
        })
    }
}

fn fake_source() -> Arc<FakeSource> {
    Arc::new(FakeSource {
        registrants: Mutex::new(fixture()),
        ..Default::default()
    })
}

#[tokio::test]
async fn test_reload_sorts_by_name_with_accents_folded() {
    let mut controller = RegistrantListController::new(fake_source());

    let outcome = controller.reload().await.unwrap();

    assert_eq!(outcome, LoadOutcome::Applied { count: 23 });
    let names: Vec<&str> = controller
        .state()
        .all_registrants()
        .iter()
        .take(3)
        .map(|it| it.name.as_str())
        .collect();
    assert_eq!(names, vec!["Álvaro", "Ana Clara", "Bruno"]);
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_data() {
    let source = fake_source();
    let mut controller = RegistrantListController::new(source.clone());
    controller.reload().await.unwrap();
    controller.dispatch(Action::SetFilter(FilterField::Course, "sis".into()));
    controller.dispatch(Action::NextPage);
    let before = controller.state().clone();

    *source.fail_next_fetch.lock().await = Some(SourceError::Transport {
        message: "connection refused".into(),
    });
    let result = controller.reload().await;

    assert!(matches!(result, Err(SourceError::Transport { .. })));
    assert_eq!(controller.state(), &before);
}

#[tokio::test]
async fn test_delete_triggers_a_full_reload() {
    let source = fake_source();
    let mut controller = RegistrantListController::new(source.clone());
    controller.reload().await.unwrap();
    assert_eq!(source.fetch_count.load(Ordering::SeqCst), 1);

    let outcome = controller.delete(5).await.unwrap();

    assert_eq!(outcome, MutationOutcome::Reloaded(LoadOutcome::Applied { count: 22 }));
    assert_eq!(source.fetch_count.load(Ordering::SeqCst), 2);
    assert!(controller.state().all_registrants().iter().all(|it| it.id != 5));

    let error = controller.delete(5).await.unwrap_err();
    assert!(matches!(error, SourceError::NotFound { .. }));
    assert_eq!(source.fetch_count.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_export_hands_back_the_blob() {
    let controller = RegistrantListController::new(fake_source());
    let blob = controller.export().await.unwrap();
    assert_eq!(blob.len(), 4);
}

#[test]
fn test_overlapping_loads_last_request_wins() {
    let mut state = RegistrantListState::default();
    let first = state.begin_load();
    let second = state.begin_load();

    let newest = vec![Registrant { id: 2, name: "Nova".into(), ..Default::default() }];
    let outcome = state.complete_load(second, Ok(newest)).unwrap();
    assert_eq!(outcome, LoadOutcome::Applied { count: 1 });

    // The older response arrives late and must not overwrite the newer one.
    let stale = fixture();
    let outcome = state.complete_load(first, Ok(stale)).unwrap();
    assert_eq!(outcome, LoadOutcome::Discarded { ticket: first, latest: second });
    assert_eq!(state.all_registrants().len(), 1);

    // A late failure is discarded too.
    let outcome = state
        .complete_load(first, Err(SourceError::Decode { message: "eof".into() }))
        .unwrap();
    assert!(matches!(outcome, LoadOutcome::Discarded { .. }));
}
