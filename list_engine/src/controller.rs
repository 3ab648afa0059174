// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Action, ExportBlob, LoadOutcome, RegistrantListState, RegistrantSource,
            SourceError};

/// Owns the one [`RegistrantListState`] of a view session and runs loads, deletes and
/// exports against a [`RegistrantSource`].
///
/// Every method takes `&mut self`, so loads through the controller never overlap: each
/// [`reload`](Self::reload) begins and completes its ticket before the next one starts.
/// Callers that need overlapping loads drive [`RegistrantListState::begin_load`] and
/// [`RegistrantListState::complete_load`] directly, where the last request wins.
#[derive(Debug)]
pub struct RegistrantListController<S> {
    source: S,
    state: RegistrantListState,
}

/// What happened after a successful mutation. The mutation itself went through, the
/// reload that follows it may still have failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Reloaded(LoadOutcome),
    ReloadFailed(SourceError),
}

impl<S: RegistrantSource> RegistrantListController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: RegistrantListState::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &RegistrantListState { &self.state }

    #[must_use]
    pub fn source(&self) -> &S { &self.source }

    pub fn dispatch(&mut self, action: Action) { self.state.dispatch(action); }

    /// Fetches the whole list again.
    ///
    /// # Errors
    ///
    /// The fetch error. The previous list is kept.
    pub async fn reload(&mut self) -> Result<LoadOutcome, SourceError> {
        let ticket = self.state.begin_load();
        let result = self.source.fetch_registrants().await;
        self.state.complete_load(ticket, result)
    }

    /// Deletes on the backend, then reloads everything.
    ///
    /// # Errors
    ///
    /// The delete error, in which case no reload is attempted.
    pub async fn delete(&mut self, id: i64) -> Result<MutationOutcome, SourceError> {
        self.source.delete_registrant(id).await?;
        tracing::debug!(message = "registrant deleted, reloading", id = id);
        Ok(match self.reload().await {
            Ok(outcome) => MutationOutcome::Reloaded(outcome),
            Err(error) => MutationOutcome::ReloadFailed(error),
        })
    }

    /// # Errors
    ///
    /// Whatever the source reports. Not retried.
    pub async fn export(&self) -> Result<ExportBlob, SourceError> {
        self.source.export_registrants().await
    }
}
