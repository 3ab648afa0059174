/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use minicurso_schema::Registrant;

use crate::{FilterCriteria, FilterField, NavState, PageResult, PageSize, PageWindow,
            SourceError, apply_filters_owned, clamp_page, compute_visible_pages,
            paginate, sort_by_name, total_pages};

/// Everything a user can do to the list view, without IO. The browse command table in
/// `mc-admin` maps typed commands to these, and [`RegistrantListState::dispatch`] is the
/// only place they are interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetFilter(FilterField, String),
    SetCriteria(FilterCriteria),
    ClearFilters,
    SetPageSize(PageSize),
    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
    /// Clamped into `[1, total_pages]`.
    GoToPage(usize),
}

/// Issued by [`RegistrantListState::begin_load`]. Only the most recently issued ticket can
/// complete a load, so when loads overlap the last request wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { count: usize },
    /// A newer load was started after this one. Nothing changed.
    Discarded { ticket: LoadTicket, latest: LoadTicket },
}

/// The view state of the registrant list.
///
/// Invariants, kept by every method:
/// 1. `filtered` is an order preserving subsequence of `all`.
/// 2. `current_page` is in `[1, max(1, ceil(filtered.len() / page_size))]`.
/// 3. Any change to the criteria or the page size resets `current_page` to 1.
/// 4. `all` is only ever replaced wholesale by a completed load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrantListState {
    all: Vec<Registrant>,
    filtered: Vec<Registrant>,
    criteria: FilterCriteria,
    current_page: usize,
    page_size: PageSize,
    latest_ticket: u64,
    has_loaded: bool,
}

impl Default for RegistrantListState {
    fn default() -> Self {
        Self {
            all: vec![],
            filtered: vec![],
            criteria: FilterCriteria::default(),
            current_page: 1,
            page_size: PageSize::default(),
            latest_ticket: 0,
            has_loaded: false,
        }
    }
}

// Read.
impl RegistrantListState {
    #[must_use]
    pub fn all_registrants(&self) -> &[Registrant] { &self.all }

    #[must_use]
    pub fn filtered_registrants(&self) -> &[Registrant] { &self.filtered }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria { &self.criteria }

    #[must_use]
    pub fn current_page(&self) -> usize { self.current_page }

    #[must_use]
    pub fn page_size(&self) -> PageSize { self.page_size }

    /// `1` for an empty filtered set.
    #[must_use]
    pub fn total_pages(&self) -> usize { total_pages(self.filtered.len(), self.page_size) }

    /// `false` until the first load completes.
    #[must_use]
    pub fn has_loaded(&self) -> bool { self.has_loaded }

    #[must_use]
    pub fn page(&self) -> PageResult<'_, Registrant> {
        paginate(&self.filtered, self.current_page, self.page_size)
    }

    #[must_use]
    pub fn nav(&self) -> NavState { self.page().nav() }

    /// Empty when there is nothing to navigate.
    #[must_use]
    pub fn page_window(&self) -> PageWindow {
        if self.filtered.is_empty() {
            return PageWindow::new();
        }
        compute_visible_pages(self.current_page, self.total_pages())
    }
}

// Reduce.
impl RegistrantListState {
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(message = "dispatch", action = ?action, page = self.current_page);
        match action {
            Action::SetFilter(field, value) => {
                self.criteria.set(field, value);
                self.refilter();
            }
            Action::SetCriteria(criteria) => {
                self.criteria = criteria;
                self.refilter();
            }
            Action::ClearFilters => {
                self.criteria = FilterCriteria::default();
                self.refilter();
            }
            Action::SetPageSize(page_size) => {
                self.page_size = page_size;
                self.current_page = 1;
            }
            Action::FirstPage => self.current_page = 1,
            Action::PrevPage => self.go_to_page(self.current_page.saturating_sub(1)),
            Action::NextPage => self.go_to_page(self.current_page.saturating_add(1)),
            Action::LastPage => self.current_page = self.total_pages(),
            Action::GoToPage(page) => self.go_to_page(page),
        }
    }

    fn go_to_page(&mut self, page: usize) {
        self.current_page = clamp_page(page, self.total_pages());
    }

    /// Re-derives `filtered` from `all` and goes back to page 1.
    fn refilter(&mut self) {
        self.filtered = apply_filters_owned(&self.all, &self.criteria);
        self.current_page = 1;
    }
}

// Load.
impl RegistrantListState {
    /// Starts a load. Any ticket issued before this one becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_ticket += 1;
        LoadTicket(self.latest_ticket)
    }

    /// Applies the result of the load identified by `ticket`.
    ///
    /// - Stale ticket: discarded, success or failure alike.
    /// - Failure: nothing changes (the last good list stays on screen), the error is
    ///   handed back so the caller can notify the user.
    /// - Success: `all` is replaced by the new list sorted by name, the criteria are
    ///   cleared and the view goes back to page 1.
    ///
    /// # Errors
    ///
    /// The load's own [`SourceError`], when the ticket is current.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Registrant>, SourceError>,
    ) -> Result<LoadOutcome, SourceError> {
        let latest = LoadTicket(self.latest_ticket);
        if ticket != latest {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "stale load discarded",
                ticket = ?ticket,
                latest = ?latest,
                ok = result.is_ok()
            );
            return Ok(LoadOutcome::Discarded { ticket, latest });
        }

        match result {
            Err(error) => {
                tracing::warn!(message = "load failed, keeping previous list", error = %error);
                Err(error)
            }
            Ok(mut registrants) => {
                sort_by_name(&mut registrants);
                let count = registrants.len();
                self.all = registrants;
                self.criteria = FilterCriteria::default();
                self.filtered = self.all.clone();
                self.current_page = 1;
                self.has_loaded = true;
                tracing::debug!(message = "load applied", count = count);
                Ok(LoadOutcome::Applied { count })
            }
        }
    }
}
