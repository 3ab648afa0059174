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

//! Slicing a filtered sequence into fixed size pages.
//!
//! | filtered len | page size | total pages | page 1      | page 3       |
//! |--------------|-----------|-------------|-------------|--------------|
//! | 23           | 10        | 3           | items 1..10 | items 21..23 |
//! | 0            | any       | 1           | `Empty`     | `Empty`      |
//!
//! An empty sequence still has one (empty) page, so the current page is always in
//! `[1, total_pages]`. [`paginate`] reports it as [`PageResult::Empty`] so the renderers
//! can show "no results" and hide the navigation.

use std::{fmt::{Display, Formatter, Result as FmtResult},
          str::FromStr};

use crate::EngineError;

/// A page size from the fixed set the UI offers. Only constructible through
/// [`TryFrom<usize>`] (or [`FromStr`]), so any value that exists is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageSize(usize);

impl PageSize {
    pub const ALLOWED: [usize; 4] = [10, 25, 50, 100];

    #[must_use]
    pub fn get(self) -> usize { self.0 }

    fn allowed_list() -> String {
        Self::ALLOWED
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for PageSize {
    fn default() -> Self { PageSize(Self::ALLOWED[0]) }
}

impl TryFrom<usize> for PageSize {
    type Error = EngineError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if Self::ALLOWED.contains(&value) {
            Ok(PageSize(value))
        } else {
            Err(EngineError::Validation {
                what: "page size",
                value: value.to_string(),
                allowed: Self::allowed_list(),
            })
        }
    }
}

impl FromStr for PageSize {
    type Err = EngineError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().parse::<usize>() {
            Ok(value) => PageSize::try_from(value),
            Err(_) => Err(EngineError::Validation {
                what: "page size",
                value: input.to_owned(),
                allowed: Self::allowed_list(),
            }),
        }
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "{}", self.0) }
}

/// `max(1, ceil(len / page_size))`.
#[must_use]
pub fn total_pages(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Out of range requests are a caller bug, not an error. They are clamped into
/// `[1, total_pages]`.
#[must_use]
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// One page worth of items plus what the pagination bar needs. Indexes are 1-based and
/// inclusive, ready for "Mostrando 11-20 de 23".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
    pub first_shown: usize,
    pub last_shown: usize,
    pub total_items: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageResult<'a, T> {
    /// The filtered sequence is empty: no slice, no navigation.
    Empty,
    Page(Page<'a, T>),
}

impl<'a, T> PageResult<'a, T> {
    #[must_use]
    pub fn items(&self) -> &'a [T] {
        match self {
            PageResult::Empty => &[],
            PageResult::Page(page) => page.items,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { matches!(self, PageResult::Empty) }

    #[must_use]
    pub fn nav(&self) -> NavState {
        match self {
            PageResult::Empty => NavState::default(),
            PageResult::Page(page) => NavState::new(page.page, page.total_pages),
        }
    }
}

/// Slices `filtered` for the given 1-based `page`.
///
/// The caller owns the "reset to page 1 when the sequence or the page size changes" rule
/// ([`crate::RegistrantListState`] does it by construction). A page outside
/// `[1, total_pages]` is clamped, it never panics.
#[must_use]
pub fn paginate<T>(filtered: &[T], page: usize, page_size: PageSize) -> PageResult<'_, T> {
    let total_items = filtered.len();
    if total_items == 0 {
        return PageResult::Empty;
    }

    let total_pages = total_pages(total_items, page_size);
    let page = clamp_page(page, total_pages);
    let start_index = (page - 1) * page_size.get();
    let end_index = (start_index + page_size.get()).min(total_items);

    PageResult::Page(Page {
        items: &filtered[start_index..end_index],
        page,
        total_pages,
        first_shown: start_index + 1,
        last_shown: end_index,
        total_items,
    })
}

/// Which navigation controls are enabled. All disabled by default (the empty state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NavState {
    pub first: bool,
    pub prev: bool,
    pub next: bool,
    pub last: bool,
}

impl NavState {
    #[must_use]
    pub fn new(page: usize, total_pages: usize) -> Self {
        let can_go_back = page > 1;
        let can_go_forward = page < total_pages;
        NavState {
            first: can_go_back,
            prev: can_go_back,
            next: can_go_forward,
            last: can_go_forward,
        }
    }

    #[must_use]
    pub fn any(&self) -> bool { self.first || self.prev || self.next || self.last }
}
