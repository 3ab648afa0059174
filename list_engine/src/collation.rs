// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Name ordering close to what a pt-BR collator does, in three levels:
//!
//! 1. Base letters only, accents and case folded (`Álvaro` sorts with `alvaro`, before
//!    `Bruno`).
//! 2. Accents: an unaccented letter sorts before its accented forms (`agata` < `ágata`).
//! 3. Case: lowercase sorts before uppercase (`ana` < `Ana`).

use std::cmp::Ordering;

use minicurso_schema::Registrant;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Decompose (NFD), drop the combining marks, lowercase.
#[must_use]
pub fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect::<String>()
        .to_lowercase()
}

/// Decomposed and lowercased, with the combining marks kept.
fn accent_key(text: &str) -> String { text.nfd().collect::<String>().to_lowercase() }

/// Swaps the case of every char, so that plain code point order puts lowercase first.
fn case_key(text: &str) -> String {
    text.nfd()
        .flat_map(|ch| {
            let swapped: Vec<char> = if ch.is_uppercase() {
                ch.to_lowercase().collect()
            } else {
                ch.to_uppercase().collect()
            };
            swapped
        })
        .collect()
}

fn sort_key(text: &str) -> (String, String, String) {
    (collation_key(text), accent_key(text), case_key(text))
}

#[must_use]
pub fn compare_names(lhs: &str, rhs: &str) -> Ordering { sort_key(lhs).cmp(&sort_key(rhs)) }

/// Sorts in place by name. Each key is computed once.
pub fn sort_by_name(registrants: &mut [Registrant]) {
    registrants.sort_by_cached_key(|it| sort_key(&it.name));
}
