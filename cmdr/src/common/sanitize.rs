// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Every string that comes from the backend (names, emails, titles, error details) is
//! typed by somebody else and goes through [`sanitize`] before it is printed.

/// Removes ANSI escape sequences, then any remaining control character. Newlines and
/// tabs become a single space so one field can't break a table row.
#[must_use]
pub fn sanitize(input: &str) -> String {
    if input.is_ascii() && !input.bytes().any(|it| it.is_ascii_control()) {
        return input.to_owned();
    }
    // The stripper drops tabs and carriage returns, so whitespace is mapped first.
    let spaced = input.replace(['\n', '\r', '\t'], " ");
    strip_styles(&spaced)
        .chars()
        .filter(|ch| !ch.is_control())
        .collect()
}

/// `None` and blank strings render as `-`.
#[must_use]
pub fn sanitize_or_dash(input: Option<&str>) -> String {
    match input.map(str::trim) {
        Some(it) if !it.is_empty() => sanitize(it),
        _ => "-".to_owned(),
    }
}

/// Only the escape sequences, used on our own styled output (e.g.: in tests, and to
/// measure display width).
#[must_use]
pub fn strip_styles(input: &str) -> String {
    let bytes = strip_ansi_escapes::strip(input);
    String::from_utf8_lossy(&bytes).into_owned()
}
