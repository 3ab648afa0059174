// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Line prompts on stderr, so stdout stays clean for data. The password prompt puts the
//! terminal in raw mode and echoes nothing.

use std::{io::{self, BufRead, Write},
          path::PathBuf};

use crossterm::{event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
                terminal};

use crate::{MinicursoError, prompt_seg_normal};

fn terminal_io_error(action: &'static str, source: io::Error) -> MinicursoError {
    MinicursoError::Io {
        action,
        path: PathBuf::from("<terminal>"),
        source,
    }
}

/// Prints `prompt` and reads one line. `None` at end of input.
///
/// # Errors
///
/// When reading or writing fails.
pub fn read_line_with(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    prompt: &str,
) -> Result<Option<String>, MinicursoError> {
    write!(writer, "{}", prompt_seg_normal(prompt))
        .and_then(|()| writer.flush())
        .map_err(|error| terminal_io_error("write to", error))?;

    let mut line = String::new();
    let count = reader
        .read_line(&mut line)
        .map_err(|error| terminal_io_error("read from", error))?;
    if count == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}

/// # Errors
///
/// When stdin can't be read.
pub fn read_line(prompt: &str) -> Result<Option<String>, MinicursoError> {
    read_line_with(&mut io::stdin().lock(), &mut io::stderr(), prompt)
}

/// `s`, `sim`, `y` and `yes` (any case) confirm. Anything else, including end of input,
/// declines.
#[must_use]
pub fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    )
}

/// # Errors
///
/// When reading or writing fails.
pub fn confirm_with(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    prompt: &str,
) -> Result<bool, MinicursoError> {
    Ok(read_line_with(reader, writer, prompt)?.is_some_and(|it| is_yes(&it)))
}

/// # Errors
///
/// When stdin can't be read.
pub fn confirm(prompt: &str) -> Result<bool, MinicursoError> {
    confirm_with(&mut io::stdin().lock(), &mut io::stderr(), prompt)
}

/// Leaves raw mode on drop, also on early return.
#[derive(Debug)]
struct RawModeGuard;

impl RawModeGuard {
    fn try_new() -> Result<Self, MinicursoError> {
        terminal::enable_raw_mode().map_err(|error| terminal_io_error("configure", error))?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(error) = terminal::disable_raw_mode() {
            tracing::error!(message = "could not leave raw mode", error = %error);
        }
    }
}

/// What one key press does to the password being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyEffect {
    Push(char),
    Pop,
    Submit,
    Cancel,
    Ignore,
}

fn key_effect(key: KeyEvent) -> KeyEffect {
    if key.kind != KeyEventKind::Press {
        return KeyEffect::Ignore;
    }
    match key.code {
        KeyCode::Enter => KeyEffect::Submit,
        KeyCode::Esc => KeyEffect::Cancel,
        KeyCode::Char('c' | 'd') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyEffect::Cancel
        }
        KeyCode::Backspace => KeyEffect::Pop,
        KeyCode::Char(ch) => KeyEffect::Push(ch),
        _ => KeyEffect::Ignore,
    }
}

/// Reads a password without echo.
///
/// # Errors
///
/// [`MinicursoError::Cancelled`] on `Esc` or `Ctrl+C`, or a terminal error.
pub fn read_password(prompt: &str) -> Result<String, MinicursoError> {
    let mut stderr = io::stderr();
    write!(stderr, "{}", prompt_seg_normal(prompt))
        .and_then(|()| stderr.flush())
        .map_err(|error| terminal_io_error("write to", error))?;

    let mut password = String::new();
    let outcome = {
        let _guard = RawModeGuard::try_new()?;
        loop {
            let Event::Key(key) =
                event::read().map_err(|error| terminal_io_error("read from", error))?
            else {
                continue;
            };
            match key_effect(key) {
                KeyEffect::Push(ch) => password.push(ch),
                KeyEffect::Pop => {
                    password.pop();
                }
                KeyEffect::Submit => break Ok(()),
                KeyEffect::Cancel => break Err(MinicursoError::Cancelled),
                KeyEffect::Ignore => {}
            }
        }
    };
    eprintln!();
    outcome.map(|()| password)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("s", true)]
    #[test_case(" SIM ", true)]
    #[test_case("y", true)]
    #[test_case("n", false)]
    #[test_case("", false)]
    #[test_case("talvez", false)]
    fn test_is_yes(answer: &str, expected: bool) {
        assert_eq!(is_yes(answer), expected);
    }

    #[test]
    fn test_confirm_with_reads_one_line() {
        let mut input = Cursor::new("sim\nnao\n");
        let mut output = vec![];
        assert!(confirm_with(&mut input, &mut output, "Excluir? ").unwrap());
        assert!(!confirm_with(&mut input, &mut output, "Excluir? ").unwrap());
        assert!(!confirm_with(&mut input, &mut output, "Excluir? ").unwrap());
        let written = crate::strip_styles(&String::from_utf8(output).unwrap());
        assert_eq!(written, "Excluir? ".repeat(3));
    }

    #[test]
    fn test_read_line_strips_newline() {
        let mut input = Cursor::new("admin\r\n");
        let mut output = vec![];
        let line = read_line_with(&mut input, &mut output, "Usuario: ").unwrap();
        assert_eq!(line.as_deref(), Some("admin"));
    }

    #[test_case(KeyCode::Char('a'), KeyModifiers::NONE, KeyEffect::Push('a'))]
    #[test_case(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEffect::Cancel)]
    #[test_case(KeyCode::Backspace, KeyModifiers::NONE, KeyEffect::Pop)]
    #[test_case(KeyCode::Enter, KeyModifiers::NONE, KeyEffect::Submit)]
    #[test_case(KeyCode::Tab, KeyModifiers::NONE, KeyEffect::Ignore)]
    fn test_key_effect(code: KeyCode, modifiers: KeyModifiers, expected: KeyEffect) {
        assert_eq!(key_effect(KeyEvent::new(code, modifiers)), expected);
    }
}
