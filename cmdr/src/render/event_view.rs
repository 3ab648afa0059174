// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use minicurso_schema::{Event, RegistrationStatus};

use crate::{dim, emphasis, error, format_long_date, format_time, format_time_range, header,
            sanitize, sanitize_or_dash, warning};

pub const NO_EVENT_MESSAGE: &str = "Nenhum evento cadastrado.";
pub const PLACEHOLDER: &str = "--";

fn field(label: &str, value: impl AsRef<str>) -> String {
    format!("  {} {}", dim(format!("{label:<10}")), value.as_ref())
}

/// `08:00 as 12:00`, `08:00` when only the start is known, `--` otherwise.
#[must_use]
pub fn event_schedule(event: &Event) -> String {
    format_time_range(event.start_time.as_deref(), event.end_time.as_deref())
        .or_else(|| event.start_time.as_deref().map(|it| format_time(it).to_owned()))
        .map_or_else(|| PLACEHOLDER.to_owned(), |it| sanitize(&it))
}

#[must_use]
pub fn registration_status_badge(status: RegistrationStatus) -> String {
    match status {
        RegistrationStatus::Open => emphasis("Inscricoes abertas"),
        RegistrationStatus::Closed => warning("Inscricoes encerradas"),
        RegistrationStatus::SoldOut => error("Vagas esgotadas"),
    }
}

/// The public information block. `count` is the live registrant counter, when it could
/// be fetched.
#[must_use]
pub fn render_event_details(event: &Event, count: Option<u64>) -> String {
    let seats = match (event.available_seats, event.total_seats) {
        (Some(available), Some(total)) => format!("{available} de {total} disponiveis"),
        (Some(available), None) => format!("{available} disponiveis"),
        (None, Some(total)) => format!("{total} no total"),
        (None, None) => PLACEHOLDER.to_owned(),
    };

    [
        header(sanitize(&event.title)),
        field(
            "Data",
            event
                .date
                .map_or_else(|| PLACEHOLDER.to_owned(), format_long_date),
        ),
        field("Horario", event_schedule(event)),
        field("Local", sanitize_or_dash(event.place.as_deref())),
        field(
            "Carga",
            sanitize_or_dash(event.total_workload_formatted.as_deref()),
        ),
        field("Vagas", seats),
        field(
            "Inscritos",
            count.map_or_else(|| PLACEHOLDER.to_owned(), |it| it.to_string()),
        ),
        field("Status", registration_status_badge(event.registration_status())),
    ]
    .join("\n")
}

/// The four dashboard numbers. Without an event only the counter is known.
#[must_use]
pub fn render_dashboard(count: Option<u64>, event: Option<&Event>) -> String {
    let inscritos = count.unwrap_or_default().to_string();
    let (vagas, modulos, status) = match event {
        Some(event) => (
            event
                .available_seats
                .map_or_else(|| PLACEHOLDER.to_owned(), |it| it.to_string()),
            event.modules.len().to_string(),
            if event.registrations_open.unwrap_or_default() {
                emphasis("Abertas")
            } else {
                warning("Fechadas")
            },
        ),
        None => (PLACEHOLDER.to_owned(), "0".to_owned(), dim(PLACEHOLDER)),
    };

    [
        header("Dashboard"),
        field("Inscritos", inscritos),
        field("Vagas", vagas),
        field("Modulos", modulos),
        field("Inscricoes", status),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::strip_styles;

    fn event() -> Event {
        Event {
            title: "Minicurso de Rust".into(),
            date: NaiveDate::from_ymd_opt(2025, 5, 17),
            start_time: Some("08:00:00".into()),
            end_time: Some("12:00:00".into()),
            place: Some("Lab 3".into()),
            total_seats: Some(40),
            available_seats: Some(12),
            registrations_open: Some(true),
            total_workload_formatted: Some("4h".into()),
            ..Default::default()
        }
    }

    #[test_case(Some("08:00:00"), Some("12:00"), "08:00 as 12:00")]
    #[test_case(Some("08:00"), None, "08:00")]
    #[test_case(None, Some("12:00"), "--")]
    fn test_event_schedule(start: Option<&str>, end: Option<&str>, expected: &str) {
        let it = Event {
            start_time: start.map(Into::into),
            end_time: end.map(Into::into),
            ..Default::default()
        };
        assert_eq!(event_schedule(&it), expected);
    }

    #[test]
    fn test_event_details() {
        let rendered = strip_styles(&render_event_details(&event(), Some(28)));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Minicurso de Rust");
        assert_eq!(lines[1], "  Data       sábado, 17 de maio de 2025");
        assert_eq!(lines[2], "  Horario    08:00 as 12:00");
        assert_eq!(lines[5], "  Vagas      12 de 40 disponiveis");
        assert_eq!(lines[6], "  Inscritos  28");
        assert_eq!(lines[7], "  Status     Inscricoes abertas");
    }

    #[test]
    fn test_event_details_sold_out() {
        let it = Event {
            available_seats: Some(0),
            ..event()
        };
        let rendered = strip_styles(&render_event_details(&it, None));
        assert!(rendered.contains("  Inscritos  --"));
        assert!(rendered.ends_with("Vagas esgotadas"));
    }

    #[test]
    fn test_dashboard() {
        let rendered = strip_styles(&render_dashboard(Some(28), Some(&event())));
        assert_eq!(
            rendered,
            "Dashboard\n  Inscritos  28\n  Vagas      12\n  Modulos    0\n  Inscricoes Abertas"
        );
    }

    #[test]
    fn test_dashboard_without_event() {
        let rendered = strip_styles(&render_dashboard(None, None));
        assert!(rendered.contains("  Inscritos  0"));
        assert!(rendered.contains("  Vagas      --"));
        assert!(rendered.ends_with("  Inscricoes --"));
    }
}
