// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use minicurso_schema::{Event, RegistrationStatus};

use super::ui_str;
use crate::{ApiClient, MinicursoError, Toast, dim, header,
            render::{NO_EVENT_MESSAGE, PROGRAMME_SOON_MESSAGE, render_event_details,
                    render_programme}};

/// Event block, programme, then either the closed notice or how to register.
#[must_use]
pub fn render_signup_page(event: Option<&Event>, count: Option<u64>) -> String {
    let Some(event) = event else {
        return [dim(NO_EVENT_MESSAGE), dim(PROGRAMME_SOON_MESSAGE)].join("\n\n");
    };

    let footer = match event.registration_status() {
        RegistrationStatus::Open => dim(ui_str::info::HOW_TO_REGISTER),
        RegistrationStatus::Closed => {
            ui_str::closed_notice_msg(ui_str::info::CLOSED_TITLE, ui_str::info::CLOSED_TEXT)
        }
        RegistrationStatus::SoldOut => {
            ui_str::closed_notice_msg(ui_str::info::SOLD_OUT_TITLE, ui_str::info::SOLD_OUT_TEXT)
        }
    };

    [
        render_event_details(event, count),
        header(ui_str::info::PROGRAMME_HEADER),
        render_programme(&event.modules),
        footer,
    ]
    .join("\n\n")
}

/// The event and the counter are fetched concurrently. A missing counter only blanks
/// its line.
///
/// # Errors
///
/// When the event can't be fetched.
pub async fn try_info(client: &ApiClient) -> Result<(), MinicursoError> {
    let (event, count) = tokio::join!(client.get_event(), client.registration_count());

    let event = match event {
        Ok(it) => it,
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::warn!(message = "event unavailable", error = ?error);
            Toast::error(ui_str::info::LOAD_FAILED).show();
            return Err(error.into());
        }
    };
    let count = count
        .inspect_err(|error| tracing::warn!(message = "count unavailable", error = %error))
        .ok()
        .map(|it| it.total);

    println!("{}", render_signup_page(event.as_ref(), count));
    Ok(())
}
