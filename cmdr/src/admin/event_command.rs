// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use minicurso_schema::{Event, EventUpdate};

use super::{AdminContext, EventFields, ui_str};
use crate::{MinicursoError, Toast,
            render::{NO_EVENT_MESSAGE, render_dashboard, render_event_details}};

/// Counter and event are fetched concurrently. Either one failing only blanks its part of
/// the dashboard.
///
/// # Errors
///
/// Never fails on API errors. Kept fallible like the other commands.
pub async fn try_dashboard(context: &AdminContext) -> Result<(), MinicursoError> {
    let client = context.public_client();
    let (count, event) = tokio::join!(client.registration_count(), client.get_event());

    let count = count
        .inspect_err(|error| tracing::warn!(message = "count unavailable", error = %error))
        .ok()
        .map(|it| it.total);
    let event = event
        .inspect_err(|error| tracing::warn!(message = "event unavailable", error = %error))
        .ok()
        .flatten();

    println!("{}", render_dashboard(count, event.as_ref()));
    Ok(())
}

/// # Errors
///
/// When the event can't be fetched.
pub async fn try_show_event(context: &AdminContext) -> Result<(), MinicursoError> {
    let client = context.public_client();
    let (count, event) = tokio::join!(client.registration_count(), client.get_event());
    let event = event.map_err(|error| context.report_failure(ui_str::event::LOAD_FAILED, error))?;

    match event {
        Some(event) => println!(
            "{}",
            render_event_details(&event, count.ok().map(|it| it.total))
        ),
        None => Toast::info(NO_EVENT_MESSAGE).show(),
    }
    Ok(())
}

/// Overlays the flags the user passed on the current settings. Without an event the
/// update starts from an empty form.
#[must_use]
pub fn merge_event_update(current: Option<&Event>, fields: EventFields) -> EventUpdate {
    let mut update = current.map(EventUpdate::from).unwrap_or_else(|| EventUpdate {
        registrations_open: true,
        ..Default::default()
    });

    let non_blank = |it: String| {
        let it = it.trim().to_owned();
        (!it.is_empty()).then_some(it)
    };

    if let Some(title) = fields.title {
        update.title = title.trim().to_owned();
    }
    if let Some(date) = fields.date {
        update.date = Some(date);
    }
    if let Some(start) = fields.start {
        update.start_time = non_blank(start);
    }
    if let Some(end) = fields.end {
        update.end_time = non_blank(end);
    }
    if let Some(place) = fields.place {
        update.place = non_blank(place);
    }
    if let Some(seats) = fields.seats {
        update.total_seats = Some(seats);
    }
    if fields.open {
        update.registrations_open = true;
    }
    if fields.close {
        update.registrations_open = false;
    }
    update
}

/// # Errors
///
/// When the event can't be fetched or the update is refused.
pub async fn try_update_event(
    context: &AdminContext,
    fields: EventFields,
) -> Result<(), MinicursoError> {
    let client = context.authorized_client()?;
    let current = client
        .get_event()
        .await
        .map_err(|error| context.report_failure(ui_str::event::LOAD_FAILED, error))?;

    let update = merge_event_update(current.as_ref(), fields);
    // % is Display, ? is Debug.
    tracing::debug!(message = "updating event", update = ?update);

    client
        .update_event(&update)
        .await
        .map_err(|error| context.report_failure(ui_str::event::SAVE_FAILED, error))?;
    Toast::success(ui_str::event::SAVED).show();
    Ok(())
}
