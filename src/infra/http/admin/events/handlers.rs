use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use datastar::prelude::ElementPatchMode;

use crate::{
    application::stream::StreamBuilder,
    domain::events::NewEvent,
    infra::http::admin::{
        AdminState,
        selectors::EVENTS_PANEL,
        shared::{Toast, bool_signal, datastar_replace, push_toasts},
    },
    presentation::{admin::views as admin_views, views::render_template_response},
};

use super::{
    forms::EventCreateForm,
    panel::{build_event_list_view, render_event_panel_html},
};

const EVENT_CREATED_SIGNAL: &str = "eventCreated";

pub(crate) async fn admin_events(State(state): State<AdminState>) -> Response {
    const SOURCE: &str = "infra::http::admin_events";

    let chrome = state.chrome.load("/events");
    let events = state.events.fetch_all().await;
    let content = build_event_list_view(&events);

    let panel_html = match render_event_panel_html(&content, SOURCE) {
        Ok(html) => html,
        Err(err) => return err.into_response(),
    };

    let view = admin_views::AdminLayout::new(chrome, content);
    render_template_response(
        admin_views::AdminEventsTemplate { view, panel_html },
        StatusCode::OK,
    )
}

pub(crate) async fn admin_events_panel(State(state): State<AdminState>) -> Response {
    const SOURCE: &str = "infra::http::admin_events_panel";

    let events = state.events.fetch_all().await;
    let content = build_event_list_view(&events);

    match render_event_panel_html(&content, SOURCE) {
        Ok(html) => datastar_replace(EVENTS_PANEL, html).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn admin_event_create(
    State(state): State<AdminState>,
    Form(form): Form<EventCreateForm>,
) -> Response {
    const SOURCE: &str = "infra::http::admin_event_create";

    let event = NewEvent {
        name: form.event_name,
        date: form.event_date,
        time: form.event_time,
        location: form.event_location,
    };
    let name = event.name.clone();

    let mut stream = StreamBuilder::new();

    if !state.events.create(event).await {
        stream.push_signals(&bool_signal(EVENT_CREATED_SIGNAL, false));
        if let Err(err) = push_toasts(&mut stream, &[Toast::error("Failed to add event")]) {
            return err.into_response();
        }
        return stream.into_response();
    }

    let events = state.events.fetch_all().await;
    let content = build_event_list_view(&events);
    let panel_html = match render_event_panel_html(&content, SOURCE) {
        Ok(html) => html,
        Err(err) => return err.into_response(),
    };

    stream
        .push_patch(panel_html, EVENTS_PANEL, ElementPatchMode::Replace)
        .push_signals(&bool_signal(EVENT_CREATED_SIGNAL, true));

    if let Err(err) = push_toasts(&mut stream, &[Toast::success(format!("Added \"{name}\""))]) {
        return err.into_response();
    }

    stream.into_response()
}
