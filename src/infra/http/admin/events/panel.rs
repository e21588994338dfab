use askama::Template;

use crate::{
    application::error::HttpError,
    domain::events::{EventRecord, format_event_date, format_event_time},
    infra::http::admin::shared::template_render_http_error,
    presentation::admin::views as admin_views,
};

pub(super) fn build_event_list_view(events: &[EventRecord]) -> admin_views::AdminEventListView {
    let rows = events
        .iter()
        .map(|event| admin_views::AdminEventRowView {
            id: event.id.to_string(),
            name: event.name.clone(),
            date: format_event_date(&event.date),
            time: format_event_time(&event.time),
            location: event.location.clone(),
        })
        .collect();

    admin_views::AdminEventListView {
        heading: "Events".to_string(),
        rows,
        panel_action: "/events/panel".to_string(),
        create_action: "/events/create".to_string(),
    }
}

pub(super) fn render_event_panel_html(
    content: &admin_views::AdminEventListView,
    template_source: &'static str,
) -> Result<String, HttpError> {
    let template = admin_views::AdminEventsPanelTemplate {
        content: content.clone(),
    };

    template.render().map_err(|err| {
        template_render_http_error(template_source, "Template rendering failed", err)
    })
}
