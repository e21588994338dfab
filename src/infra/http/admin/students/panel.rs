use std::sync::Arc;

use askama::Template;

use crate::{
    application::{
        error::HttpError,
        students::event_options,
        table::{ALL_EVENTS, ALL_STATUSES, EventFilter, StatusFilter, StudentFilter, StudentTable},
    },
    domain::students::{StudentRecord, StudentStatus},
    infra::http::admin::{AdminState, shared::template_render_http_error},
    presentation::admin::views as admin_views,
};

/// Table over `snapshot` with `filter` applied, positioned on `page` when given.
pub(super) fn build_table(
    state: &AdminState,
    snapshot: Arc<[StudentRecord]>,
    filter: StudentFilter,
    page: Option<usize>,
) -> StudentTable {
    let mut table = StudentTable::new(snapshot, state.students_per_page);
    table.apply_filter(filter);
    if let Some(page) = page {
        table.go_to(page);
    }
    table
}

/// Event names for the filter and registration dropdowns, from the events
/// collection and the snapshot.
pub(super) async fn load_event_names(state: &AdminState, snapshot: &[StudentRecord]) -> Vec<String> {
    let events = state.events.fetch_all().await;
    event_options(&events, snapshot)
}

pub(super) fn build_student_list_view(
    table: &StudentTable,
    event_names: Vec<String>,
) -> admin_views::AdminStudentListView {
    let filter = table.filter();

    let rows = table
        .visible_rows()
        .map(|record| admin_views::AdminStudentRowView {
            id: record.id.to_string(),
            name: record.name.clone(),
            registration_id: record.registration_id.clone(),
            registered_for: record.registered_for.clone(),
            status_key: record.status.key(),
            status_label: record.status.label(),
        })
        .collect();

    let mut event_options = vec![admin_views::AdminFilterOptionView {
        value: ALL_EVENTS.to_string(),
        label: ALL_EVENTS.to_string(),
        is_selected: filter.event == EventFilter::All,
    }];
    event_options.extend(event_names.iter().map(|name| admin_views::AdminFilterOptionView {
        value: name.clone(),
        label: name.clone(),
        is_selected: filter.event.as_value() == name,
    }));
    if let EventFilter::Named(selected) = &filter.event
        && !event_names.contains(selected)
    {
        event_options.push(admin_views::AdminFilterOptionView {
            value: selected.clone(),
            label: selected.clone(),
            is_selected: true,
        });
    }

    let mut status_options = vec![admin_views::AdminFilterOptionView {
        value: ALL_STATUSES.to_string(),
        label: ALL_STATUSES.to_string(),
        is_selected: filter.status == StatusFilter::All,
    }];
    status_options.extend(StudentStatus::FILTERABLE.into_iter().map(|status| {
        admin_views::AdminFilterOptionView {
            value: status.label().to_string(),
            label: status.label().to_string(),
            is_selected: filter.status.as_value() == status.label(),
        }
    }));
    if let StatusFilter::Label(selected) = &filter.status
        && !StudentStatus::FILTERABLE
            .iter()
            .any(|status| status.label() == selected.as_str())
    {
        status_options.push(admin_views::AdminFilterOptionView {
            value: selected.clone(),
            label: selected.clone(),
            is_selected: true,
        });
    }

    let pagination = table
        .pagination()
        .map(|controls| admin_views::AdminStudentPaginationView {
            previous_disabled: controls.previous_disabled,
            previous_page: controls.previous_page,
            pages: controls
                .pages
                .into_iter()
                .map(|button| admin_views::AdminPageButtonView {
                    number: button.number,
                    is_current: button.is_current,
                })
                .collect(),
            next_disabled: controls.next_disabled,
            next_page: controls.next_page,
        });

    admin_views::AdminStudentListView {
        heading: "Student registrations".to_string(),
        rows,
        filter_search: filter.search.clone(),
        event_options,
        status_options,
        registration_events: event_names,
        pagination,
        count_display: table.count_summary().to_string(),
        current_page: table.current_page(),
        panel_action: "/students/panel".to_string(),
        refresh_action: "/students/refresh".to_string(),
        register_action: "/students/register".to_string(),
    }
}

pub(super) fn render_student_panel_html(
    content: &admin_views::AdminStudentListView,
    template_source: &'static str,
) -> Result<String, HttpError> {
    let template = admin_views::AdminStudentsPanelTemplate {
        content: content.clone(),
    };

    template.render().map_err(|err| {
        template_render_http_error(template_source, "Template rendering failed", err)
    })
}

pub(super) fn render_student_filters_html(
    content: &admin_views::AdminStudentListView,
    template_source: &'static str,
) -> Result<String, HttpError> {
    let template = admin_views::AdminStudentFiltersTemplate {
        content: content.clone(),
    };

    template.render().map_err(|err| {
        template_render_http_error(template_source, "Template rendering failed", err)
    })
}
