use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use datastar::prelude::ElementPatchMode;

use crate::{
    application::{stream::StreamBuilder, table::StudentFilter},
    domain::students::NewStudent,
    infra::http::admin::{
        AdminState,
        selectors::{STUDENT_FILTERS, STUDENTS_PANEL},
        shared::{Toast, blank_to_none, bool_signal, datastar_replace, parse_page, push_toasts},
    },
    presentation::{admin::views as admin_views, views::render_template_response},
};

use super::{
    forms::{StudentFilterForm, StudentPageQuery, StudentPanelQuery, StudentRegisterForm},
    panel::{
        build_student_list_view, build_table, load_event_names, render_student_filters_html,
        render_student_panel_html,
    },
};

const REGISTRATION_SIGNAL: &str = "registrationSucceeded";

pub(crate) async fn admin_students(
    State(state): State<AdminState>,
    Query(query): Query<StudentPageQuery>,
) -> Response {
    const SOURCE: &str = "infra::http::admin_students";

    let filter = StudentFilter::from_inputs(
        query.search.as_deref(),
        query.event.as_deref(),
        query.status.as_deref(),
    );

    let page = match parse_page(SOURCE, query.page.as_deref()) {
        Ok(page) => page,
        Err(err) => return err.into_response(),
    };

    let chrome = state.chrome.load("/students");
    let snapshot = state.students.reload().await;
    let event_names = load_event_names(&state, &snapshot).await;

    let table = build_table(&state, snapshot, filter, page);
    let content = build_student_list_view(&table, event_names);

    let filters_html = match render_student_filters_html(&content, SOURCE) {
        Ok(html) => html,
        Err(err) => return err.into_response(),
    };
    let panel_html = match render_student_panel_html(&content, SOURCE) {
        Ok(html) => html,
        Err(err) => return err.into_response(),
    };

    let view = admin_views::AdminLayout::new(chrome, content);
    render_template_response(
        admin_views::AdminStudentsTemplate {
            view,
            filters_html,
            panel_html,
        },
        StatusCode::OK,
    )
}

/// Filter or page over the current snapshot without refetching.
///
/// A request without a `page` is a filter change and lands on page 1.
pub(crate) async fn admin_students_panel(
    State(state): State<AdminState>,
    Query(query): Query<StudentPanelQuery>,
    Form(form): Form<StudentFilterForm>,
) -> Response {
    const SOURCE: &str = "infra::http::admin_students_panel";

    let filter = StudentFilter::from_inputs(
        form.search.as_deref(),
        form.event.as_deref(),
        form.status.as_deref(),
    );

    let page = match parse_page(SOURCE, query.page.as_deref()) {
        Ok(page) => page,
        Err(err) => return err.into_response(),
    };

    let snapshot = state.students.snapshot().await;
    let table = build_table(&state, snapshot, filter, page);
    let content = build_student_list_view(&table, Vec::new());

    match render_student_panel_html(&content, SOURCE) {
        Ok(html) => datastar_replace(STUDENTS_PANEL, html).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Refetch the students, keep the current filters and return to page 1.
pub(crate) async fn admin_students_refresh(
    State(state): State<AdminState>,
    Form(form): Form<StudentFilterForm>,
) -> Response {
    const SOURCE: &str = "infra::http::admin_students_refresh";

    let filter = StudentFilter::from_inputs(
        form.search.as_deref(),
        form.event.as_deref(),
        form.status.as_deref(),
    );

    let snapshot = state.students.reload().await;
    let table = build_table(&state, snapshot, filter, None);
    let content = build_student_list_view(&table, Vec::new());

    match render_student_panel_html(&content, SOURCE) {
        Ok(html) => datastar_replace(STUDENTS_PANEL, html).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn admin_student_register(
    State(state): State<AdminState>,
    Form(form): Form<StudentRegisterForm>,
) -> Response {
    const SOURCE: &str = "infra::http::admin_student_register";

    let student = NewStudent {
        name: form.name,
        email: blank_to_none(form.email),
        registration_id: form.registration_id,
        registered_for: form.registered_for,
    };
    let name = student.name.clone();

    let mut stream = StreamBuilder::new();

    if !state.students.register(student).await {
        stream.push_signals(&bool_signal(REGISTRATION_SIGNAL, false));
        if let Err(err) = push_toasts(&mut stream, &[Toast::error("Failed to register student")])
        {
            return err.into_response();
        }
        return stream.into_response();
    }

    let snapshot = state.students.reload().await;
    let event_names = load_event_names(&state, &snapshot).await;
    let table = build_table(&state, snapshot, StudentFilter::default(), None);
    let content = build_student_list_view(&table, event_names);

    let filters_html = match render_student_filters_html(&content, SOURCE) {
        Ok(html) => html,
        Err(err) => return err.into_response(),
    };
    let panel_html = match render_student_panel_html(&content, SOURCE) {
        Ok(html) => html,
        Err(err) => return err.into_response(),
    };

    stream
        .push_patch(filters_html, STUDENT_FILTERS, ElementPatchMode::Replace)
        .push_patch(panel_html, STUDENTS_PANEL, ElementPatchMode::Replace)
        .push_signals(&bool_signal(REGISTRATION_SIGNAL, true));

    if let Err(err) = push_toasts(&mut stream, &[Toast::success(format!("Registered \"{name}\""))])
    {
        return err.into_response();
    }

    stream.into_response()
}
