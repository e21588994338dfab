use askama::Template;
use insta::assert_snapshot;
use registrar::presentation::admin::views::*;

fn row(
    id: &str,
    name: &str,
    registered_for: &str,
    status_key: &'static str,
    status_label: &'static str,
) -> AdminStudentRowView {
    AdminStudentRowView {
        id: id.into(),
        name: name.into(),
        registration_id: format!("REG-{}", &id[id.len() - 3..]),
        registered_for: registered_for.into(),
        status_key,
        status_label,
    }
}

fn option(value: &str, is_selected: bool) -> AdminFilterOptionView {
    AdminFilterOptionView {
        value: value.into(),
        label: value.into(),
        is_selected,
    }
}

fn student_list(
    rows: Vec<AdminStudentRowView>,
    pagination: Option<AdminStudentPaginationView>,
    count_display: &str,
) -> AdminStudentListView {
    AdminStudentListView {
        heading: "Student registrations".into(),
        rows,
        filter_search: "ada".into(),
        event_options: vec![
            option("All Events", false),
            option("Hackathon", true),
            option("Workshop", false),
        ],
        status_options: vec![
            option("All Statuses", true),
            option("Approved", false),
            option("Pending", false),
            option("Rejected", false),
        ],
        registration_events: vec!["Hackathon".into(), "Workshop".into()],
        pagination,
        count_display: count_display.into(),
        current_page: 2,
        panel_action: "/students/panel".into(),
        refresh_action: "/students/refresh".into(),
        register_action: "/students/register".into(),
    }
}

fn event_list(rows: Vec<AdminEventRowView>) -> AdminEventListView {
    AdminEventListView {
        heading: "Events".into(),
        rows,
        panel_action: "/events/panel".into(),
        create_action: "/events/create".into(),
    }
}

fn event_row(id: &str, name: &str, date: &str, time: &str, location: &str) -> AdminEventRowView {
    AdminEventRowView {
        id: id.into(),
        name: name.into(),
        date: date.into(),
        time: time.into(),
        location: location.into(),
    }
}

#[test]
fn snapshot_admin_students_panel() {
    let pagination = AdminStudentPaginationView {
        previous_disabled: false,
        previous_page: 1,
        pages: vec![
            AdminPageButtonView {
                number: 1,
                is_current: false,
            },
            AdminPageButtonView {
                number: 2,
                is_current: true,
            },
            AdminPageButtonView {
                number: 3,
                is_current: false,
            },
        ],
        next_disabled: false,
        next_page: 3,
    };
    let content = student_list(
        vec![
            row("student-001", "Ada Lovelace", "Hackathon", "approved", "Approved"),
            row("student-002", "Alan Turing", "Workshop", "unknown", "Unknown"),
        ],
        Some(pagination),
        "Showing 3-4 of 6 students (Total: 9)",
    );

    let rendered = AdminStudentsPanelTemplate { content }.render().unwrap();
    assert_snapshot!("admin_students_panel", rendered);
}

#[test]
fn snapshot_admin_students_panel_empty() {
    let content = student_list(Vec::new(), None, "Showing 0-0 of 0 students (Total: 4)");

    let rendered = AdminStudentsPanelTemplate { content }.render().unwrap();
    assert_snapshot!("admin_students_panel_empty", rendered);
}

#[test]
fn snapshot_admin_student_filters() {
    let content = student_list(Vec::new(), None, "Showing 0-0 of 0 students (Total: 0)");

    let rendered = AdminStudentFiltersTemplate { content }.render().unwrap();
    assert_snapshot!("admin_student_filters", rendered);
}

#[test]
fn snapshot_admin_events_panel() {
    let content = event_list(vec![
        event_row("event-001", "Hackathon", "September 25, 2025", "2:30 PM", "Main Hall"),
        event_row("event-002", "Demo Day", "December 1, 2025", "9:05 AM", "Lab"),
    ]);

    let rendered = AdminEventsPanelTemplate { content }.render().unwrap();
    assert_snapshot!("admin_events_panel", rendered);
}

#[test]
fn snapshot_admin_events_panel_empty() {
    let rendered = AdminEventsPanelTemplate {
        content: event_list(Vec::new()),
    }
    .render()
    .unwrap();
    assert_snapshot!("admin_events_panel_empty", rendered);
}

#[test]
fn student_rows_escape_record_values() {
    let content = student_list(
        vec![row(
            "student-003",
            "<script>alert(1)</script>",
            "<b>Hackathon</b>",
            "approved",
            "Approved",
        )],
        None,
        "Showing 1-1 of 1 students (Total: 1)",
    );
    let rendered = AdminStudentsPanelTemplate { content }.render().unwrap();

    assert!(!rendered.contains("<script>"));
    assert!(!rendered.contains("<b>"));
    assert!(rendered.contains("alert(1)"));
}

#[test]
fn event_rows_escape_record_values() {
    let content = event_list(vec![event_row(
        "event-003",
        "Hackathon & <Demo>",
        "soon",
        "noon",
        "\"Main\" Hall",
    )]);
    let rendered = AdminEventsPanelTemplate { content }.render().unwrap();

    assert!(!rendered.contains("Hackathon & <Demo>"));
    assert!(!rendered.contains("\"Main\" Hall"));
    assert!(rendered.contains("soon"));
}
