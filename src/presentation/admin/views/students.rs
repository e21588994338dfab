use askama::Template;

use super::AdminLayout;

#[derive(Clone)]
pub struct AdminStudentRowView {
    pub id: String,
    pub name: String,
    pub registration_id: String,
    pub registered_for: String,
    pub status_key: &'static str,
    pub status_label: &'static str,
}

#[derive(Clone)]
pub struct AdminFilterOptionView {
    pub value: String,
    pub label: String,
    pub is_selected: bool,
}

#[derive(Clone)]
pub struct AdminPageButtonView {
    pub number: usize,
    pub is_current: bool,
}

#[derive(Clone)]
pub struct AdminStudentPaginationView {
    pub previous_disabled: bool,
    pub previous_page: usize,
    pub pages: Vec<AdminPageButtonView>,
    pub next_disabled: bool,
    pub next_page: usize,
}

#[derive(Clone)]
pub struct AdminStudentListView {
    pub heading: String,
    pub rows: Vec<AdminStudentRowView>,
    pub filter_search: String,
    pub event_options: Vec<AdminFilterOptionView>,
    pub status_options: Vec<AdminFilterOptionView>,
    pub registration_events: Vec<String>,
    pub pagination: Option<AdminStudentPaginationView>,
    pub count_display: String,
    pub current_page: usize,
    pub panel_action: String,
    pub refresh_action: String,
    pub register_action: String,
}

impl AdminStudentListView {
    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }
}

#[derive(Template)]
#[template(path = "admin/students.html")]
pub struct AdminStudentsTemplate {
    pub view: AdminLayout<AdminStudentListView>,
    pub filters_html: String,
    pub panel_html: String,
}

#[derive(Template)]
#[template(path = "admin/student_filters.html")]
pub struct AdminStudentFiltersTemplate {
    pub content: AdminStudentListView,
}

#[derive(Template)]
#[template(path = "admin/students_panel.html")]
pub struct AdminStudentsPanelTemplate {
    pub content: AdminStudentListView,
}
