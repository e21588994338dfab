use askama::Template;

use super::AdminLayout;

#[derive(Clone)]
pub struct AdminEventRowView {
    pub id: String,
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

#[derive(Clone)]
pub struct AdminEventListView {
    pub heading: String,
    pub rows: Vec<AdminEventRowView>,
    pub panel_action: String,
    pub create_action: String,
}

impl AdminEventListView {
    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }
}

#[derive(Template)]
#[template(path = "admin/events.html")]
pub struct AdminEventsTemplate {
    pub view: AdminLayout<AdminEventListView>,
    pub panel_html: String,
}

#[derive(Template)]
#[template(path = "admin/events_panel.html")]
pub struct AdminEventsPanelTemplate {
    pub content: AdminEventListView,
}
