mod forms;
mod handlers;
mod panel;

pub(super) use handlers::{admin_event_create, admin_events, admin_events_panel};
