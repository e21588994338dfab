//! Shared CSS selectors used by admin Datastar responses.

pub const TOAST_STACK: &str = "[data-admin-toast=\"stack\"]";

pub const STUDENTS_PANEL: &str = "[data-admin-panel=\"students\"]";
pub const STUDENT_FILTERS: &str = "[data-admin-filters=\"students\"]";
pub const EVENTS_PANEL: &str = "[data-admin-panel=\"events\"]";
