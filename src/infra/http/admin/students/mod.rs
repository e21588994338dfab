mod forms;
mod handlers;
mod panel;

pub(super) use handlers::{
    admin_student_register, admin_students, admin_students_panel, admin_students_refresh,
};
