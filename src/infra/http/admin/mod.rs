mod events;
mod health;
mod selectors;
mod shared;
mod state;
mod students;

pub use state::AdminState;

use axum::{
    Router, middleware,
    response::Redirect,
    routing::{get, post},
};

use super::middleware::{log_responses, set_request_context};

pub fn build_admin_router(state: AdminState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/students") }))
        .route("/students", get(students::admin_students))
        .route("/students/panel", post(students::admin_students_panel))
        .route("/students/refresh", post(students::admin_students_refresh))
        .route("/students/register", post(students::admin_student_register))
        .route("/events", get(events::admin_events))
        .route("/events/panel", post(events::admin_events_panel))
        .route("/events/create", post(events::admin_event_create))
        .route("/_health/db", get(health::admin_health))
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}
