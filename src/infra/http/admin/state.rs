use std::sync::Arc;

use crate::application::{
    chrome::AdminChromeService, events::EventService, repos::DocumentStore,
    students::StudentService,
};
use crate::config::AdminSettings;

#[derive(Clone)]
pub struct AdminState {
    pub store: Arc<dyn DocumentStore>,
    pub chrome: Arc<AdminChromeService>,
    pub students: Arc<StudentService>,
    pub events: Arc<EventService>,
    pub students_per_page: usize,
}

impl AdminState {
    pub fn new(store: Arc<dyn DocumentStore>, settings: &AdminSettings) -> Self {
        Self {
            chrome: Arc::new(AdminChromeService::new(settings.brand_title.clone())),
            students: Arc::new(StudentService::new(store.clone())),
            events: Arc::new(EventService::new(store.clone())),
            students_per_page: settings.students_per_page,
            store,
        }
    }
}
