use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct EventCreateForm {
    pub(super) event_name: String,
    pub(super) event_date: String,
    #[serde(default)]
    pub(super) event_time: String,
    #[serde(default)]
    pub(super) event_location: String,
}
