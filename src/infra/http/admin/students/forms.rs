use serde::Deserialize;

/// Filter inputs; sent as the page query string or as the filter form body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct StudentFilterForm {
    pub(super) search: Option<String>,
    pub(super) event: Option<String>,
    pub(super) status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct StudentPageQuery {
    pub(super) search: Option<String>,
    pub(super) event: Option<String>,
    pub(super) status: Option<String>,
    pub(super) page: Option<String>,
}

/// Query string of a panel request; only pagination clicks carry a page.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct StudentPanelQuery {
    pub(super) page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StudentRegisterForm {
    pub(super) name: String,
    #[serde(default)]
    pub(super) email: Option<String>,
    pub(super) registration_id: String,
    pub(super) registered_for: String,
}
