use crate::presentation::admin::views::{
    AdminBrandView, AdminChrome, AdminMetaView, AdminNavigationItemView, AdminNavigationView,
};

const NAV_ITEMS: &[(&str, &str)] = &[("/students", "Students"), ("/events", "Events")];

/// Builds the brand, navigation and page title shared by every admin page.
#[derive(Clone)]
pub struct AdminChromeService {
    brand_title: String,
}

impl AdminChromeService {
    pub fn new(brand_title: impl Into<String>) -> Self {
        Self {
            brand_title: brand_title.into(),
        }
    }

    pub fn load(&self, active_path: &str) -> AdminChrome {
        let brand = AdminBrandView {
            title: self.brand_title.clone(),
        };

        let items: Vec<AdminNavigationItemView> = NAV_ITEMS
            .iter()
            .map(|(href, label)| AdminNavigationItemView {
                label: (*label).to_string(),
                href: (*href).to_string(),
                is_active: *href == active_path,
            })
            .collect();

        let active_label = items
            .iter()
            .find(|item| item.is_active)
            .map(|item| item.label.as_str())
            .unwrap_or("Students");

        let meta = AdminMetaView {
            title: format!("{} · {}", brand.title, active_label),
            description: "Student registration dashboard".to_string(),
        };

        AdminChrome {
            brand,
            navigation: AdminNavigationView { items },
            meta,
        }
    }
}
