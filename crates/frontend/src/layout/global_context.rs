use std::collections::HashMap;

use leptos::prelude::*;

use contracts::domain::User;

/// Dashboard sections. Navigation is a plain enum switch rather than a URL
/// router; the sidebar writes the active page into the global context and the
/// shell renders it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Contracts,
    Orders,
    Sellers,
    Analytics,
    MarketIntel,
    CompetitorAnalytics,
    UserManagement,
    ManualEntry,
    DataUpload,
    Settings,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Contracts => "Contracts",
            Page::Orders => "Orders",
            Page::Sellers => "Sellers",
            Page::Analytics => "Analytics",
            Page::MarketIntel => "Market Intelligence",
            Page::CompetitorAnalytics => "Competitor Analytics",
            Page::UserManagement => "User Management",
            Page::ManualEntry => "Manual Entry",
            Page::DataUpload => "Data Upload",
            Page::Settings => "Settings",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::Dashboard => "layout-dashboard",
            Page::Contracts => "file-text",
            Page::Orders => "shopping-cart",
            Page::Sellers => "store",
            Page::Analytics => "bar-chart",
            Page::MarketIntel => "eye",
            Page::CompetitorAnalytics => "activity",
            Page::UserManagement => "users",
            Page::ManualEntry => "edit",
            Page::DataUpload => "upload",
            Page::Settings => "settings",
        }
    }

    /// Whether the signed-in user may open this section. Admin screens
    /// require the admin role; the rest follow the per-user panel flags.
    pub fn accessible_to(&self, user: &User) -> bool {
        match self {
            Page::Dashboard => user.panel_access.dashboard,
            Page::Contracts | Page::Orders => user.panel_access.contracts,
            Page::Sellers => user.panel_access.sellers,
            Page::Analytics => user.panel_access.analytics,
            // The locked-state screen itself is reachable; the page checks
            // the analytics flag and renders the access prompt without it.
            Page::MarketIntel => true,
            Page::Settings => user.panel_access.settings,
            Page::CompetitorAnalytics
            | Page::UserManagement
            | Page::ManualEntry
            | Page::DataUpload => user.is_admin(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub sidebar_open: RwSignal<bool>,
    /// Draft state keyed by form name, survives navigating away from a page.
    pub form_states: RwSignal<HashMap<String, serde_json::Value>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::Dashboard),
            sidebar_open: RwSignal::new(true),
            form_states: RwSignal::new(HashMap::new()),
        }
    }

    pub fn navigate(&self, page: Page) {
        leptos::logging::log!("navigate: {}", page.label());
        self.active.set(page);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    pub fn get_form_state(&self, form_key: &str) -> Option<serde_json::Value> {
        self.form_states
            .with_untracked(|states| states.get(form_key).cloned())
    }

    pub fn set_form_state(&self, form_key: String, state: serde_json::Value) {
        self.form_states.update(|states| {
            states.insert(form_key, state);
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
