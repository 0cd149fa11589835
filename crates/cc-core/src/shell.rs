//! Application shell state: which page is mounted and whether the sidebar is
//! collapsed. Owned by the application root and passed down explicitly; each
//! list page mounts its own [`CollectionView`] so view state never outlives
//! the page.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{CatalogError, CollectionKind, ItemSource};
use crate::engine::CollectionView;
use crate::types::Categorized;
use crate::view::SectionLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    CommandCenter,
    MyTasks,
    MyWorkforce,
    Insights,
    Marketplace,
    AccountSettings,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::CommandCenter,
        Page::MyTasks,
        Page::MyWorkforce,
        Page::Insights,
        Page::Marketplace,
        Page::AccountSettings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::CommandCenter => "Command Centre",
            Page::MyTasks => "My Tasks",
            Page::MyWorkforce => "My Workforce",
            Page::Insights => "Insights",
            Page::Marketplace => "Marketplace",
            Page::AccountSettings => "Account Settings",
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            Page::CommandCenter => "/command-center",
            Page::MyTasks => "/my-tasks",
            Page::MyWorkforce => "/my-workforce",
            Page::Insights => "/insights",
            Page::Marketplace => "/marketplace",
            Page::AccountSettings => "/account-settings",
        }
    }

    /// The marketplace is listed in the sidebar but cannot be opened yet.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Page::Marketplace)
    }

    pub fn badge(&self) -> Option<&'static str> {
        match self {
            Page::Marketplace => Some("Coming Soon"),
            _ => None,
        }
    }

    /// The list collection this page renders through the view engine, if any.
    pub fn collection(&self) -> Option<CollectionKind> {
        match self {
            Page::CommandCenter => Some(CollectionKind::Attention),
            Page::MyTasks => Some(CollectionKind::Tasks),
            Page::MyWorkforce => Some(CollectionKind::Workforce),
            Page::Insights | Page::Marketplace | Page::AccountSettings => None,
        }
    }

    /// Resolve a path. `/` redirects to the command center; unknown paths
    /// return `None` (the not-found page).
    pub fn from_route(path: &str) -> Option<Page> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Page::CommandCenter);
        }
        Page::ALL.into_iter().find(|p| p.route() == trimmed)
    }
}

// ---------------------------------------------------------------------------
// Route
// ---------------------------------------------------------------------------

/// Where an in-app path leads: a sidebar page, or one of the parameterized
/// screens card actions link to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    Page { page: Page },
    /// `/agents/:slug`
    Agent { slug: String },
    /// `/reauth/:service`
    Reauth { service: String },
}

impl Route {
    /// Resolve an in-app path. External URLs and unknown paths return `None`.
    pub fn parse(path: &str) -> Option<Route> {
        if let Some(page) = Page::from_route(path) {
            return Some(Route::Page { page });
        }
        let trimmed = path.trim_end_matches('/');
        let param = |prefix: &str| {
            trimmed
                .strip_prefix(prefix)
                .filter(|rest| !rest.is_empty() && !rest.contains('/'))
                .map(str::to_string)
        };
        if let Some(slug) = param("/agents/") {
            return Some(Route::Agent { slug });
        }
        param("/reauth/").map(|service| Route::Reauth { service })
    }

    pub fn title(&self) -> String {
        match self {
            Route::Page { page } => page.title().to_string(),
            Route::Agent { slug } => format!("Agent {slug}"),
            Route::Reauth { service } => format!("Reconnect {service}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppShell {
    current_page: Page,
    sidebar_collapsed: bool,
}

impl Default for AppShell {
    fn default() -> Self {
        Self {
            current_page: Page::CommandCenter,
            sidebar_collapsed: false,
        }
    }
}

impl AppShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    /// Switch pages. Disabled pages and the current page are ignored; returns
    /// whether the page changed, in which case the caller remounts its view.
    pub fn navigate(&mut self, page: Page) -> bool {
        if !page.is_enabled() {
            debug!(page = page.title(), "navigation to disabled page ignored");
            return false;
        }
        if page == self.current_page {
            return false;
        }
        info!(from = self.current_page.route(), to = page.route(), "navigate");
        self.current_page = page;
        true
    }

    /// Navigate by path. Returns the page landed on, or `None` for unknown
    /// paths (the current page is left unchanged).
    pub fn navigate_to_route(&mut self, path: &str) -> Option<Page> {
        let page = Page::from_route(path)?;
        self.navigate(page);
        Some(self.current_page)
    }

    /// Flip the sidebar and return the new collapsed state.
    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.sidebar_collapsed
    }

    /// Mount a fresh view for the current page from `source`.
    pub fn mount_view<T, S>(
        &self,
        source: &S,
        layout: SectionLayout,
    ) -> Result<CollectionView<T>, CatalogError>
    where
        T: Categorized,
        S: ItemSource<Item = T>,
    {
        let view = CollectionView::from_source(source, layout)?;
        debug!(page = self.current_page.title(), items = view.items().len(), "view mounted");
        Ok(view)
    }
}
