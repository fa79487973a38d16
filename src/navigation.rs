//! Routes, the sidebar menu tree and sidebar state.

use std::fmt;

/// Sidebar width when expanded.
pub const SIDEBAR_WIDTH: f32 = 280.0;

/// Sidebar width when collapsed to icons.
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 80.0;

/// Below this window width the sidebar becomes a drawer.
pub const DRAWER_BREAKPOINT: f32 = 900.0;

/// A page the content area can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Categories,
    Products,
    Orders,
    Users,
    SalesReport,
    Analytics,
    Settings,
    /// A path with no page
    NotFound(String),
}

impl Route {
    /// Resolves a path. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };

        match normalized {
            "/" => Route::Dashboard,
            "/categories" => Route::Categories,
            "/products" => Route::Products,
            "/orders" => Route::Orders,
            "/users" => Route::Users,
            "/reports/sales" => Route::SalesReport,
            "/reports/analytics" => Route::Analytics,
            "/settings" => Route::Settings,
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Dashboard => "/",
            Route::Categories => "/categories",
            Route::Products => "/products",
            Route::Orders => "/orders",
            Route::Users => "/users",
            Route::SalesReport => "/reports/sales",
            Route::Analytics => "/reports/analytics",
            Route::Settings => "/settings",
            Route::NotFound(path) => path,
        }
    }

    /// Text of pages that only show a placeholder.
    pub fn placeholder_text(&self) -> Option<&'static str> {
        match self {
            Route::Dashboard => Some("Dashboard Content"),
            Route::Categories => Some("Categories Content"),
            Route::Users => Some("Users Content"),
            Route::SalesReport => Some("Sales Report Content"),
            Route::Analytics => Some("Analytics Content"),
            Route::Settings => Some("Settings Content"),
            Route::Products | Route::Orders | Route::NotFound(_) => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A top-level sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub text: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
    pub sub_items: &'static [NavSubItem],
}

/// A nested sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSubItem {
    pub text: &'static str,
    pub path: &'static str,
}

impl NavItem {
    pub fn has_sub_items(&self) -> bool {
        !self.sub_items.is_empty()
    }
}

/// The sidebar menu tree.
pub static MENU: &[NavItem] = &[
    NavItem {
        text: "Dashboard",
        icon: "🏠",
        path: "/",
        sub_items: &[],
    },
    NavItem {
        text: "Products",
        icon: "📦",
        path: "/products",
        sub_items: &[
            NavSubItem { text: "All Products", path: "/products" },
            NavSubItem { text: "Categories", path: "/categories" },
            NavSubItem { text: "Inventory", path: "/inventory" },
        ],
    },
    NavItem {
        text: "Orders",
        icon: "🛒",
        path: "/orders",
        sub_items: &[
            NavSubItem { text: "All Orders", path: "/orders" },
            NavSubItem { text: "Shipments", path: "/shipments" },
            NavSubItem { text: "Returns", path: "/returns" },
        ],
    },
    NavItem {
        text: "Customers",
        icon: "👥",
        path: "/customers",
        sub_items: &[],
    },
    NavItem {
        text: "Reports",
        icon: "📊",
        path: "/reports",
        sub_items: &[
            NavSubItem { text: "Sales Report", path: "/reports/sales" },
            NavSubItem { text: "Inventory Report", path: "/reports/inventory" },
            NavSubItem { text: "Customer Report", path: "/reports/customers" },
        ],
    },
    NavItem {
        text: "Settings",
        icon: "⚙",
        path: "/settings",
        sub_items: &[],
    },
];

/// Current location of the content area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
}

impl Default for Location {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn route(&self) -> Route {
        Route::from_path(&self.path)
    }

    /// An entry is active when its path equals the current path exactly.
    pub fn is_active(&self, path: &str) -> bool {
        self.path == path
    }

    pub fn navigate(&mut self, path: &str) {
        if self.path != path {
            tracing::debug!(from = %self.path, to = path, "navigate");
            self.path = path.to_string();
        }
    }
}

/// Sidebar presentation state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    collapsed: bool,
    open_submenu: Option<&'static str>,
    mobile_open: bool,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn open_submenu(&self) -> Option<&'static str> {
        self.open_submenu
    }

    pub fn is_submenu_open(&self, text: &str) -> bool {
        self.open_submenu == Some(text)
    }

    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn width(&self) -> f32 {
        if self.collapsed {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            SIDEBAR_WIDTH
        }
    }

    // ===== Commands =====

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Opens a submenu, closing any other; clicking the open one closes it.
    pub fn toggle_submenu(&mut self, text: &'static str) {
        self.open_submenu = if self.open_submenu == Some(text) {
            None
        } else {
            Some(text)
        };
    }

    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn close_mobile(&mut self) {
        self.mobile_open = false;
    }

    /// Handles a click on a top-level entry: navigates and toggles its submenu.
    pub fn click_item(&mut self, item: &NavItem, location: &mut Location) {
        location.navigate(item.path);
        if item.has_sub_items() {
            self.toggle_submenu(item.text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_item(text: &str) -> &'static NavItem {
        MENU.iter().find(|i| i.text == text).unwrap()
    }

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path(""), Route::Dashboard);
        assert_eq!(Route::from_path("/products/"), Route::Products);
        assert_eq!(Route::from_path("/reports/analytics"), Route::Analytics);
        assert_eq!(
            Route::from_path("/inventory"),
            Route::NotFound("/inventory".to_string())
        );
    }

    #[test]
    fn test_route_path_round_trip() {
        for route in [Route::Dashboard, Route::Orders, Route::SalesReport, Route::Settings] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(Route::Dashboard.placeholder_text(), Some("Dashboard Content"));
        assert_eq!(Route::Products.placeholder_text(), None);
        assert_eq!(Route::NotFound("/x".into()).placeholder_text(), None);
    }

    #[test]
    fn test_submenu_accordion() {
        let mut sidebar = SidebarState::new();
        sidebar.toggle_submenu("Products");
        assert!(sidebar.is_submenu_open("Products"));

        sidebar.toggle_submenu("Orders");
        assert!(sidebar.is_submenu_open("Orders"));
        assert!(!sidebar.is_submenu_open("Products"));

        sidebar.toggle_submenu("Orders");
        assert_eq!(sidebar.open_submenu(), None);
    }

    #[test]
    fn test_click_item_navigates_and_toggles() {
        let mut sidebar = SidebarState::new();
        let mut location = Location::default();

        sidebar.click_item(menu_item("Orders"), &mut location);
        assert_eq!(location.path(), "/orders");
        assert!(sidebar.is_submenu_open("Orders"));

        sidebar.click_item(menu_item("Customers"), &mut location);
        assert_eq!(location.path(), "/customers");
        // leaf items leave the open submenu alone
        assert!(sidebar.is_submenu_open("Orders"));
    }

    #[test]
    fn test_is_active_is_exact() {
        let location = Location::new("/reports/sales");
        assert!(location.is_active("/reports/sales"));
        assert!(!location.is_active("/reports"));
    }

    #[test]
    fn test_collapse_width() {
        let mut sidebar = SidebarState::new();
        assert_eq!(sidebar.width(), SIDEBAR_WIDTH);
        sidebar.toggle_collapsed();
        assert_eq!(sidebar.width(), SIDEBAR_COLLAPSED_WIDTH);
    }
}
