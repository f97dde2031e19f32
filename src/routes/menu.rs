use super::Route;
use crate::session::Role;

/// A dashboard sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLink {
    pub label: &'static str,
    pub route: Route,
}

impl MenuLink {
    fn new(label: &'static str, route: Route) -> Self {
        Self { label, route }
    }
}

/// Sidebar entries for the signed-in user's role.
pub fn dashboard_links(role: Role) -> Vec<MenuLink> {
    match role {
        Role::Admin => vec![
            MenuLink::new("Overview", Route::Dashboard),
            MenuLink::new("Products", Route::ProductList),
            MenuLink::new("Categories", Route::Categories),
            MenuLink::new("New Product", Route::CreateProduct),
            MenuLink::new("All Orders", Route::AllOrders),
        ],
        Role::User => vec![
            MenuLink::new("Overview", Route::Dashboard),
            MenuLink::new("My Cart", Route::Cart),
            MenuLink::new("My Orders", Route::MyOrders),
        ],
    }
}
