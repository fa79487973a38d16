use anyhow::{anyhow, Result};
use radmin::crud::export::{export_to_path, write_csv};
use radmin::crud::formatting::to_fields;
use radmin::crud::{DialogEvent, GridEvent, ToolbarEvent};
use radmin::entities::mock_data::{seed_orders, seed_products};
use radmin::entities::{MockRepository, Order, OrderStatus, PaymentStatus, Product};
use radmin::{
    ActiveDialog, Column, Completion, CrudHandler, CrudLayout, GridState, Location, Route,
    SidebarState, ThemeContext, ThemeMode, ThemeVariant, MENU,
};
use std::env;
use std::fs;

/// Product handler applying mutations synchronously, like the products page.
struct Catalog {
    repo: MockRepository<Product>,
    searches: Vec<String>,
}

impl Catalog {
    fn new() -> Self {
        Self {
            repo: MockRepository::new(seed_products()),
            searches: Vec::new(),
        }
    }
}

impl CrudHandler<Product> for Catalog {
    fn search(&mut self, query: &str) {
        self.searches.push(query.to_string());
    }

    fn add(&mut self, item: Product) -> Completion {
        self.repo.add(item).map(|_| ()).into()
    }

    fn update(&mut self, item: Product) -> Completion {
        self.repo.update(item).into()
    }

    fn delete(&mut self, id: u32) -> Completion {
        self.repo.delete(id).into()
    }
}

/// Handler whose mutations always fail.
struct Offline;

impl CrudHandler<Order> for Offline {
    fn delete(&mut self, id: u32) -> Completion {
        Completion::Ready(Err(anyhow!("server unreachable while deleting {id}")))
    }
}

/// Handler that leaves every mutation in flight.
#[derive(Default)]
struct Queued {
    calls: usize,
}

impl CrudHandler<Product> for Queued {
    fn add(&mut self, _item: Product) -> Completion {
        self.calls += 1;
        Completion::Deferred
    }
}

fn products_layout() -> CrudLayout<Product> {
    CrudLayout::new(GridState::new())
}

#[test]
fn test_create_product_through_form() {
    let mut catalog = Catalog::new();
    let mut layout = products_layout();

    layout.open_create();
    assert!(layout.state().is_creating());
    {
        let draft = layout.draft_mut();
        draft.name = "Desk Lamp".to_string();
        draft.price = "39.5".to_string();
        draft.category = "Home".to_string();
        draft.stock = "12".to_string();
    }
    layout.apply_dialog(DialogEvent::Submit, &mut catalog);

    assert!(!layout.state().is_edit_open());
    let rows = catalog.repo.snapshot();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].id, 3);
    assert_eq!(rows[2].name, "Desk Lamp");
    assert_eq!(rows[2].price, 39.5);
}

#[test]
fn test_invalid_form_stays_open() {
    let mut catalog = Catalog::new();
    let mut layout = products_layout();

    layout.open_create();
    {
        let draft = layout.draft_mut();
        draft.name = "Chair".to_string();
        draft.price = "cheap".to_string();
        draft.category = "Home".to_string();
        draft.stock = "1".to_string();
    }
    layout.apply_dialog(DialogEvent::Submit, &mut catalog);

    assert!(layout.state().is_edit_open());
    assert!(layout.form_error().is_some_and(|e| e.contains("Price")));
    assert_eq!(catalog.repo.len(), 2);

    layout.apply_dialog(DialogEvent::CancelEdit, &mut catalog);
    assert!(!layout.state().is_edit_open());
    assert!(layout.form_error().is_none());
}

#[test]
fn test_edit_from_grid_keeps_identity() {
    let mut catalog = Catalog::new();
    let mut layout = products_layout();
    let rows = catalog.repo.snapshot();

    layout.apply_grid(GridEvent::Edit(1), &rows);
    assert_eq!(layout.draft().name, "Product 2");
    assert_eq!(layout.state().selected_item().map(|p| p.id), Some(2));

    layout.draft_mut().stock = "75".to_string();
    layout.apply_dialog(DialogEvent::Submit, &mut catalog);

    let updated = catalog.repo.snapshot();
    assert_eq!(updated.len(), 2);
    assert_eq!(updated[1].id, 2);
    assert_eq!(updated[1].stock, 75);
    assert!(matches!(layout.state().dialog(), ActiveDialog::None));
}

#[test]
fn test_delete_from_grid() {
    let mut catalog = Catalog::new();
    let mut layout = products_layout();
    let rows = catalog.repo.snapshot();

    layout.apply_grid(GridEvent::Delete(0), &rows);
    assert_eq!(layout.state().selected_id(), Some(&1));

    layout.apply_dialog(DialogEvent::ConfirmDelete, &mut catalog);
    assert!(!layout.state().is_delete_open());
    assert_eq!(catalog.repo.snapshot().iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn test_create_after_delete_gets_fresh_id() {
    let mut catalog = Catalog::new();
    let mut layout = products_layout();
    let rows = catalog.repo.snapshot();

    layout.apply_grid(GridEvent::Delete(0), &rows);
    layout.apply_dialog(DialogEvent::ConfirmDelete, &mut catalog);

    layout.open_create();
    {
        let draft = layout.draft_mut();
        draft.name = "Stool".to_string();
        draft.price = "25".to_string();
        draft.category = "Home".to_string();
        draft.stock = "3".to_string();
    }
    layout.apply_dialog(DialogEvent::Submit, &mut catalog);

    let ids: Vec<_> = catalog.repo.snapshot().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3]);

    let rows = catalog.repo.snapshot();
    layout.apply_grid(GridEvent::Delete(0), &rows);
    layout.apply_dialog(DialogEvent::ConfirmDelete, &mut catalog);
    let left = catalog.repo.snapshot();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].name, "Stool");
}

#[test]
fn test_cancel_delete_never_calls_handler() {
    let mut catalog = Catalog::new();
    let mut layout = products_layout();
    let rows = catalog.repo.snapshot();

    layout.apply_grid(GridEvent::Delete(1), &rows);
    layout.apply_dialog(DialogEvent::CancelDelete, &mut catalog);
    layout.apply_dialog(DialogEvent::ConfirmDelete, &mut catalog);

    assert_eq!(catalog.repo.len(), 2);
}

#[test]
fn test_failed_delete_keeps_dialog_open() {
    let mut layout: CrudLayout<Order> = CrudLayout::new(GridState::new());
    let orders = seed_orders();

    layout.apply_grid(GridEvent::Delete(3), &orders);
    layout.apply_dialog(DialogEvent::ConfirmDelete, &mut Offline);

    assert!(layout.state().is_delete_open());
    assert!(!layout.state().is_busy());
    assert!(layout
        .state()
        .last_error()
        .is_some_and(|e| e.contains("server unreachable while deleting 4")));
}

#[test]
fn test_deferred_submit_locks_until_settled() {
    let mut handler = Queued::default();
    let mut layout = products_layout();

    layout.open_create();
    {
        let draft = layout.draft_mut();
        draft.name = "Mug".to_string();
        draft.price = "8".to_string();
        draft.category = "Kitchen".to_string();
        draft.stock = "40".to_string();
    }
    layout.apply_dialog(DialogEvent::Submit, &mut handler);
    layout.apply_dialog(DialogEvent::Submit, &mut handler);

    assert_eq!(handler.calls, 1);
    assert!(layout.state().is_busy());
    assert!(layout.state().is_edit_open());

    layout.settle(Ok(()));
    assert!(!layout.state().is_busy());
    assert!(!layout.state().is_edit_open());
}

#[test]
fn test_toolbar_events_update_state() {
    let mut catalog = Catalog::new();
    let mut layout = products_layout();

    layout.apply_toolbar(
        vec![
            ToolbarEvent::ToggleFilters,
            ToolbarEvent::SearchChanged("elec".to_string()),
            ToolbarEvent::FilterChanged {
                field: "category".to_string(),
                value: "Clothing".to_string(),
            },
        ],
        &mut catalog,
    );

    assert!(layout.state().show_filters());
    assert_eq!(layout.state().search_query(), "elec");
    assert_eq!(catalog.searches, vec!["elec".to_string()]);
    assert_eq!(layout.state().filter_value("category"), Some("Clothing"));

    layout.apply_toolbar(vec![ToolbarEvent::ClearFilters], &mut catalog);
    assert!(layout.state().filters().is_empty());
    assert_eq!(layout.state().search_query(), "elec");
}

#[test]
fn test_order_filters_and_search() {
    let orders = seed_orders();
    let mut filters = std::collections::BTreeMap::new();
    filters.insert("orderStatus".to_string(), "pending".to_string());

    let pending: Vec<_> = orders.iter().filter(|o| o.matches_filters(&filters)).collect();
    assert_eq!(pending.len(), 2);
    assert!(pending.iter().all(|o| o.order_status == OrderStatus::Pending));

    filters.insert("paymentStatus".to_string(), "refunded".to_string());
    assert_eq!(orders.iter().filter(|o| o.matches_filters(&filters)).count(), 0);

    let found: Vec<_> = orders.iter().filter(|o| o.matches_search("grace")).collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].payment_status, PaymentStatus::Unpaid);
}

#[test]
fn test_grid_sorts_and_pages_orders() {
    let orders = seed_orders();
    let fields: Vec<_> = orders.iter().map(to_fields).collect();
    let mut grid = GridState::with_page_size(5);

    grid.toggle_sort("total");
    grid.toggle_sort("total");
    let order = grid.order(&fields);
    assert_eq!(orders[order[0]].customer_name, "Henry Ford");
    assert_eq!(orders[order[9]].customer_name, "Alice Brown");

    assert_eq!(grid.page_count(orders.len()), 2);
    grid.next_page(orders.len());
    assert_eq!(grid.visible_range(orders.len()), 5..10);
    assert_eq!(grid.range_label(orders.len()), "6–10 of 10");
}

#[test]
fn test_export_orders_to_csv() -> Result<()> {
    let orders = seed_orders();
    let number: Column<Order> = Column::new("orderNumber", "Order");
    let customer: Column<Order> = Column::new("customerName", "Customer");

    let mut buffer = Vec::new();
    write_csv(&mut buffer, &[&number, &customer], &orders[..2])?;
    let text = String::from_utf8(buffer)?;
    assert_eq!(text, "Order,Customer\nORD-001,John Doe\nORD-002,Jane Smith\n");

    let path = env::temp_dir().join("radmin_orders_export_test.csv");
    let _ = fs::remove_file(&path);
    export_to_path(&path, &[&number, &customer], &orders)?;
    let written = fs::read_to_string(&path)?;
    assert_eq!(written.lines().count(), 11);
    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_every_theme_resolves() {
    let mut theme = ThemeContext::new();
    for variant in ThemeVariant::ALL {
        theme.set_variant(variant);
        for _ in 0..2 {
            theme.toggle_mode();
            let palette = theme.palette();
            assert_eq!(palette.mode, theme.mode());
            assert_eq!(*palette, ThemeContext::resolve(theme.mode(), variant));
        }
    }
    assert_eq!(theme.mode(), ThemeMode::Light);
    assert_eq!("ocean".parse::<ThemeVariant>().ok(), Some(ThemeVariant::Ocean));
}

#[test]
fn test_sidebar_navigation() {
    let mut sidebar = SidebarState::new();
    let mut location = Location::new("/");

    let products = MENU.iter().find(|i| i.path == "/products").unwrap();
    sidebar.click_item(products, &mut location);
    assert_eq!(location.route(), Route::Products);
    assert!(sidebar.is_submenu_open("Products"));

    let orders = MENU.iter().find(|i| i.path == "/orders").unwrap();
    sidebar.click_item(orders, &mut location);
    assert!(!sidebar.is_submenu_open("Products"));
    assert!(sidebar.is_submenu_open("Orders"));
    assert!(location.is_active("/orders"));

    location.navigate("/nowhere");
    assert_eq!(location.route(), Route::NotFound("/nowhere".to_string()));
}
