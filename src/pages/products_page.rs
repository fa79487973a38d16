//! Products page: a CRUD screen over the in-memory product list.

use radmin::crud::grid::GridState;
use radmin::entities::mock_data::seed_products;
use radmin::entities::{MockRepository, Product, ProductDraft};
use radmin::{Column, Completion, CrudHandler, CrudLayout, CrudView};

/// Applies product mutations directly to the store.
pub struct ProductHandler {
    repo: MockRepository<Product>,
    search: String,
}

impl ProductHandler {
    pub fn new(repo: MockRepository<Product>) -> Self {
        Self {
            repo,
            search: String::new(),
        }
    }

    /// Rows matching the current search text.
    pub fn rows(&self) -> Vec<Product> {
        self.repo
            .snapshot()
            .into_iter()
            .filter(|p| p.matches_search(&self.search))
            .collect()
    }
}

impl CrudHandler<Product> for ProductHandler {
    fn search(&mut self, query: &str) {
        tracing::debug!(query, "product search");
        self.search = query.to_string();
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

pub struct ProductsPage {
    handler: ProductHandler,
    layout: CrudLayout<Product>,
    view: CrudView<Product>,
}

impl ProductsPage {
    pub fn new(page_size: usize) -> Self {
        Self {
            handler: ProductHandler::new(MockRepository::new(seed_products())),
            layout: CrudLayout::new(GridState::with_page_size(page_size)),
            view: product_view(),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let rows = self.handler.rows();
        self.layout.show(ui, &self.view, &rows, &mut self.handler);
    }
}

fn product_view() -> CrudView<Product> {
    let columns = vec![
        Column::new("id", "ID").width(90.0),
        Column::new("name", "Product Name").width(220.0),
        Column::new("price", "Price"),
        Column::new("category", "Category"),
        Column::new("stock", "Stock"),
    ];

    CrudView::new("Products", columns, render_product_form)
}

fn render_product_form(ui: &mut egui::Ui, draft: &mut ProductDraft) {
    let fields: [(&str, &mut String); 4] = [
        ("Product Name *", &mut draft.name),
        ("Price *", &mut draft.price),
        ("Category *", &mut draft.category),
        ("Stock *", &mut draft.stock),
    ];

    for (label, value) in fields {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(value).desired_width(240.0));
        ui.end_row();
    }
}
