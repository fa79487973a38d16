//! Orders page: status chips, currency and date formatting, filters and
//! background mutations.

use crate::io::{MutationResult, MutationRunner};
use crate::utils::{currency_cell, date_cell, format_currency, format_date};
use egui::RichText;
use radmin::crud::filters::FilterOption;
use radmin::crud::grid::GridState;
use radmin::entities::mock_data::{generate_orders, seed_orders};
use radmin::entities::order::ChipColors;
use radmin::entities::{MockRepository, Order, OrderDraft, OrderStatus, PaymentStatus};
use radmin::{hex_to_color32, Column, Completion, CrudHandler, CrudLayout, CrudView};
use std::collections::BTreeMap;

/// Sends order mutations to the background runner.
pub struct OrderHandler {
    repo: MockRepository<Order>,
    runner: MutationRunner,
    search: String,
}

impl OrderHandler {
    pub fn new(repo: MockRepository<Order>, runner: MutationRunner) -> Self {
        Self {
            repo,
            runner,
            search: String::new(),
        }
    }

    /// Rows matching the search text and the chosen filters.
    pub fn rows(&self, filters: &BTreeMap<String, String>) -> Vec<Order> {
        self.repo
            .snapshot()
            .into_iter()
            .filter(|o| o.matches_search(&self.search) && o.matches_filters(filters))
            .collect()
    }

    pub fn poll(&mut self) -> MutationResult {
        self.runner.check_completion()
    }

    fn run<F>(&mut self, job: F) -> Completion
    where
        F: FnOnce(&MockRepository<Order>) -> anyhow::Result<()> + Send + 'static,
    {
        if self.runner.is_running() {
            tracing::warn!("order mutation started while another is still running");
        }
        let repo = self.repo.clone();
        self.runner.start(move || job(&repo));
        Completion::Deferred
    }
}

impl CrudHandler<Order> for OrderHandler {
    fn search(&mut self, query: &str) {
        tracing::debug!(query, "order search");
        self.search = query.to_string();
    }

    fn add(&mut self, item: Order) -> Completion {
        self.run(move |repo| repo.add(item).map(|_| ()))
    }

    fn update(&mut self, item: Order) -> Completion {
        self.run(move |repo| repo.update(item))
    }

    fn delete(&mut self, id: u32) -> Completion {
        self.run(move |repo| repo.delete(id))
    }
}

pub struct OrdersPage {
    handler: OrderHandler,
    layout: CrudLayout<Order>,
    view: CrudView<Order>,
}

impl OrdersPage {
    /// Seeds ten orders plus `sample_orders` generated ones.
    pub fn new(page_size: usize, sample_orders: usize, seed: u64, runner: MutationRunner) -> Self {
        let mut orders = seed_orders();
        let next_id = orders.len() as u32;
        orders.extend(generate_orders(sample_orders, next_id, seed));
        tracing::info!(count = orders.len(), "orders seeded");

        Self {
            handler: OrderHandler::new(MockRepository::new(orders), runner),
            layout: CrudLayout::new(GridState::with_page_size(page_size)),
            view: order_view(),
        }
    }

    /// Collects a finished background mutation. Called once per frame.
    pub fn poll(&mut self) {
        if let MutationResult::Finished(result) = self.handler.poll() {
            self.layout.settle(result);
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let rows = self.handler.rows(self.layout.state().filters());
        self.layout.show(ui, &self.view, &rows, &mut self.handler);
    }
}

fn order_view() -> CrudView<Order> {
    let columns = vec![
        Column::new("orderNumber", "Order")
            .width(130.0)
            .render_with(|ui, order: &Order| {
                let color = ui.visuals().hyperlink_color;
                ui.label(RichText::new(&order.order_number).strong().color(color));
            }),
        Column::new("customerName", "Customer").width(180.0),
        Column::new("total", "Total")
            .width(120.0)
            .format_with(currency_cell)
            .render_with(|ui, order: &Order| {
                ui.label(RichText::new(format_currency(order.total)).strong());
            }),
        Column::new("orderStatus", "Status")
            .width(130.0)
            .render_with(|ui, order: &Order| {
                status_chip(ui, order.order_status.label(), order.order_status.chip_colors());
            }),
        Column::new("paymentStatus", "Payment")
            .width(130.0)
            .render_with(|ui, order: &Order| {
                status_chip(ui, order.payment_status.label(), order.payment_status.chip_colors());
            }),
        Column::new("orderDate", "Date").width(120.0).format_with(date_cell),
    ];

    let order_filter = OrderStatus::ALL
        .into_iter()
        .fold(FilterOption::new("orderStatus", "Order Status"), |f, s| {
            f.choice(s.key(), s.label())
        });
    let payment_filter = PaymentStatus::ALL
        .into_iter()
        .fold(FilterOption::new("paymentStatus", "Payment Status"), |f, s| {
            f.choice(s.key(), s.label())
        });

    CrudView::new("Orders", columns, render_order_form)
        .with_details(render_order_details)
        .with_filters(vec![order_filter, payment_filter])
}

/// Small rounded label with status colors.
fn status_chip(ui: &mut egui::Ui, label: &str, (fg, bg): ChipColors) {
    egui::Frame::new()
        .fill(hex_to_color32(bg))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(label).strong().small().color(hex_to_color32(fg)));
        });
}

fn render_order_form(ui: &mut egui::Ui, draft: &mut OrderDraft) {
    ui.label("Order Number *");
    ui.add(egui::TextEdit::singleline(&mut draft.order_number).desired_width(240.0));
    ui.end_row();

    ui.label("Customer Name *");
    ui.add(egui::TextEdit::singleline(&mut draft.customer_name).desired_width(240.0));
    ui.end_row();

    ui.label("Total *");
    ui.add(egui::TextEdit::singleline(&mut draft.total).desired_width(240.0));
    ui.end_row();

    ui.label("Order Status *");
    egui::ComboBox::from_id_salt("order_status_select")
        .selected_text(draft.order_status.label())
        .show_ui(ui, |ui| {
            for status in OrderStatus::ALL {
                ui.selectable_value(&mut draft.order_status, status, status.label());
            }
        });
    ui.end_row();

    ui.label("Payment Status *");
    egui::ComboBox::from_id_salt("payment_status_select")
        .selected_text(draft.payment_status.label())
        .show_ui(ui, |ui| {
            for status in PaymentStatus::ALL {
                ui.selectable_value(&mut draft.payment_status, status, status.label());
            }
        });
    ui.end_row();
}

fn render_order_details(ui: &mut egui::Ui, order: &Order) {
    fn caption(ui: &mut egui::Ui, text: &str) {
        ui.label(RichText::new(text).small().weak());
    }

    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = 4.0;

        caption(ui, "Order Number");
        ui.label(RichText::new(&order.order_number).strong());
        ui.add_space(8.0);

        caption(ui, "Customer Name");
        ui.label(&order.customer_name);
        ui.add_space(8.0);

        caption(ui, "Total");
        ui.label(RichText::new(format_currency(order.total)).strong());
        ui.add_space(8.0);

        caption(ui, "Order Status");
        status_chip(ui, order.order_status.label(), order.order_status.chip_colors());
        ui.add_space(8.0);

        caption(ui, "Payment Status");
        status_chip(ui, order.payment_status.label(), order.payment_status.chip_colors());
        ui.add_space(8.0);

        caption(ui, "Order Date");
        ui.label(format_date(order.order_date));
    });
}
