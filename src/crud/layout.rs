//! CRUD page composition: title bar, toolbar, grid and dialogs.
//!
//! [`CrudView`] is the caller's description of a page; [`CrudLayout`] holds
//! the per-page interaction state across frames and routes widget events to
//! the state machine and the page's [`CrudHandler`].

use crate::crud::data_grid::{render_data_grid, GridEvent};
use crate::crud::dialogs::{
    render_delete_dialog, render_edit_dialog, render_view_dialog, DetailRenderer, DialogEvent,
    FormRenderer,
};
use crate::crud::export::export_with_dialog;
use crate::crud::filters::FilterOption;
use crate::crud::formatting::to_fields;
use crate::crud::grid::{Column, GridState};
use crate::crud::state::CrudState;
use crate::crud::toolbar::{render_toolbar, ToolbarEvent};
use crate::traits::{CrudHandler, FormModel};
use egui::RichText;

/// Everything a page supplies to describe its CRUD screen.
///
/// `render_form` draws inside a two-column grid; each field should add a label,
/// its widget, and call `ui.end_row()`.
pub struct CrudView<T: FormModel> {
    pub title: String,
    pub columns: Vec<Column<T>>,
    pub render_form: FormRenderer<T>,
    pub render_details: Option<DetailRenderer<T>>,
    pub filter_options: Vec<FilterOption>,
}

impl<T: FormModel> CrudView<T> {
    pub fn new(
        title: impl Into<String>,
        columns: Vec<Column<T>>,
        render_form: impl Fn(&mut egui::Ui, &mut T::Draft) + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            columns,
            render_form: Box::new(render_form),
            render_details: None,
            filter_options: Vec::new(),
        }
    }

    pub fn with_details(mut self, render: impl Fn(&mut egui::Ui, &T) + 'static) -> Self {
        self.render_details = Some(Box::new(render));
        self
    }

    pub fn with_filters(mut self, filters: Vec<FilterOption>) -> Self {
        self.filter_options = filters;
        self
    }
}

/// Status line shown under the toolbar after an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// Per-page state of a CRUD screen.
pub struct CrudLayout<T: FormModel> {
    state: CrudState<T>,
    grid: GridState,
    draft: T::Draft,
    form_error: Option<String>,
    notice: Option<Notice>,
}

impl<T: FormModel> Default for CrudLayout<T> {
    fn default() -> Self {
        Self::new(GridState::new())
    }
}

impl<T: FormModel> CrudLayout<T> {
    pub fn new(grid: GridState) -> Self {
        Self {
            state: CrudState::new(),
            grid,
            draft: T::to_draft(None),
            form_error: None,
            notice: None,
        }
    }

    // ===== Queries =====

    pub fn state(&self) -> &CrudState<T> {
        &self.state
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn draft(&self) -> &T::Draft {
        &self.draft
    }

    /// Validation message from the last submit, if the draft was rejected.
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    // ===== Commands =====

    /// Reports a deferred mutation result to the dialog state.
    pub fn settle(&mut self, result: anyhow::Result<()>) {
        self.state.settle(result);
    }

    pub fn draft_mut(&mut self) -> &mut T::Draft {
        &mut self.draft
    }

    /// Opens the create form. Ignored while a mutation is in flight.
    pub fn open_create(&mut self) {
        if self.state.is_busy() {
            return;
        }
        self.draft = T::to_draft(None);
        self.form_error = None;
        self.state.open_create();
    }

    pub fn open_edit(&mut self, item: T) {
        if self.state.is_busy() {
            return;
        }
        self.draft = T::to_draft(Some(&item));
        self.form_error = None;
        self.state.open_edit(item);
    }

    pub fn open_view(&mut self, item: T) {
        self.state.open_view(item);
    }

    pub fn open_delete(&mut self, item: &T) {
        self.state.open_delete(item.id());
    }

    /// Converts the draft and submits it; validation errors stay in the form.
    pub fn submit_draft<H>(&mut self, handler: &mut H) -> bool
    where
        H: CrudHandler<T> + ?Sized,
    {
        match T::from_draft(&self.draft, self.state.selected_item()) {
            Ok(item) => {
                self.form_error = None;
                self.state.submit(item, handler)
            }
            Err(err) => {
                tracing::debug!(error = %err, "form rejected");
                self.form_error = Some(err.to_string());
                false
            }
        }
    }

    /// Applies toolbar events to the state.
    pub fn apply_toolbar<H>(&mut self, events: Vec<ToolbarEvent>, handler: &mut H)
    where
        H: CrudHandler<T> + ?Sized,
    {
        for event in events {
            match event {
                ToolbarEvent::SearchChanged(query) => self.state.change_search(query, handler),
                ToolbarEvent::FilterChanged { field, value } => {
                    self.state.change_filter(field, value)
                }
                ToolbarEvent::ClearFilters => self.state.clear_filters(),
                ToolbarEvent::ToggleFilters => self.state.toggle_filters(),
            }
        }
    }

    /// Opens the dialog for a row action. Export is handled by [`Self::show`].
    pub fn apply_grid(&mut self, event: GridEvent, rows: &[T]) {
        let row = |idx: usize| rows.get(idx).cloned();
        match event {
            GridEvent::View(idx) => {
                if let Some(item) = row(idx) {
                    self.open_view(item);
                }
            }
            GridEvent::Edit(idx) => {
                if let Some(item) = row(idx) {
                    self.open_edit(item);
                }
            }
            GridEvent::Delete(idx) => {
                if let Some(item) = rows.get(idx) {
                    self.open_delete(item);
                }
            }
            GridEvent::ExportRequested => {}
        }
    }

    /// Applies a dialog button click.
    pub fn apply_dialog<H>(&mut self, event: DialogEvent, handler: &mut H)
    where
        H: CrudHandler<T> + ?Sized,
    {
        match event {
            DialogEvent::Submit => {
                self.submit_draft(handler);
            }
            DialogEvent::CancelEdit => {
                self.form_error = None;
                self.state.close_edit();
            }
            DialogEvent::ConfirmDelete => {
                self.state.confirm_delete(handler);
            }
            DialogEvent::CancelDelete => self.state.close_delete(),
            DialogEvent::CloseView => self.state.close_view(),
        }
    }

    /// Renders the whole CRUD screen for this frame.
    pub fn show<H>(&mut self, ui: &mut egui::Ui, view: &CrudView<T>, rows: &[T], handler: &mut H)
    where
        H: CrudHandler<T> + ?Sized,
    {
        ui.horizontal(|ui| {
            ui.heading(&view.title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("➕ Add New").clicked() {
                    self.open_create();
                }
            });
        });
        ui.add_space(8.0);

        let events = render_toolbar(ui, &self.state, &view.filter_options);
        self.apply_toolbar(events, handler);

        self.show_notice(ui);
        ui.add_space(8.0);

        if let Some(event) = render_data_grid(ui, rows, &view.columns, &mut self.grid) {
            match event {
                GridEvent::ExportRequested => self.export(view, rows),
                other => self.apply_grid(other, rows),
            }
        }

        let ctx = ui.ctx().clone();
        let dialog_event = render_edit_dialog(
            &ctx,
            &self.state,
            &mut self.draft,
            &view.render_form,
            self.form_error.as_deref(),
        )
        .or_else(|| render_delete_dialog(&ctx, &self.state))
        .or_else(|| render_view_dialog(&ctx, &self.state, view.render_details.as_ref()));

        if let Some(event) = dialog_event {
            self.apply_dialog(event, handler);
        }
    }

    fn show_notice(&mut self, ui: &mut egui::Ui) {
        let Some(notice) = &self.notice else {
            return;
        };

        let mut dismiss = false;
        ui.horizontal(|ui| {
            match notice {
                Notice::Info(text) => {
                    ui.label(text);
                }
                Notice::Error(text) => {
                    let color = ui.visuals().error_fg_color;
                    ui.label(RichText::new(text).color(color));
                }
            }
            dismiss = ui.small_button("✖").clicked();
        });

        if dismiss {
            self.notice = None;
        }
    }

    /// `rows` in the order the grid currently shows them.
    pub fn rows_in_view_order(&self, rows: &[T]) -> Vec<T> {
        let fields: Vec<_> = rows.iter().map(to_fields).collect();
        self.grid
            .order(&fields)
            .into_iter()
            .map(|idx| rows[idx].clone())
            .collect()
    }

    fn export(&mut self, view: &CrudView<T>, rows: &[T]) {
        let columns: Vec<&Column<T>> = view
            .columns
            .iter()
            .filter(|c| self.grid.is_column_visible(c.field))
            .collect();

        let ordered = self.rows_in_view_order(rows);
        self.notice = match export_with_dialog(&view.title, &columns, &ordered) {
            Ok(Some(path)) => Some(Notice::Info(format!(
                "Exported {} rows to {}",
                rows.len(),
                path.display()
            ))),
            Ok(None) => None,
            Err(err) => {
                tracing::error!(error = %format!("{err:#}"), "export failed");
                Some(Notice::Error(format!("Export failed: {err:#}")))
            }
        };
    }
}
