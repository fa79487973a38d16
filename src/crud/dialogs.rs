//! Edit/create, delete confirmation and detail dialogs.
//!
//! Each dialog is an `egui::Modal`, so the grid and toolbar behind it cannot be
//! clicked while it is open. Dialogs only report what the user clicked; the
//! layout decides what happens next.

use crate::crud::formatting::detail_rows;
use crate::crud::state::{CrudState, PendingAction};
use crate::traits::{Entity, FormModel};
use egui::RichText;

/// Warning shown in the delete confirmation.
pub const DELETE_WARNING: &str =
    "Are you sure you want to delete this item? This action cannot be undone.";

/// Button clicks inside a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    Submit,
    CancelEdit,
    ConfirmDelete,
    CancelDelete,
    CloseView,
}

/// Draws the caller's form fields into the draft.
pub type FormRenderer<T> = Box<dyn Fn(&mut egui::Ui, &mut <T as FormModel>::Draft)>;

/// Draws a custom detail view for a record.
pub type DetailRenderer<T> = Box<dyn Fn(&mut egui::Ui, &T)>;

/// Title of the edit dialog for create or edit mode.
pub fn edit_title(creating: bool) -> &'static str {
    if creating {
        "Add New Item"
    } else {
        "Edit Item"
    }
}

/// Label of the edit dialog's primary button.
pub fn submit_label(creating: bool) -> &'static str {
    if creating {
        "Add"
    } else {
        "Save Changes"
    }
}

/// Titled modal. Escape or a backdrop click shows up as `should_close()`.
fn dialog_modal<R>(
    ctx: &egui::Context,
    id_salt: &'static str,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::ModalResponse<R> {
    egui::Modal::new(egui::Id::new(id_salt)).show(ctx, |ui| {
        ui.set_min_width(360.0);
        ui.heading(title);
        ui.separator();
        ui.add_space(4.0);
        add_contents(ui)
    })
}

fn error_line(ui: &mut egui::Ui, message: &str) {
    let color = ui.visuals().error_fg_color;
    ui.label(RichText::new(message).color(color));
}

/// Renders the edit form when the edit dialog is open.
///
/// `form_error` is a validation message from the last submit attempt.
pub fn render_edit_dialog<T: FormModel>(
    ctx: &egui::Context,
    state: &CrudState<T>,
    draft: &mut T::Draft,
    render_form: &FormRenderer<T>,
    form_error: Option<&str>,
) -> Option<DialogEvent> {
    if !state.is_edit_open() {
        return None;
    }

    let creating = state.is_creating();
    let busy = state.pending() == Some(PendingAction::Save);
    let mut event = None;

    let modal = dialog_modal(ctx, "crud_edit_dialog", edit_title(creating), |ui| {
        ui.add_enabled_ui(!busy, |ui| {
            egui::Grid::new("crud_edit_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| render_form(ui, draft));
        });

        if let Some(message) = form_error.or(state.last_error()) {
            ui.add_space(6.0);
            error_line(ui, message);
        }

        ui.add_space(8.0);
        ui.separator();
        ui.horizontal(|ui| {
            if ui.add_enabled(!busy, egui::Button::new("Cancel")).clicked() {
                event = Some(DialogEvent::CancelEdit);
            }
            if ui
                .add_enabled(!busy, egui::Button::new(submit_label(creating)))
                .clicked()
            {
                event = Some(DialogEvent::Submit);
            }
            if busy {
                ui.spinner();
            }
        });
    });

    if event.is_none() && !busy && modal.should_close() {
        event = Some(DialogEvent::CancelEdit);
    }
    event
}

/// Renders the delete confirmation when it is open.
pub fn render_delete_dialog<T: Entity>(
    ctx: &egui::Context,
    state: &CrudState<T>,
) -> Option<DialogEvent> {
    if !state.is_delete_open() {
        return None;
    }

    let busy = state.pending() == Some(PendingAction::Delete);
    let mut event = None;

    let modal = dialog_modal(ctx, "crud_delete_dialog", "Confirm Delete", |ui| {
        ui.label(DELETE_WARNING);

        if let Some(message) = state.last_error() {
            ui.add_space(6.0);
            error_line(ui, message);
        }

        ui.add_space(8.0);
        ui.separator();
        ui.horizontal(|ui| {
            if ui.add_enabled(!busy, egui::Button::new("Cancel")).clicked() {
                event = Some(DialogEvent::CancelDelete);
            }
            let delete = egui::Button::new(RichText::new("Delete").color(egui::Color32::WHITE))
                .fill(ui.visuals().error_fg_color);
            if ui.add_enabled(!busy, delete).clicked() {
                event = Some(DialogEvent::ConfirmDelete);
            }
            if busy {
                ui.spinner();
            }
        });
    });

    if event.is_none() && !busy && modal.should_close() {
        event = Some(DialogEvent::CancelDelete);
    }
    event
}

/// Renders the read-only detail view when it is open.
///
/// Without a custom renderer every serialized field is listed with a
/// humanized label.
pub fn render_view_dialog<T: Entity>(
    ctx: &egui::Context,
    state: &CrudState<T>,
    render_details: Option<&DetailRenderer<T>>,
) -> Option<DialogEvent> {
    let item = match state.selected_item() {
        Some(item) if state.is_view_open() => item,
        _ => return None,
    };

    let mut event = None;

    let modal = dialog_modal(ctx, "crud_view_dialog", "View Details", |ui| {
        match render_details {
            Some(render) => render(ui, item),
            None => {
                egui::Grid::new("crud_view_fields")
                    .num_columns(2)
                    .spacing([16.0, 6.0])
                    .striped(true)
                    .show(ui, |ui| {
                        for (label, value) in detail_rows(item) {
                            ui.label(RichText::new(label).strong());
                            ui.label(value);
                            ui.end_row();
                        }
                    });
            }
        }

        ui.add_space(8.0);
        ui.separator();
        if ui.button("Close").clicked() {
            event = Some(DialogEvent::CloseView);
        }
    });

    if event.is_none() && modal.should_close() {
        event = Some(DialogEvent::CloseView);
    }
    event
}
