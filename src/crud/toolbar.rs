//! Search box and filter panel above the data grid.

use crate::crud::filters::FilterOption;
use crate::crud::state::CrudState;
use crate::traits::Entity;

/// Events raised by the toolbar. The toolbar never changes state itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarEvent {
    SearchChanged(String),
    FilterChanged { field: String, value: String },
    ClearFilters,
    ToggleFilters,
}

/// Renders the toolbar and returns what the user changed this frame.
pub fn render_toolbar<T: Entity>(
    ui: &mut egui::Ui,
    state: &CrudState<T>,
    filter_options: &[FilterOption],
) -> Vec<ToolbarEvent> {
    let mut events = Vec::new();

    ui.horizontal(|ui| {
        let mut query = state.search_query().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("🔍 Search...")
                .desired_width(260.0),
        );
        if response.changed() {
            events.push(ToolbarEvent::SearchChanged(query));
        }

        if !filter_options.is_empty() {
            let label = if state.filters().is_empty() {
                "⛃ Filters".to_string()
            } else {
                format!("⛃ Filters ({})", state.filters().len())
            };
            if ui.selectable_label(state.show_filters(), label).clicked() {
                events.push(ToolbarEvent::ToggleFilters);
            }
        }
    });

    if state.show_filters() && !filter_options.is_empty() {
        ui.add_space(4.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for filter in filter_options {
                    let current = state.filter_value(filter.field);
                    ui.label(filter.label);
                    egui::ComboBox::from_id_salt(("crud_filter", filter.field))
                        .selected_text(filter.label_for(current))
                        .show_ui(ui, |ui| {
                            if ui.selectable_label(current.is_none(), "All").clicked() {
                                events.push(ToolbarEvent::FilterChanged {
                                    field: filter.field.to_string(),
                                    value: String::new(),
                                });
                            }
                            for choice in &filter.options {
                                if ui
                                    .selectable_label(current == Some(choice.value), choice.label)
                                    .clicked()
                                {
                                    events.push(ToolbarEvent::FilterChanged {
                                        field: filter.field.to_string(),
                                        value: choice.value.to_string(),
                                    });
                                }
                            }
                        });
                    ui.add_space(8.0);
                }

                if ui
                    .add_enabled(!state.filters().is_empty(), egui::Button::new("Clear Filters"))
                    .clicked()
                {
                    events.push(ToolbarEvent::ClearFilters);
                }
            });
        });
    }

    events
}
