//! Paginated, sortable data grid with an appended actions column.

use crate::crud::formatting::to_fields;
use crate::crud::grid::{
    Column, Density, GridState, SortDir, ACTIONS_COLUMN_WIDTH, PAGE_SIZE_OPTIONS,
};
use egui::RichText;
use egui_extras::{Column as TableColumn, TableBuilder};

/// Row action chosen in the grid. Indices refer to the caller's row slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    View(usize),
    Edit(usize),
    Delete(usize),
    ExportRequested,
}

/// Renders the grid for `rows` and returns the action the user took, if any.
///
/// Sorting and paging only affect which row indices are drawn; `rows` is
/// never reordered.
pub fn render_data_grid<T: serde::Serialize>(
    ui: &mut egui::Ui,
    rows: &[T],
    columns: &[Column<T>],
    grid: &mut GridState,
) -> Option<GridEvent> {
    let mut event = None;

    let fields: Vec<_> = rows.iter().map(to_fields).collect();
    grid.clamp(rows.len());

    render_grid_controls(ui, columns, grid, &mut event);
    ui.add_space(4.0);

    let order = grid.order(&fields);
    let page_rows = &order[grid.visible_range(rows.len())];
    let visible: Vec<&Column<T>> = columns
        .iter()
        .filter(|c| grid.is_column_visible(c.field))
        .collect();
    let row_height = grid.density().row_height();
    let sort = grid.sort();
    let mut sort_clicked = None;

    let table_height = (ui.available_height() - 40.0).max(row_height * 2.0);

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .max_scroll_height(table_height)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
    for column in &visible {
        table = table.column(TableColumn::initial(column.width).at_least(40.0).clip(true));
    }
    table = table.column(TableColumn::exact(ACTIONS_COLUMN_WIDTH));

    table
        .header(32.0, |mut header| {
            for column in &visible {
                header.col(|ui| {
                    let marker = match sort {
                        Some(s) if s.field == column.field => match s.dir {
                            SortDir::Asc => " ⏶",
                            SortDir::Desc => " ⏷",
                        },
                        _ => "",
                    };
                    let text = RichText::new(format!("{}{}", column.header, marker)).strong();
                    if column.sortable {
                        if ui.add(egui::Button::new(text).frame(false)).clicked() {
                            sort_clicked = Some(column.field);
                        }
                    } else {
                        ui.label(text);
                    }
                });
            }
            header.col(|ui| {
                ui.label(RichText::new("Actions").strong());
            });
        })
        .body(|body| {
            body.rows(row_height, page_rows.len(), |mut row| {
                let idx = page_rows[row.index()];
                for column in &visible {
                    row.col(|ui| match column.renderer() {
                        Some(render) => render(ui, &rows[idx]),
                        None => {
                            ui.label(column.cell_text(&fields[idx]));
                        }
                    });
                }
                row.col(|ui| {
                    if ui.small_button("👁").on_hover_text("View").clicked() {
                        event = Some(GridEvent::View(idx));
                    }
                    if ui.small_button("✏").on_hover_text("Edit").clicked() {
                        event = Some(GridEvent::Edit(idx));
                    }
                    if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                        event = Some(GridEvent::Delete(idx));
                    }
                });
            });
        });

    if let Some(field) = sort_clicked {
        grid.toggle_sort(field);
    }

    if rows.is_empty() {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| ui.weak("No rows"));
    }

    ui.separator();
    render_pager(ui, rows.len(), grid);

    event
}

/// Column visibility, density and export controls above the table.
fn render_grid_controls<T>(
    ui: &mut egui::Ui,
    columns: &[Column<T>],
    grid: &mut GridState,
    event: &mut Option<GridEvent>,
) {
    ui.horizontal(|ui| {
        ui.menu_button("☰ Columns", |ui| {
            for column in columns {
                let mut shown = grid.is_column_visible(column.field);
                if ui.checkbox(&mut shown, column.header).changed() {
                    grid.set_column_visible(column.field, shown);
                }
            }
        });

        ui.menu_button("↕ Density", |ui| {
            for density in Density::ALL {
                if ui
                    .selectable_label(grid.density() == density, density.label())
                    .clicked()
                {
                    grid.set_density(density);
                }
            }
        });

        if ui.button("⬇ Export").clicked() {
            *event = Some(GridEvent::ExportRequested);
        }
    });
}

/// Page size selector and previous/next controls below the table.
fn render_pager(ui: &mut egui::Ui, total: usize, grid: &mut GridState) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        let last_page = grid.page_count(total) - 1;

        if ui
            .add_enabled(grid.page() < last_page, egui::Button::new("▶"))
            .clicked()
        {
            grid.next_page(total);
        }
        if ui
            .add_enabled(grid.page() > 0, egui::Button::new("◀"))
            .clicked()
        {
            grid.prev_page();
        }

        ui.label(grid.range_label(total));
        ui.add_space(16.0);

        let mut page_size = grid.page_size();
        egui::ComboBox::from_id_salt("crud_page_size")
            .selected_text(page_size.to_string())
            .width(60.0)
            .show_ui(ui, |ui| {
                for size in PAGE_SIZE_OPTIONS {
                    ui.selectable_value(&mut page_size, size, size.to_string());
                }
            });
        if page_size != grid.page_size() {
            grid.set_page_size(page_size);
        }
        ui.label("Rows per page:");
    });
}
