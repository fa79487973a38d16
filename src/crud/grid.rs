//! Column descriptors and grid state (pagination, sorting, density, visibility).
//!
//! Rows are read through their serialized field maps, so a column only needs a
//! field name. Sorting and pagination produce row indices; the row data itself
//! is never reordered or modified.

use crate::crud::formatting::display_value;
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::ops::Range;

/// Page sizes offered by the pager.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 25, 50, 100];

/// Page size used until the user picks another.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Width of the injected actions column.
pub const ACTIONS_COLUMN_WIDTH: f32 = 120.0;

type CellRenderer<T> = Box<dyn Fn(&mut egui::Ui, &T)>;

/// A caller-supplied column of the data grid.
pub struct Column<T> {
    pub field: &'static str,
    pub header: &'static str,
    pub width: f32,
    pub sortable: bool,
    format: Option<fn(&Value) -> String>,
    render: Option<CellRenderer<T>>,
}

impl<T> Column<T> {
    pub fn new(field: &'static str, header: &'static str) -> Self {
        Self {
            field,
            header,
            width: 130.0,
            sortable: true,
            format: None,
            render: None,
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Formats the raw field value for display and CSV export.
    pub fn format_with(mut self, format: fn(&Value) -> String) -> Self {
        self.format = Some(format);
        self
    }

    /// Draws the cell with a custom widget instead of plain text.
    pub fn render_with(mut self, render: impl Fn(&mut egui::Ui, &T) + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// Text for this column's cell in a serialized row.
    pub fn cell_text(&self, row: &Map<String, Value>) -> String {
        match (row.get(self.field), self.format) {
            (Some(value), Some(format)) => format(value),
            (Some(Value::Null), None) | (None, _) => String::new(),
            (Some(value), None) => display_value(Some(value)),
        }
    }

    pub fn renderer(&self) -> Option<&CellRenderer<T>> {
        self.render.as_ref()
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDir {
    Asc,
    Desc,
}

/// Active sort: a field name and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub field: &'static str,
    pub dir: SortDir,
}

/// Row height presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Density {
    Compact,
    #[default]
    Standard,
    Comfortable,
}

impl Density {
    pub const ALL: [Density; 3] = [Density::Compact, Density::Standard, Density::Comfortable];

    pub fn row_height(self) -> f32 {
        match self {
            Density::Compact => 28.0,
            Density::Standard => 40.0,
            Density::Comfortable => 52.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Density::Compact => "Compact",
            Density::Standard => "Standard",
            Density::Comfortable => "Comfortable",
        }
    }
}

/// Local state of the data grid. Never holds row data.
#[derive(Debug, Clone)]
pub struct GridState {
    page: usize,
    page_size: usize,
    sort: Option<SortSpec>,
    density: Density,
    hidden_columns: HashSet<&'static str>,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new()
    }
}

impl GridState {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Starts with the given page size if it is one of the offered sizes.
    pub fn with_page_size(page_size: usize) -> Self {
        let page_size = if PAGE_SIZE_OPTIONS.contains(&page_size) {
            page_size
        } else {
            tracing::warn!(page_size, "unsupported page size, using default");
            DEFAULT_PAGE_SIZE
        };

        Self {
            page: 0,
            page_size,
            sort: None,
            density: Density::default(),
            hidden_columns: HashSet::new(),
        }
    }

    // ===== Pagination =====

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for `total` rows; an empty grid still has one page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        if PAGE_SIZE_OPTIONS.contains(&page_size) && page_size != self.page_size {
            self.page_size = page_size;
            self.page = 0;
        }
    }

    pub fn next_page(&mut self, total: usize) {
        if self.page + 1 < self.page_count(total) {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Pulls the page index back into range after rows were removed.
    pub fn clamp(&mut self, total: usize) {
        let last = self.page_count(total) - 1;
        if self.page > last {
            self.page = last;
        }
    }

    /// Row positions shown on the current page.
    pub fn visible_range(&self, total: usize) -> Range<usize> {
        let start = (self.page * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    /// "1–10 of 23" style summary.
    pub fn range_label(&self, total: usize) -> String {
        let range = self.visible_range(total);
        if range.is_empty() {
            format!("0 of {}", total)
        } else {
            format!("{}–{} of {}", range.start + 1, range.end, total)
        }
    }

    // ===== Sorting =====

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Cycles a column through ascending, descending and unsorted.
    pub fn toggle_sort(&mut self, field: &'static str) {
        self.sort = match self.sort {
            Some(SortSpec { field: f, dir: SortDir::Asc }) if f == field => Some(SortSpec {
                field,
                dir: SortDir::Desc,
            }),
            Some(SortSpec { field: f, dir: SortDir::Desc }) if f == field => None,
            _ => Some(SortSpec {
                field,
                dir: SortDir::Asc,
            }),
        };
    }

    /// Row indices in display order for the active sort.
    pub fn order(&self, rows: &[Map<String, Value>]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..rows.len()).collect();
        if let Some(spec) = self.sort {
            indices.sort_by(|&a, &b| {
                let ord = compare_values(rows[a].get(spec.field), rows[b].get(spec.field));
                match spec.dir {
                    SortDir::Asc => ord,
                    SortDir::Desc => ord.reverse(),
                }
            });
        }
        indices
    }

    // ===== Density & Column Visibility =====

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn set_density(&mut self, density: Density) {
        self.density = density;
    }

    pub fn is_column_visible(&self, field: &str) -> bool {
        !self.hidden_columns.contains(field)
    }

    pub fn set_column_visible(&mut self, field: &'static str, visible: bool) {
        if visible {
            self.hidden_columns.remove(field);
        } else {
            self.hidden_columns.insert(field);
        }
    }
}

/// Orders two JSON values: missing and null first, numbers numerically,
/// strings case-insensitively, anything else by its text.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => {
            x.to_lowercase().cmp(&y.to_lowercase())
        }
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(values: &[Value]) -> Vec<Map<String, Value>> {
        values
            .iter()
            .map(|v| v.as_object().cloned().unwrap())
            .collect()
    }

    #[test]
    fn test_pagination_ranges() {
        let mut grid = GridState::new();
        assert_eq!(grid.page_size(), 10);
        assert_eq!(grid.page_count(0), 1);
        assert_eq!(grid.page_count(23), 3);
        assert_eq!(grid.visible_range(23), 0..10);

        grid.next_page(23);
        grid.next_page(23);
        assert_eq!(grid.visible_range(23), 20..23);
        assert_eq!(grid.range_label(23), "21–23 of 23");

        // already on the last page
        grid.next_page(23);
        assert_eq!(grid.page(), 2);
    }

    #[test]
    fn test_clamp_after_rows_removed() {
        let mut grid = GridState::with_page_size(5);
        grid.next_page(12);
        grid.next_page(12);
        assert_eq!(grid.page(), 2);

        grid.clamp(6);
        assert_eq!(grid.page(), 1);
        grid.clamp(0);
        assert_eq!(grid.page(), 0);
        assert_eq!(grid.range_label(0), "0 of 0");
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut grid = GridState::with_page_size(5);
        grid.next_page(20);
        grid.set_page_size(25);
        assert_eq!(grid.page(), 0);
        assert_eq!(grid.page_size(), 25);

        grid.set_page_size(7);
        assert_eq!(grid.page_size(), 25);
    }

    #[test]
    fn test_unsupported_initial_page_size_falls_back() {
        assert_eq!(GridState::with_page_size(3).page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(GridState::with_page_size(50).page_size(), 50);
    }

    #[test]
    fn test_sort_cycle() {
        let mut grid = GridState::new();
        grid.toggle_sort("price");
        assert_eq!(grid.sort(), Some(SortSpec { field: "price", dir: SortDir::Asc }));
        grid.toggle_sort("price");
        assert_eq!(grid.sort(), Some(SortSpec { field: "price", dir: SortDir::Desc }));
        grid.toggle_sort("price");
        assert_eq!(grid.sort(), None);

        grid.toggle_sort("price");
        grid.toggle_sort("name");
        assert_eq!(grid.sort(), Some(SortSpec { field: "name", dir: SortDir::Asc }));
    }

    #[test]
    fn test_numeric_sort_is_numeric() {
        let data = rows(&[
            json!({"price": 100.0}),
            json!({"price": 9.5}),
            json!({"price": null}),
            json!({"price": 25}),
        ]);
        let mut grid = GridState::new();
        grid.toggle_sort("price");
        assert_eq!(grid.order(&data), vec![2, 1, 3, 0]);
        grid.toggle_sort("price");
        assert_eq!(grid.order(&data), vec![0, 3, 1, 2]);
    }

    #[test]
    fn test_string_sort_ignores_case() {
        let data = rows(&[json!({"name": "beta"}), json!({"name": "Alpha"})]);
        let mut grid = GridState::new();
        assert_eq!(grid.order(&data), vec![0, 1]);
        grid.toggle_sort("name");
        assert_eq!(grid.order(&data), vec![1, 0]);
    }

    #[test]
    fn test_column_visibility() {
        let mut grid = GridState::new();
        assert!(grid.is_column_visible("stock"));
        grid.set_column_visible("stock", false);
        assert!(!grid.is_column_visible("stock"));
        grid.set_column_visible("stock", true);
        assert!(grid.is_column_visible("stock"));
    }

    #[test]
    fn test_cell_text() {
        let row = json!({"total": 5.0, "note": null}).as_object().cloned().unwrap();
        let plain: Column<()> = Column::new("total", "Total");
        assert_eq!(plain.cell_text(&row), "5");
        let fractional = json!({"total": 99.99}).as_object().cloned().unwrap();
        assert_eq!(plain.cell_text(&fractional), "99.99");

        let formatted: Column<()> =
            Column::new("total", "Total").format_with(|v| format!("${:.2}", v.as_f64().unwrap_or(0.0)));
        assert_eq!(formatted.cell_text(&row), "$5.00");

        let missing: Column<()> = Column::new("absent", "Absent");
        assert_eq!(missing.cell_text(&row), "");
        let null: Column<()> = Column::new("note", "Note");
        assert_eq!(null.cell_text(&row), "");
    }
}
