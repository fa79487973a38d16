//! Generic CRUD scaffold
//!
//! - `state`: dialog/search/filter state machine, no rendering
//! - `grid`: column descriptors and grid paging/sorting state
//! - `toolbar`, `data_grid`, `dialogs`: egui widgets that report events
//! - `layout`: composes the widgets for one page
//! - `export`: CSV export of grid rows

pub mod data_grid;
pub mod dialogs;
pub mod export;
pub mod filters;
pub mod formatting;
pub mod grid;
pub mod layout;
pub mod state;
pub mod toolbar;

pub use data_grid::GridEvent;
pub use dialogs::DialogEvent;
pub use filters::FilterOption;
pub use grid::{Column, Density, GridState};
pub use layout::{CrudLayout, CrudView, Notice};
pub use state::{ActiveDialog, CrudState, PendingAction};
pub use toolbar::ToolbarEvent;
