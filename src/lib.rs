pub mod crud;
pub mod entities;
pub mod navigation;
pub mod theme;
pub mod traits;

// Export scaffold contracts
pub use traits::{Completion, CrudHandler, Entity, FormError, FormModel};

// Export CRUD building blocks
pub use crud::{
    ActiveDialog, Column, CrudLayout, CrudState, CrudView, FilterOption, GridState, PendingAction,
};

// Export theme support
pub use theme::{
    adjust_color, hex_to_color32, with_alpha, Palette, Paper, ThemeContext, ThemeError, ThemeMode,
    ThemeVariant,
};

// Export navigation model
pub use navigation::{Location, NavItem, Route, SidebarState, MENU};
