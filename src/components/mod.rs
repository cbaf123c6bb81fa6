//! UI Components
//!
//! Reusable Leptos components.

mod list_header;
mod navigation_panel;
mod item_list_view;
mod item_row;
mod empty_state;
mod new_item_form;

pub use list_header::ListHeader;
pub use navigation_panel::NavigationPanel;
pub use item_list_view::ItemListView;
pub use item_row::ItemRow;
pub use empty_state::EmptyState;
pub use new_item_form::NewItemForm;
