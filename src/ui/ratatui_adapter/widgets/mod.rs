//! Ratatui widgets for the picker TUI
//!
//! Custom widgets for rendering the selection modal.

mod help_bar;
mod help_overlay;
mod item_list;
mod modal_frame;
mod search_bar;
mod select_all_bar;
mod status_bar;

pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use item_list::ItemList;
pub use modal_frame::ModalFrame;
pub use search_bar::SearchBar;
pub use select_all_bar::SelectAllBar;
pub use status_bar::StatusBar;
