//! UI Components
//!
//! Reusable UI components for the desktop application.

mod file_tree;
mod name_input_dialog;
mod nav_dialog;
mod note_editor;
mod plus_item;
mod sidebar;
mod toasts;
mod topbar;

pub use file_tree::FileTree;
pub use name_input_dialog::NameInputDialog;
pub use nav_dialog::NavDialog;
pub use note_editor::NoteEditor;
pub use plus_item::PlusItem;
pub use sidebar::Sidebar;
pub use toasts::Toasts;
pub use topbar::Topbar;
