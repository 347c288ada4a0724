//! Notes tree: walking the notes root and keeping the sidebar's view of it
//! in sync with create operations.

mod builder;
mod events;
mod view;

pub use builder::{build_tree, load, sort_entries};
pub use events::{run_reload_loop, TreeEvent, TreeEvents, TreeUpdate};
pub use view::{NoteTree, TreeStatus};
