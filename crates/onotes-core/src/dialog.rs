//! State for the "+" creation menu and its name prompt
//!
//! The menu closes as soon as an action is picked. The name dialog only lets
//! a submission through when the trimmed value is non-empty; otherwise it
//! stays open and nothing is created.

use crate::create::CreateRequest;
use crate::models::EntryKind;

/// Modal prompt for a single note or folder name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameInputDialog {
    kind: EntryKind,
    open: bool,
    value: String,
}

impl Default for NameInputDialog {
    fn default() -> Self {
        Self::new(EntryKind::Note)
    }
}

impl NameInputDialog {
    /// A closed dialog for `kind`
    #[must_use]
    pub const fn new(kind: EntryKind) -> Self {
        Self {
            kind,
            open: false,
            value: String::new(),
        }
    }

    pub fn open(&mut self, kind: EntryKind) {
        self.kind = kind;
        self.open = true;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!("Create New {}", self.kind.label())
    }

    #[must_use]
    pub fn placeholder(&self) -> String {
        format!("Enter {} name", self.kind)
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Whether the Create button is enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.value.trim().is_empty()
    }

    /// Hand back a request and close, or stay open on a blank name.
    pub fn submit(&mut self) -> Option<CreateRequest> {
        let request = CreateRequest::new(self.kind, &self.value).ok()?;
        self.value.clear();
        self.open = false;
        Some(request)
    }

    pub fn cancel(&mut self) {
        self.value.clear();
        self.open = false;
    }
}

/// The popover offering "New Note" and "New Folder"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationMenu {
    popover_open: bool,
    dialog: NameInputDialog,
}

impl CreationMenu {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.popover_open
    }

    pub fn set_open(&mut self, open: bool) {
        self.popover_open = open;
    }

    pub fn toggle(&mut self) {
        self.popover_open = !self.popover_open;
    }

    /// Close the popover and prompt for a name.
    pub fn select(&mut self, kind: EntryKind) {
        self.popover_open = false;
        self.dialog.open(kind);
    }

    #[must_use]
    pub const fn dialog(&self) -> &NameInputDialog {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut NameInputDialog {
        &mut self.dialog
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn select_closes_menu_and_opens_dialog() {
        let mut menu = CreationMenu::default();
        menu.toggle();
        assert!(menu.is_open());

        menu.select(EntryKind::Folder);
        assert!(!menu.is_open());
        assert!(menu.dialog().is_open());
        assert_eq!(menu.dialog().title(), "Create New Folder");
        assert_eq!(menu.dialog().placeholder(), "Enter folder name");
    }

    #[test]
    fn dismissing_the_popover_opens_nothing() {
        let mut menu = CreationMenu::default();
        menu.toggle();
        menu.set_open(false);

        assert!(!menu.is_open());
        assert!(!menu.dialog().is_open());
    }

    #[test]
    fn blank_submission_stays_open() {
        let mut dialog = NameInputDialog::new(EntryKind::Note);
        dialog.open(EntryKind::Note);
        dialog.set_value("   ");

        assert!(!dialog.can_submit());
        assert_eq!(dialog.submit(), None);
        assert!(dialog.is_open());
        assert_eq!(dialog.value(), "   ");
    }

    #[test]
    fn submission_trims_clears_and_closes() {
        let mut menu = CreationMenu::default();
        menu.select(EntryKind::Note);
        menu.dialog_mut().set_value("  todo  ");

        let request = menu.dialog_mut().submit().unwrap();
        assert_eq!(request.kind, EntryKind::Note);
        assert_eq!(request.name, "todo");
        assert!(!menu.dialog().is_open());
        assert_eq!(menu.dialog().value(), "");
    }

    #[test]
    fn cancel_discards_value() {
        let mut dialog = NameInputDialog::default();
        dialog.open(EntryKind::Folder);
        dialog.set_value("Work");
        dialog.cancel();
        assert!(!dialog.is_open());
        assert_eq!(dialog.value(), "");
    }
}
