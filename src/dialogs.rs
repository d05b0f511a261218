//! Modal dialogs used by the flows: confirmations, errors, and notices.

use log::debug;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Blocking dialog surface. Every call returns only after the user dismisses it.
pub trait Prompter {
    /// Yes/no question. `true` only for an explicit "yes".
    fn confirm(&self, title: &str, message: &str) -> bool;
    fn show_error(&self, message: &str);
    fn show_info(&self, message: &str);
}

/// Native dialogs through `rfd`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RfdPrompter;

impl Prompter for RfdPrompter {
    fn confirm(&self, title: &str, message: &str) -> bool {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show();
        debug!("Confirmation '{}' answered with {:?}", title, result);
        matches!(result, MessageDialogResult::Yes)
    }

    fn show_error(&self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title("Error")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn show_info(&self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title("Playlist Tracker")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
