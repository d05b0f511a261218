//! UI callback registration modules grouped by feature area.

pub mod playlist_editing;
pub mod song_editing;

use log::{debug, warn};

use crate::{dialogs::Prompter, errors::AppError};

/// Shows a failed operation to the user. Storage and I/O errors get an operation prefix;
/// validation and not-found messages are already phrased for the user.
pub(crate) fn report_failure(prompter: &dyn Prompter, context: &str, err: &AppError) {
    if err.is_validation() {
        debug!("{}: {}", context, err);
    } else {
        warn!("{}: {}", context, err);
    }

    match err {
        AppError::Validation(_) | AppError::NotFound(_) => prompter.show_error(&err.to_string()),
        _ => prompter.show_error(&format!("{}: {}", context, err)),
    }
}

/// Success notice, gated by the `ui.show_success_dialogs` preference.
pub(crate) fn report_success(prompter: &dyn Prompter, enabled: bool, message: &str) {
    if enabled {
        prompter.show_info(message);
    }
}

#[cfg(test)]
mod tests {
    use super::{report_failure, report_success};
    use crate::dialogs::testing::{ScriptedPrompter, Shown};
    use crate::errors::AppError;

    #[test]
    fn test_persistence_failures_are_prefixed_with_operation() {
        let prompter = ScriptedPrompter::default();
        report_failure(
            &prompter,
            "Error adding playlist",
            &AppError::Persistence("UNIQUE constraint failed".to_string()),
        );
        assert_eq!(
            prompter.shown(),
            vec![Shown::Error(
                "Error adding playlist: UNIQUE constraint failed".to_string()
            )]
        );
    }

    #[test]
    fn test_validation_and_not_found_are_shown_verbatim() {
        let prompter = ScriptedPrompter::default();
        report_failure(
            &prompter,
            "Error adding song",
            &AppError::validation("Please enter a song title."),
        );
        report_failure(
            &prompter,
            "Error opening playlist",
            &AppError::not_found("Playlist \"X\" no longer exists."),
        );
        assert_eq!(
            prompter.shown(),
            vec![
                Shown::Error("Please enter a song title.".to_string()),
                Shown::Error("Playlist \"X\" no longer exists.".to_string()),
            ]
        );
    }

    #[test]
    fn test_success_notice_respects_preference() {
        let prompter = ScriptedPrompter::default();
        report_success(&prompter, false, "Song added successfully!");
        assert!(prompter.shown().is_empty());

        report_success(&prompter, true, "Song added successfully!");
        assert_eq!(
            prompter.shown(),
            vec![Shown::Info("Song added successfully!".to_string())]
        );
    }
}
