//! Playlist list controller for one user.

use std::rc::Rc;

use log::{debug, info, warn};
use slint::{Model, ModelRc, SharedString, VecModel};

use crate::{
    db_manager::DbManager,
    dialogs::Prompter,
    errors::{AppError, AppResult},
    protocol::{optional_text, DeleteOutcome, NewPlaylist, PlaylistRef},
};

/// Mirrors a user's playlist names into a list model and applies create/delete/open.
///
/// The model is only mutated after storage confirms the change.
pub struct PlaylistFlow {
    db: DbManager,
    username: String,
    entries: Rc<VecModel<SharedString>>,
}

impl PlaylistFlow {
    pub fn new(db: DbManager, username: impl Into<String>) -> Self {
        Self {
            db,
            username: username.into(),
            entries: Rc::new(VecModel::from(Vec::<SharedString>::new())),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn entries(&self) -> ModelRc<SharedString> {
        ModelRc::from(self.entries.clone())
    }

    #[cfg(test)]
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|name| name.to_string()).collect()
    }

    /// Name shown at `index`, or `None` for no/invalid selection.
    pub fn selected_name(&self, index: i32) -> Option<String> {
        let index = usize::try_from(index).ok()?;
        self.entries.row_data(index).map(|name| name.to_string())
    }

    /// Replaces the list with the stored names. On failure the list is left as it was.
    pub fn reload(&self) -> AppResult<usize> {
        let names = self.db.playlist_names(&self.username)?;
        let count = names.len();
        self.entries
            .set_vec(names.into_iter().map(SharedString::from).collect::<Vec<_>>());
        debug!("Loaded {} playlists for user '{}'", count, self.username);
        Ok(count)
    }

    /// Persists a playlist and appends its name. The name is stored as entered.
    pub fn create(&self, name: &str, description: &str) -> AppResult<String> {
        if name.is_empty() {
            return Err(AppError::validation("Please enter a playlist name."));
        }

        let playlist = NewPlaylist {
            username: self.username.clone(),
            name: name.to_string(),
            description: optional_text(description),
        };
        let id = self.db.insert_playlist(&playlist).map_err(|err| {
            warn!(
                "Failed to create playlist '{}' for user '{}': {}",
                name, self.username, err
            );
            AppError::from(err)
        })?;

        self.entries.push(SharedString::from(name));
        info!(
            "Created playlist '{}' (id={}) for user '{}'",
            name, id, self.username
        );
        Ok(playlist.name)
    }

    /// Deletes the selected playlist and all of its songs after confirmation.
    pub fn delete(
        &self,
        selected: Option<&str>,
        prompter: &dyn Prompter,
    ) -> AppResult<DeleteOutcome> {
        let Some(selected) = selected else {
            return Err(AppError::validation("Please select a playlist to delete."));
        };

        let confirmed = prompter.confirm(
            "Confirm Delete",
            &format!("Are you sure you want to delete \"{}\"?", selected),
        );
        if !confirmed {
            debug!("Delete of playlist '{}' cancelled", selected);
            return Ok(DeleteOutcome::Cancelled);
        }

        let (songs_removed, playlists_removed) = self
            .db
            .delete_playlist_cascade(&self.username, selected)
            .map_err(|err| {
                warn!("Failed to delete playlist '{}': {}", selected, err);
                AppError::from(err)
            })?;
        if playlists_removed == 0 {
            warn!(
                "Playlist '{}' was already absent from storage for user '{}'",
                selected, self.username
            );
        }

        if let Some(position) = self.entries.iter().position(|name| name.as_str() == selected) {
            self.entries.remove(position);
        }
        info!(
            "Deleted playlist '{}' and {} songs for user '{}'",
            selected, songs_removed, self.username
        );
        Ok(DeleteOutcome::Deleted)
    }

    /// Resolves the selected playlist so a song view can be opened for it.
    pub fn open(&self, selected: Option<&str>) -> AppResult<PlaylistRef> {
        let Some(selected) = selected else {
            return Err(AppError::validation("Please select a playlist to open."));
        };

        match self.db.find_playlist(&self.username, selected)? {
            Some(playlist) => {
                debug!("Opening playlist '{}' (id={})", playlist.name, playlist.id);
                Ok(playlist)
            }
            None => {
                warn!(
                    "Playlist '{}' not found for user '{}'",
                    selected, self.username
                );
                Err(AppError::not_found(format!(
                    "Playlist \"{}\" no longer exists.",
                    selected
                )))
            }
        }
    }
}
