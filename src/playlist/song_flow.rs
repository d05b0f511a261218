//! Song list controller scoped to a single playlist.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use slint::{Model, ModelRc, SharedString, VecModel};

use crate::{
    db_manager::DbManager,
    dialogs::Prompter,
    errors::{AppError, AppResult},
    playlist::song_label::{format_song_label, parse_song_title},
    protocol::{optional_text, DeleteOutcome, NewSong, PlaylistRef, SongRecord},
};

/// Rows in `entries` and `songs` stay index-aligned; a selected row resolves to its song id.
pub struct SongFlow {
    db: DbManager,
    playlist: PlaylistRef,
    songs: RefCell<Vec<SongRecord>>,
    entries: Rc<VecModel<SharedString>>,
}

fn label_for(song: &SongRecord) -> SharedString {
    SharedString::from(format_song_label(&song.title, &song.artist, &song.duration))
}

impl SongFlow {
    pub fn new(db: DbManager, playlist: PlaylistRef) -> Self {
        Self {
            db,
            playlist,
            songs: RefCell::new(Vec::new()),
            entries: Rc::new(VecModel::from(Vec::<SharedString>::new())),
        }
    }

    pub fn playlist(&self) -> &PlaylistRef {
        &self.playlist
    }

    pub fn entries(&self) -> ModelRc<SharedString> {
        ModelRc::from(self.entries.clone())
    }

    #[cfg(test)]
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|label| label.to_string()).collect()
    }

    pub fn reload(&self) -> AppResult<usize> {
        let songs = self.db.songs_for_playlist(self.playlist.id)?;
        let labels: Vec<SharedString> = songs.iter().map(label_for).collect();
        let count = songs.len();
        *self.songs.borrow_mut() = songs;
        self.entries.set_vec(labels);
        debug!(
            "Loaded {} songs for playlist '{}' (id={})",
            count, self.playlist.name, self.playlist.id
        );
        Ok(count)
    }

    pub fn create(&self, title: &str, artist: &str, duration: &str) -> AppResult<SongRecord> {
        if title.is_empty() {
            return Err(AppError::validation("Please enter a song title."));
        }

        let new_song = NewSong {
            playlist_id: self.playlist.id,
            title: title.to_string(),
            artist: optional_text(artist),
            duration: optional_text(duration),
        };
        let id = self.db.insert_song(&new_song).map_err(|err| {
            warn!(
                "Failed to add song '{}' to playlist id={}: {}",
                title, self.playlist.id, err
            );
            AppError::from(err)
        })?;

        let song = SongRecord {
            id,
            title: new_song.title,
            artist: new_song.artist.unwrap_or_default(),
            duration: new_song.duration.unwrap_or_default(),
        };
        self.entries.push(label_for(&song));
        self.songs.borrow_mut().push(song.clone());
        info!(
            "Added song '{}' (id={}) to playlist '{}'",
            song.title, song.id, self.playlist.name
        );
        Ok(song)
    }

    /// Row position for a selection; falls back to the first row showing the same label
    /// when the index no longer points at it.
    fn resolve_row(&self, index: usize, label: &str) -> Option<usize> {
        let matches_at = |position: usize| {
            self.entries
                .row_data(position)
                .is_some_and(|row| row.as_str() == label)
        };
        if matches_at(index) {
            return Some(index);
        }
        (0..self.entries.row_count()).find(|position| matches_at(*position))
    }

    /// Deletes the selected row's song by id after confirmation.
    ///
    /// `index` is the selected row (negative for none) and `label` the text shown there.
    pub fn delete(
        &self,
        index: i32,
        label: &str,
        prompter: &dyn Prompter,
    ) -> AppResult<DeleteOutcome> {
        let index = match usize::try_from(index) {
            Ok(index) if !label.is_empty() => index,
            _ => return Err(AppError::validation("Select a song to delete.")),
        };

        let Some(position) = self.resolve_row(index, label) else {
            warn!(
                "Selected song row '{}' is not in playlist '{}'",
                label, self.playlist.name
            );
            return Err(AppError::not_found("The selected song is no longer listed."));
        };
        let song_id = self.songs.borrow()[position].id;

        let title = parse_song_title(label);
        if !prompter.confirm("Confirm Delete", &format!("Delete \"{}\"?", title)) {
            debug!("Delete of song '{}' cancelled", title);
            return Ok(DeleteOutcome::Cancelled);
        }

        let removed = self
            .db
            .delete_song(self.playlist.id, song_id)
            .map_err(|err| {
                warn!("Failed to delete song id={}: {}", song_id, err);
                AppError::from(err)
            })?;
        if removed == 0 {
            warn!("Song id={} was already absent from storage", song_id);
        }

        self.songs.borrow_mut().remove(position);
        self.entries.remove(position);
        info!(
            "Deleted song '{}' (id={}) from playlist '{}'",
            title, song_id, self.playlist.name
        );
        Ok(DeleteOutcome::Deleted)
    }
}
