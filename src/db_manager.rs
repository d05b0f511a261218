use crate::errors::AppResult;
use crate::protocol::{NewPlaylist, NewSong, PlaylistRef, SongRecord};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Connection provider over one SQLite file.
///
/// Every operation opens its own connection and drops it before returning, so no
/// handle outlives the call that needed it.
#[derive(Debug, Clone)]
pub struct DbManager {
    db_path: PathBuf,
    busy_timeout: Duration,
}

impl DbManager {
    pub fn open(db_path: impl Into<PathBuf>, busy_timeout_ms: u32) -> AppResult<Self> {
        let db_path = db_path.into();
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let db_manager = Self {
            db_path,
            busy_timeout: Duration::from_millis(u64::from(busy_timeout_ms)),
        };
        db_manager.initialize_schema()?;
        Ok(db_manager)
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> Result<Connection, rusqlite::Error> {
        let conn = Connection::open(&self.db_path)?;
        conn.busy_timeout(self.busy_timeout)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    fn initialize_schema(&self) -> Result<(), rusqlite::Error> {
        let conn = self.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS playlists (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL,
                name TEXT NOT NULL,
                description TEXT,
                UNIQUE(username, name)
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS songs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                playlist_id INTEGER NOT NULL,
                title TEXT NOT NULL,
                artist TEXT,
                duration TEXT,
                FOREIGN KEY(playlist_id) REFERENCES playlists(id) ON DELETE CASCADE
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_songs_playlist_id ON songs(playlist_id)",
            [],
        )?;
        debug!("Database schema ready at {}", self.db_path.display());
        Ok(())
    }

    pub fn playlist_names(&self, username: &str) -> Result<Vec<String>, rusqlite::Error> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare("SELECT name FROM playlists WHERE username = ?1 ORDER BY id ASC")?;
        let name_iter = stmt.query_map(params![username], |row| row.get::<_, String>(0))?;

        let mut names = Vec::new();
        for name in name_iter {
            names.push(name?);
        }
        Ok(names)
    }

    pub fn insert_playlist(&self, playlist: &NewPlaylist) -> Result<i64, rusqlite::Error> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO playlists (username, name, description) VALUES (?1, ?2, ?3)",
            params![playlist.username, playlist.name, playlist.description],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Removes the playlist's songs and then the playlist in one transaction.
    ///
    /// Returns `(songs_removed, playlists_removed)`. Any failure rolls back both steps.
    pub fn delete_playlist_cascade(
        &self,
        username: &str,
        name: &str,
    ) -> Result<(usize, usize), rusqlite::Error> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let songs_removed = tx.execute(
            "DELETE FROM songs WHERE playlist_id IN (SELECT id FROM playlists WHERE username = ?1 AND name = ?2)",
            params![username, name],
        )?;
        let playlists_removed = tx.execute(
            "DELETE FROM playlists WHERE username = ?1 AND name = ?2",
            params![username, name],
        )?;
        tx.commit()?;
        Ok((songs_removed, playlists_removed))
    }

    pub fn find_playlist(
        &self,
        username: &str,
        name: &str,
    ) -> Result<Option<PlaylistRef>, rusqlite::Error> {
        let conn = self.connect()?;
        conn.query_row(
            "SELECT id FROM playlists WHERE username = ?1 AND name = ?2",
            params![username, name],
            |row| {
                Ok(PlaylistRef {
                    id: row.get(0)?,
                    username: username.to_string(),
                    name: name.to_string(),
                })
            },
        )
        .optional()
    }

    pub fn songs_for_playlist(&self, playlist_id: i64) -> Result<Vec<SongRecord>, rusqlite::Error> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, artist, duration FROM songs WHERE playlist_id = ?1 ORDER BY id ASC",
        )?;
        let song_iter = stmt.query_map(params![playlist_id], |row| {
            Ok(SongRecord {
                id: row.get(0)?,
                title: row.get(1)?,
                artist: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                duration: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            })
        })?;

        let mut songs = Vec::new();
        for song in song_iter {
            songs.push(song?);
        }
        Ok(songs)
    }

    pub fn insert_song(&self, song: &NewSong) -> Result<i64, rusqlite::Error> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO songs (playlist_id, title, artist, duration) VALUES (?1, ?2, ?3, ?4)",
            params![song.playlist_id, song.title, song.artist, song.duration],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Deletes one song by its own id, scoped to the owning playlist.
    pub fn delete_song(&self, playlist_id: i64, song_id: i64) -> Result<usize, rusqlite::Error> {
        let conn = self.connect()?;
        conn.execute(
            "DELETE FROM songs WHERE playlist_id = ?1 AND id = ?2",
            params![playlist_id, song_id],
        )
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::DbManager;
    use tempfile::TempDir;

    /// Database on a real file; the directory is removed on drop.
    pub(crate) struct TestDb {
        pub(crate) db: DbManager,
        _temp_dir: TempDir,
    }

    impl TestDb {
        pub(crate) fn new() -> Self {
            let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
            let db = DbManager::open(temp_dir.path().join("tracker.db"), 1_000)
                .expect("failed to open test database");
            Self {
                db,
                _temp_dir: temp_dir,
            }
        }

        /// Runs raw SQL against the test database, e.g. to install triggers.
        pub(crate) fn execute_sql(&self, sql: &str) {
            self.db
                .connect()
                .and_then(|conn| conn.execute_batch(sql))
                .expect("test SQL should apply");
        }

        /// Makes every playlist delete fail with `blocked`.
        pub(crate) fn block_playlist_deletes(&self) {
            self.execute_sql(
                "CREATE TRIGGER block_playlist_delete BEFORE DELETE ON playlists
                 BEGIN SELECT RAISE(ABORT, 'blocked'); END;",
            );
        }
    }
}
