//! Plain records exchanged between storage and the playlist/song flows.

/// Resolved playlist identity used to scope a song flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRef {
    /// Surrogate id assigned by storage.
    pub id: i64,
    pub username: String,
    pub name: String,
}

/// Insert payload for a playlist row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlaylist {
    pub username: String,
    pub name: String,
    /// Blank descriptions are stored as `NULL`.
    pub description: Option<String>,
}

/// A stored song row as listed for one playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRecord {
    pub id: i64,
    pub title: String,
    pub artist: String,
    /// Free-form "mm:ss" text, never validated.
    pub duration: String,
}

/// Insert payload for a song row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSong {
    pub playlist_id: i64,
    pub title: String,
    pub artist: Option<String>,
    pub duration: Option<String>,
}

/// Result of a delete that asks the user first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

/// Maps blank optional form input to `None`.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::optional_text;

    #[test]
    fn test_optional_text_maps_blank_to_none() {
        assert_eq!(optional_text(""), None);
        assert_eq!(optional_text("   \t"), None);
        assert_eq!(optional_text(" Beatles "), Some("Beatles".to_string()));
    }
}
