//! Playlist and song list controllers.

pub mod playlist_flow;
pub mod song_flow;
pub mod song_label;

pub use playlist_flow::PlaylistFlow;
pub use song_flow::SongFlow;
