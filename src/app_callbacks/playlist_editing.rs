use log::{debug, error};
use slint::SharedString;

use crate::{
    app_callbacks::{report_failure, report_success, song_editing::open_song_window},
    app_context::AppSharedState,
    protocol::DeleteOutcome,
    AppWindow,
};

pub(crate) fn register_playlist_editing_callbacks(ui: &AppWindow, shared_state: &AppSharedState) {
    let state = shared_state.clone();
    ui.on_add_playlist(move |name, description| {
        debug!("Add playlist requested: name={}", name);
        match state.playlist_flow.create(&name, &description) {
            Ok(_) => {
                if let Some(ui) = state.ui_handle.upgrade() {
                    ui.set_playlist_name_text(SharedString::new());
                    ui.set_playlist_description_text(SharedString::new());
                }
                report_success(
                    state.prompter.as_ref(),
                    state.preferences.show_success_dialogs,
                    "Playlist added successfully!",
                );
            }
            Err(err) => report_failure(state.prompter.as_ref(), "Error adding playlist", &err),
        }
    });

    let state = shared_state.clone();
    ui.on_delete_playlist(move |index| {
        debug!("Delete playlist requested: index={}", index);
        let selected = state.playlist_flow.selected_name(index);
        match state
            .playlist_flow
            .delete(selected.as_deref(), state.prompter.as_ref())
        {
            Ok(DeleteOutcome::Deleted) => {
                if let Some(ui) = state.ui_handle.upgrade() {
                    ui.set_selected_playlist_index(-1);
                }
                report_success(
                    state.prompter.as_ref(),
                    state.preferences.show_success_dialogs,
                    "Playlist deleted successfully!",
                );
            }
            Ok(DeleteOutcome::Cancelled) => {}
            Err(err) => report_failure(state.prompter.as_ref(), "Error deleting playlist", &err),
        }
    });

    let state = shared_state.clone();
    ui.on_open_playlist(move |index| {
        debug!("Playlist item double-clicked: {}", index);
        let selected = state.playlist_flow.selected_name(index);
        let playlist = match state.playlist_flow.open(selected.as_deref()) {
            Ok(playlist) => playlist,
            Err(err) => {
                report_failure(state.prompter.as_ref(), "Error opening playlist", &err);
                return;
            }
        };
        if let Err(err) = open_song_window(&state, playlist) {
            error!("Failed to open song window: {}", err);
            state
                .prompter
                .show_error(&format!("Error opening playlist: {}", err));
        }
    });

    let state = shared_state.clone();
    ui.on_refresh_playlists(move || {
        debug!("Playlist refresh requested");
        if let Err(err) = state.playlist_flow.reload() {
            report_failure(state.prompter.as_ref(), "Error loading playlists", &err);
        }
    });
}
