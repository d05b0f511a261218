use std::{rc::Rc, time::Duration};

use log::{debug, info};
use slint::{CloseRequestResponse, ComponentHandle, LogicalSize, SharedString};

use crate::{
    app_callbacks::{report_failure, report_success},
    app_context::AppSharedState,
    playlist::SongFlow,
    protocol::{DeleteOutcome, PlaylistRef},
    SongWindow,
};

/// Opens a song window for `playlist` with its own flow. A failed initial load is
/// reported and leaves the window open with an empty list.
pub(crate) fn open_song_window(
    shared_state: &AppSharedState,
    playlist: PlaylistRef,
) -> Result<(), slint::PlatformError> {
    let window = SongWindow::new()?;
    let flow = Rc::new(SongFlow::new(shared_state.db.clone(), playlist));

    window.set_playlist_name(SharedString::from(flow.playlist().name.as_str()));
    window.set_song_model(flow.entries());
    window.window().set_size(LogicalSize::new(
        shared_state.preferences.window_width as f32,
        shared_state.preferences.window_height as f32,
    ));
    if let Err(err) = flow.reload() {
        report_failure(shared_state.prompter.as_ref(), "Error loading songs", &err);
    }

    register_song_editing_callbacks(&window, &flow, shared_state);

    let key = shared_state
        .song_windows
        .show_and_insert(window.clone_strong(), |window| window.show())?;
    let registry = shared_state.song_windows.clone();
    window.window().on_close_requested(move || {
        let registry = registry.clone();
        // Drop the handle after this callback returns, not from inside it.
        slint::Timer::single_shot(Duration::ZERO, move || {
            registry.release(key);
            debug!("Song window {} closed; {} still open", key, registry.open_count());
        });
        CloseRequestResponse::HideWindow
    });

    info!(
        "Opened songs for playlist '{}' (id={}) of user '{}'",
        flow.playlist().name,
        flow.playlist().id,
        flow.playlist().username
    );
    Ok(())
}

fn register_song_editing_callbacks(
    window: &SongWindow,
    flow: &Rc<SongFlow>,
    shared_state: &AppSharedState,
) {
    let flow_clone = Rc::clone(flow);
    let prompter = Rc::clone(&shared_state.prompter);
    let show_success_dialogs = shared_state.preferences.show_success_dialogs;
    let window_handle = window.as_weak();
    window.on_add_song(move |title, artist, duration| {
        debug!("Add song requested: title={}", title);
        match flow_clone.create(&title, &artist, &duration) {
            Ok(_) => {
                if let Some(window) = window_handle.upgrade() {
                    window.set_song_title_text(SharedString::new());
                    window.set_song_artist_text(SharedString::new());
                    window.set_song_duration_text(SharedString::new());
                }
                report_success(
                    prompter.as_ref(),
                    show_success_dialogs,
                    "Song added successfully!",
                );
            }
            Err(err) => report_failure(prompter.as_ref(), "Error adding song", &err),
        }
    });

    let flow_clone = Rc::clone(flow);
    let prompter = Rc::clone(&shared_state.prompter);
    let window_handle = window.as_weak();
    window.on_delete_song(move |index, label| {
        debug!("Delete song requested: index={}, label={}", index, label);
        match flow_clone.delete(index, &label, prompter.as_ref()) {
            Ok(DeleteOutcome::Deleted) => {
                if let Some(window) = window_handle.upgrade() {
                    window.set_selected_song_index(-1);
                }
                report_success(
                    prompter.as_ref(),
                    show_success_dialogs,
                    "Song deleted successfully!",
                );
            }
            Ok(DeleteOutcome::Cancelled) => {}
            Err(err) => report_failure(prompter.as_ref(), "Error deleting song", &err),
        }
    });
}
