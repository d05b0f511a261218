//! Application runtime bootstrap and top-level orchestration.

use std::rc::Rc;

use log::{error, info};
use slint::{ComponentHandle, LogicalSize, SharedString};

use crate::{
    app_callbacks::{playlist_editing::register_playlist_editing_callbacks, report_failure},
    app_context::{AppSharedState, SongWindowRegistry, UiPreferences},
    config_persistence::{
        default_config_root, default_data_root, ensure_config_file, load_config_file,
        resolve_database_path,
    },
    db_manager::DbManager,
    dialogs::{Prompter, RfdPrompter},
    playlist::PlaylistFlow,
    AppWindow,
};

/// Owns startup wiring and launches the running Slint application instance.
pub(crate) struct AppRuntime {
    ui: AppWindow,
    shared_state: AppSharedState,
}

impl AppRuntime {
    /// Loads config, opens the database, and wires the playlist window.
    pub(crate) fn build() -> Result<Self, Box<dyn std::error::Error>> {
        let configured_backend = std::env::var("SLINT_BACKEND").unwrap_or_else(|_| {
            info!("SLINT_BACKEND not set. Defaulting to winit-software");
            "winit-software".to_string()
        });
        slint::BackendSelector::new()
            .backend_name(configured_backend)
            .select()
            .map_err(|err| format!("Failed to initialize Slint backend: {}", err))?;

        let config_file = default_config_root()?.join("config.toml");
        ensure_config_file(&config_file)?;
        let config = load_config_file(&config_file)?;
        log::set_max_level(config.logging.level.to_level_filter());
        info!("Loaded config from {}", config_file.display());

        let db_path = resolve_database_path(&config, &default_data_root()?);
        let db = DbManager::open(db_path, config.database.busy_timeout_ms)?;
        info!("Using database {}", db.path().display());

        let ui = AppWindow::new()?;
        ui.window().set_size(LogicalSize::new(
            config.ui.window_width as f32,
            config.ui.window_height as f32,
        ));

        let prompter: Rc<dyn Prompter> = Rc::new(RfdPrompter);
        let playlist_flow = Rc::new(PlaylistFlow::new(
            db.clone(),
            config.session.username.clone(),
        ));
        ui.set_username(SharedString::from(playlist_flow.username()));
        ui.set_playlist_model(playlist_flow.entries());
        if let Err(err) = playlist_flow.reload() {
            error!("Initial playlist load failed: {}", err);
            report_failure(prompter.as_ref(), "Error loading playlists", &err);
        }

        let shared_state = AppSharedState {
            db,
            prompter,
            ui_handle: ui.as_weak(),
            playlist_flow,
            song_windows: SongWindowRegistry::default(),
            preferences: UiPreferences {
                window_width: config.ui.window_width,
                window_height: config.ui.window_height,
                show_success_dialogs: config.ui.show_success_dialogs,
            },
        };
        register_playlist_editing_callbacks(&ui, &shared_state);

        Ok(Self { ui, shared_state })
    }

    /// Blocks on the UI event loop until the playlist window closes.
    pub(crate) fn run(self) -> Result<(), slint::PlatformError> {
        info!(
            "Starting playlist tracker for user '{}'",
            self.shared_state.playlist_flow.username()
        );
        self.ui.run()?;
        info!(
            "Event loop finished with {} song windows open",
            self.shared_state.song_windows.open_count()
        );
        Ok(())
    }
}
