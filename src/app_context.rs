use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use crate::{db_manager::DbManager, dialogs::Prompter, playlist::PlaylistFlow, AppWindow, SongWindow};

/// Windows stay alive while registered; closing one releases it.
pub(crate) struct WindowRegistry<W> {
    next_key: Rc<Cell<u64>>,
    windows: Rc<RefCell<HashMap<u64, W>>>,
}

pub(crate) type SongWindowRegistry = WindowRegistry<SongWindow>;

impl<W> Default for WindowRegistry<W> {
    fn default() -> Self {
        Self {
            next_key: Rc::new(Cell::new(0)),
            windows: Rc::new(RefCell::new(HashMap::new())),
        }
    }
}

impl<W> Clone for WindowRegistry<W> {
    fn clone(&self) -> Self {
        Self {
            next_key: Rc::clone(&self.next_key),
            windows: Rc::clone(&self.windows),
        }
    }
}

impl<W> WindowRegistry<W> {
    /// Shows `window` and registers it only once `show` succeeded.
    pub(crate) fn show_and_insert<E>(
        &self,
        window: W,
        show: impl FnOnce(&W) -> Result<(), E>,
    ) -> Result<u64, E> {
        show(&window)?;
        let key = self.next_key.get();
        self.next_key.set(key.wrapping_add(1));
        self.windows.borrow_mut().insert(key, window);
        Ok(key)
    }

    pub(crate) fn release(&self, key: u64) -> Option<W> {
        self.windows.borrow_mut().remove(&key)
    }

    pub(crate) fn open_count(&self) -> usize {
        self.windows.borrow().len()
    }
}

#[derive(Clone)]
pub(crate) struct UiPreferences {
    pub(crate) window_width: u32,
    pub(crate) window_height: u32,
    pub(crate) show_success_dialogs: bool,
}

/// Handles shared by every UI callback. Lives on the UI thread only.
#[derive(Clone)]
pub(crate) struct AppSharedState {
    pub(crate) db: DbManager,
    pub(crate) prompter: Rc<dyn Prompter>,
    pub(crate) ui_handle: slint::Weak<AppWindow>,
    pub(crate) playlist_flow: Rc<PlaylistFlow>,
    pub(crate) song_windows: SongWindowRegistry,
    pub(crate) preferences: UiPreferences,
}

#[cfg(test)]
mod tests {
    use super::WindowRegistry;

    #[test]
    fn test_failed_show_leaves_registry_empty() {
        let registry = WindowRegistry::<String>::default();

        let result = registry.show_and_insert("songs".to_string(), |_| Err("no display"));

        assert_eq!(result, Err("no display"));
        assert_eq!(registry.open_count(), 0);
    }

    #[test]
    fn test_shown_windows_stay_registered_until_released() {
        let registry = WindowRegistry::<String>::default();
        let shared = registry.clone();

        let first = registry
            .show_and_insert("first".to_string(), |_| Ok::<(), ()>(()))
            .unwrap();
        let second = registry
            .show_and_insert("second".to_string(), |_| Ok::<(), ()>(()))
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(shared.open_count(), 2);
        assert_eq!(shared.release(first), Some("first".to_string()));
        assert_eq!(shared.release(first), None);
        assert_eq!(registry.open_count(), 1);
    }
}
