//! Browser token slot.
//!
//! The token lives in `localStorage` under [`TOKEN_SLOT`]. Other tabs see
//! writes through the `storage` event, which [`watch_other_tabs`] turns
//! into [`Session::on_external_change`] calls.

use grocer_client::{Session, TokenStore, TOKEN_SLOT};
use leptos::prelude::*;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// `localStorage`-backed [`TokenStore`]. Holds no handle, so it is
/// `Send + Sync` even though `web_sys::Storage` is not.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(TOKEN_SLOT).ok().flatten().filter(|token| !token.is_empty())
    }

    fn save(&self, token: Option<&str>) {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable, session will not persist");
            return;
        };
        let result = match token {
            Some(token) => storage.set_item(TOKEN_SLOT, token),
            None => storage.remove_item(TOKEN_SLOT),
        };
        if let Err(e) = result {
            log::warn!("Failed to write token slot: {:?}", e);
        }
    }
}

/// A `storage` event concerns the token when it names the slot, or when
/// it has no key at all (`localStorage.clear()` in another tab).
pub fn touches_token_slot(key: Option<&str>) -> bool {
    key.map_or(true, |key| key == TOKEN_SLOT)
}

/// Re-reads the token whenever another tab writes the slot. Browsers do
/// not fire `storage` in the tab that made the write.
///
/// The listener lives as long as the page.
pub fn watch_other_tabs(session: Session) {
    _ = window_event_listener(leptos::ev::storage, move |ev: web_sys::StorageEvent| {
        if touches_token_slot(ev.key().as_deref()) && session.on_external_change() {
            log::info!("Session changed in another tab");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touches_token_slot() {
        assert!(touches_token_slot(Some("token")));
        assert!(touches_token_slot(None));
        assert!(!touches_token_slot(Some("theme")));
    }
}
