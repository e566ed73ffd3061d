//! Client-side session: the persisted bearer token and its observers.
//!
//! The token lives in a [`TokenStore`] slot shared by every context of the
//! same user (browser tabs, CLI invocations). [`Session`] keeps an
//! in-memory view of that slot and reconciles it whenever the slot is
//! changed from elsewhere.

use parking_lot::Mutex;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

/// Name of the persisted token slot.
pub const TOKEN_SLOT: &str = "token";

/// A synchronous, persistent key-value slot holding the bearer token.
pub trait TokenStore: Send + Sync {
    /// Current token, `None` when the slot is empty.
    fn load(&self) -> Option<String>;
    /// Writes the slot; `None` removes it.
    fn save(&self, token: Option<&str>);
}

/// Authentication status derived from the token slot.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated { token: String },
}

impl SessionState {
    fn from_token(token: Option<String>) -> Self {
        match token {
            Some(token) if !token.is_empty() => Self::Authenticated { token },
            _ => Self::Anonymous,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { token } => Some(token),
        }
    }

    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

// Tokens must not end up in logs.
impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("Anonymous"),
            Self::Authenticated { .. } => f.write_str("Authenticated"),
        }
    }
}

/// Shared handle to the current session.
///
/// Cloning is cheap; all clones observe the same state.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
    state: Arc<watch::Sender<SessionState>>,
}

impl Session {
    /// Hydrates the session from whatever the slot currently holds.
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        let initial = SessionState::from_token(store.load());
        let (state, _) = watch::channel(initial);
        Self { store, state: Arc::new(state) }
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn current_token(&self) -> Option<String> {
        self.state.borrow().token().map(str::to_string)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Writes the slot and moves to the matching state. Empty tokens are
    /// treated as `None`.
    pub fn set_token(&self, token: Option<&str>) {
        let token = token.filter(|t| !t.is_empty());
        self.store.save(token);
        let next = SessionState::from_token(token.map(str::to_string));
        tracing::info!(state = ?next, "session updated");
        self.state.send_replace(next);
    }

    /// Re-reads the slot after another context changed it.
    ///
    /// Returns `true` when the in-memory state actually changed.
    pub fn on_external_change(&self) -> bool {
        let next = SessionState::from_token(self.store.load());
        self.state.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            tracing::info!(state = ?next, "session changed in another context");
            *current = next;
            true
        })
    }

    /// Observer of state transitions (login, logout, external change).
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Re-reads the slot every time `changes` fires, until the feed closes.
    pub fn follow(&self, mut changes: broadcast::Receiver<()>) -> tokio::task::JoinHandle<()> {
        let session = self.clone();
        tokio::spawn(async move {
            loop {
                match changes.recv().await {
                    Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => {
                        session.on_external_change();
                    },
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("state", &*self.state.borrow()).finish()
    }
}

/// In-process token slot with a change feed.
///
/// Every write is announced on the feed, the way a browser announces
/// `storage` events to other tabs.
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
    changes: broadcast::Sender<()>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(16);
        Self { slot: Mutex::new(None), changes }
    }

    /// Feed that fires after each write.
    pub fn changes(&self) -> broadcast::Receiver<()> {
        self.changes.subscribe()
    }
}

impl Default for MemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.lock().clone()
    }

    fn save(&self, token: Option<&str>) {
        *self.slot.lock() = token.map(str::to_string);
        // No subscribers is fine.
        let _ = self.changes.send(());
    }
}

/// Token slot backed by a single file.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/grocer/token`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("grocer").join(TOKEN_SLOT))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Some(contents.trim().to_string()).filter(|t| !t.is_empty()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "failed to read token slot: {}", e);
                None
            },
        }
    }

    fn save(&self, token: Option<&str>) {
        let result = match token {
            Some(token) => self
                .path
                .parent()
                .map_or(Ok(()), std::fs::create_dir_all)
                .and_then(|()| std::fs::write(&self.path, token)),
            None => match std::fs::remove_file(&self.path) {
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                other => other,
            },
        };
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), "failed to write token slot: {}", e);
        }
    }
}

#[cfg(test)]
mod tests;
