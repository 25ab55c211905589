use std::sync::Arc;

use cuppa_core::{ExplorerConfigExt, ExplorerSession};
use cuppa_types::ExplorerConfig;
use tokio::sync::RwLock;

/// Shared handle to an exploration session.
///
/// All input signals and reads go through this single lock, which keeps
/// the engine's last-event-wins ordering intact in a multi-threaded host.
pub type SessionHandle = Arc<RwLock<ExplorerSession>>;

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in the engine types.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<ExplorerConfig>>,
    /// The active session. None until a dataset is loaded; loading a new
    /// dataset swaps in a fresh handle.
    session: Arc<RwLock<Option<SessionHandle>>>,
}

impl CliContext {
    pub fn new() -> Self {
        let config = ExplorerConfig::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load configuration, using defaults");
            ExplorerConfig::default()
        });
        Self {
            config: Arc::new(RwLock::new(config)),
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// Install a freshly built session, replacing any previous one.
    pub async fn start_session(&self, session: ExplorerSession) -> SessionHandle {
        let handle = Arc::new(RwLock::new(session));
        *self.session.write().await = Some(Arc::clone(&handle));
        handle
    }

    /// Get the current session handle, if one exists.
    pub async fn session(&self) -> Option<SessionHandle> {
        self.session.read().await.clone()
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}
