use complaint_core_api::{Identity, SessionStore};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Identities of all connected clients, keyed by an opaque session token.
#[derive(Default)]
pub struct InMemorySessionRegistry {
    sessions: RwLock<HashMap<Uuid, Identity>>,
}

impl InMemorySessionRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Handle for a new client with no identity yet.
    pub fn open(self: &Arc<Self>) -> ClientSession {
        self.resume(Uuid::new_v4())
    }

    /// Handle for a client presenting an existing token.
    pub fn resume(self: &Arc<Self>, token: Uuid) -> ClientSession {
        ClientSession {
            token,
            registry: Arc::clone(self),
        }
    }

    pub fn authenticated_count(&self) -> usize {
        self.sessions.read().len()
    }
}

/// One client's view of the registry.
#[derive(Clone)]
pub struct ClientSession {
    token: Uuid,
    registry: Arc<InMemorySessionRegistry>,
}

impl ClientSession {
    pub fn token(&self) -> Uuid {
        self.token
    }
}

impl SessionStore for ClientSession {
    fn get_current(&self) -> Option<Identity> {
        self.registry.sessions.read().get(&self.token).cloned()
    }

    fn set(&self, identity: Identity) {
        self.registry.sessions.write().insert(self.token, identity);
    }

    fn clear(&self) {
        self.registry.sessions.write().remove(&self.token);
    }
}
