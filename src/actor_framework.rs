use indexmap::IndexMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// Errors produced by the store layer itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Request rejected: {0}")]
    Rejected(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + 'static;
    type CreateParams: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    /// Results are cloned into the acknowledgement ledger for keyed actions.
    type ActionResult: Clone + Send + Sync + Debug;

    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and creation parameters
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, FrameworkError>;

    // --- Lifecycle Hooks ---

    fn on_update(&mut self, patch: Self::Patch) -> Result<(), FrameworkError>;
    fn on_delete(&self) -> Result<(), FrameworkError> {
        Ok(())
    }

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, FrameworkError>;

    /// Whether a keyed request with this result is settled. Unsettled results
    /// are not recorded, so the same key can still apply later.
    fn acknowledges(_result: &Self::ActionResult) -> bool {
        true
    }
}

/// Most keyed results an actor remembers; the oldest are forgotten first.
pub const ACK_LEDGER_CAPACITY: usize = 256;

/// Idempotency key carried by requests that may be delivered more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestKey(pub u64);

impl Display for RequestKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        key: Option<RequestKey>,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Single owner of one in-memory list. Entries keep insertion order.
pub struct ResourceActor<T: Entity> {
    label: &'static str,
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: IndexMap<T::Id, T>,
    acknowledged: IndexMap<RequestKey, T::ActionResult>,
    snapshots: watch::Sender<Vec<T>>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        label: &'static str,
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        Self::seeded(label, buffer_size, next_id_fn, Vec::new())
    }

    /// Like [`ResourceActor::new`], but starts with `seed` already stored.
    pub fn seeded(
        label: &'static str,
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
        seed: impl IntoIterator<Item = T>,
    ) -> (Self, ResourceClient<T>) {
        let store: IndexMap<T::Id, T> = seed
            .into_iter()
            .map(|item| (item.id().clone(), item))
            .collect();
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (snapshots, snapshot_rx) = watch::channel(store.values().cloned().collect());
        let actor = Self {
            label,
            receiver,
            store,
            acknowledged: IndexMap::new(),
            snapshots,
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender, snapshot_rx);
        (actor, client)
    }

    #[instrument(name = "resource_actor", skip(self), fields(resource = self.label))]
    pub async fn run(mut self) {
        info!(items = self.store.len(), "Store starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let result = self.handle_create(params);
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let result = self.handle_update(id, patch);
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let result = self.handle_delete(id);
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action { id, action, key, respond_to } => {
                    let result = self.handle_action(id, action, key);
                    let _ = respond_to.send(result);
                }
            }
        }
        info!("Store stopped");
    }

    fn handle_create(&mut self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let id = (self.next_id_fn)();
        if self.store.contains_key(&id) {
            warn!(%id, "Generated id already in use");
            return Err(FrameworkError::Rejected(format!("Duplicate id: {}", id)));
        }
        let item = T::from_create_params(id.clone(), params)?;
        self.store.insert(id.clone(), item);
        debug!(%id, "Item created");
        self.publish();
        Ok(id)
    }

    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        let item = self
            .store
            .get_mut(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_update(patch)?;
        let updated = item.clone();
        self.publish();
        Ok(updated)
    }

    fn handle_delete(&mut self, id: T::Id) -> Result<(), FrameworkError> {
        let item = self
            .store
            .get(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete()?;
        self.store.shift_remove(&id);
        debug!(%id, "Item removed");
        self.publish();
        Ok(())
    }

    fn handle_action(
        &mut self,
        id: T::Id,
        action: T::Action,
        key: Option<RequestKey>,
    ) -> Result<T::ActionResult, FrameworkError> {
        if let Some(previous) = key.and_then(|key| self.acknowledged.get(&key)) {
            debug!(%id, "Request already acknowledged; replaying outcome");
            return Ok(previous.clone());
        }
        let item = self
            .store
            .get_mut(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        let result = item.handle_action(action)?;
        if let Some(key) = key.filter(|_| T::acknowledges(&result)) {
            if self.acknowledged.len() >= ACK_LEDGER_CAPACITY {
                self.acknowledged.shift_remove_index(0);
            }
            self.acknowledged.insert(key, result.clone());
        }
        self.publish();
        Ok(result)
    }

    /// Snapshots go out before the reply so a caller never reads a stale view.
    fn publish(&self) {
        self.snapshots.send_replace(self.store.values().cloned().collect());
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
    snapshots: watch::Receiver<Vec<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub(crate) fn new(
        sender: mpsc::Sender<ResourceRequest<T>>,
        snapshots: watch::Receiver<Vec<T>>,
    ) -> Self {
        Self { sender, snapshots }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to })
            .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.perform_keyed_action(id, action, None).await
    }

    /// Applies `action` at most once per `key`; repeats get the first outcome back.
    pub async fn perform_keyed_action(
        &self,
        id: T::Id,
        action: T::Action,
        key: Option<RequestKey>,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, key, respond_to })
            .await
    }

    /// Latest published snapshot, without a round trip to the actor.
    pub fn snapshot(&self) -> Vec<T> {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<T>> {
        self.snapshots.clone()
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
