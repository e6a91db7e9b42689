use indexmap::IndexMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, instrument, warn};
use crate::actor_framework::{Entity, FrameworkError, ResourceClient};
use crate::gesture::{GestureSample, Release, SwipeConfig, SwipeRow};

type DismissFn = Box<dyn FnMut() + Send>;

/// One swipe controller per row of a store-backed list.
///
/// A row's dismissal callback only queues its id. The removal itself is sent
/// to the store from [`SwipeList::advance`], after the slide-out has finished.
pub struct SwipeList<T: Entity> {
    store: ResourceClient<T>,
    config: SwipeConfig,
    rows: IndexMap<T::Id, SwipeRow<DismissFn>>,
    dismissed_tx: mpsc::UnboundedSender<T::Id>,
    dismissed_rx: mpsc::UnboundedReceiver<T::Id>,
}

impl<T: Entity> SwipeList<T> {
    pub fn new(store: ResourceClient<T>, config: SwipeConfig) -> Self {
        let (dismissed_tx, dismissed_rx) = mpsc::unbounded_channel();
        let mut list = Self {
            store,
            config,
            rows: IndexMap::new(),
            dismissed_tx,
            dismissed_rx,
        };
        list.sync_rows();
        list
    }

    /// Matches the rows to the latest store snapshot, keeping the state of
    /// rows that are still present.
    pub fn sync_rows(&mut self) {
        let items = self.store.snapshot();
        let mut rows = IndexMap::with_capacity(items.len());
        for item in items {
            let id = item.id().clone();
            let row = match self.rows.shift_remove(&id) {
                Some(row) => row,
                None => self.new_row(id.clone()),
            };
            rows.insert(id, row);
        }
        self.rows = rows;
    }

    fn new_row(&self, id: T::Id) -> SwipeRow<DismissFn> {
        let tx = self.dismissed_tx.clone();
        let mut pending = Some(id);
        SwipeRow::new(
            self.config,
            Box::new(move || {
                if let Some(id) = pending.take() {
                    let _ = tx.send(id);
                }
            }),
        )
    }

    pub fn ids(&self) -> Vec<T::Id> {
        self.rows.keys().cloned().collect()
    }

    pub fn layout(&mut self, id: &T::Id, width: f32) -> bool {
        match self.rows.get_mut(id) {
            Some(row) => {
                row.set_width(width);
                true
            }
            None => false,
        }
    }

    pub fn pointer_move(&mut self, id: &T::Id, sample: GestureSample) -> bool {
        self.rows.get_mut(id).is_some_and(|row| row.on_move(sample))
    }

    pub fn release(&mut self, id: &T::Id, sample: GestureSample) -> Release {
        match self.rows.get_mut(id) {
            Some(row) => row.on_release(sample),
            None => Release::Ignored,
        }
    }

    pub fn terminate(&mut self, id: &T::Id) {
        if let Some(row) = self.rows.get_mut(id) {
            row.on_terminate();
        }
    }

    pub fn offset(&self, id: &T::Id) -> Option<f32> {
        self.rows.get(id).map(SwipeRow::offset)
    }

    /// Steps every row by `dt` and removes dismissed rows from the store.
    ///
    /// Returns the ids the store actually removed.
    #[instrument(skip(self))]
    pub async fn advance(&mut self, dt: Duration) -> Result<Vec<T::Id>, FrameworkError> {
        for row in self.rows.values_mut() {
            row.advance(dt);
        }

        let mut removed = Vec::new();
        let mut dismissed_any = false;
        while let Ok(id) = self.dismissed_rx.try_recv() {
            dismissed_any = true;
            // A row that is still in the store comes back fresh from `sync_rows`.
            self.rows.shift_remove(&id);
            match self.store.delete(id.clone()).await {
                Ok(()) => {
                    debug!(%id, "Row dismissed");
                    removed.push(id);
                }
                Err(FrameworkError::NotFound(_)) | Err(FrameworkError::Rejected(_)) => {
                    warn!(%id, "Dismissed row could not be removed; restoring from store");
                }
                Err(e) => {
                    self.sync_rows();
                    return Err(e);
                }
            }
        }
        if dismissed_any {
            self.sync_rows();
        }
        Ok(removed)
    }
}
