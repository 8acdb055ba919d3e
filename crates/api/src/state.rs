use std::sync::Arc;

use kaylari_core::events::bus::EventBus;
use kaylari_core::{ContentStore, StoreError};
use tokio::sync::{RwLock, RwLockReadGuard};

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};

/// Shared application state, passed to all handlers via Axum's `State` extractor.
/// Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    store: Arc<RwLock<ContentStore>>,
    config: AppConfig,
    event_bus: EventBus,
}

impl AppState {
    pub fn new(store: ContentStore, config: AppConfig) -> Self {
        let event_bus = store.events().clone();
        Self {
            inner: Arc::new(InnerState {
                store: Arc::new(RwLock::new(store)),
                config,
                event_bus,
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.inner.event_bus
    }

    /// Shared read access to the store.
    pub async fn read(&self) -> RwLockReadGuard<'_, ContentStore> {
        self.inner.store.read().await
    }

    /// Run a store mutation under the write lock. Storage writes are blocking
    /// I/O, so the mutation runs on the blocking pool.
    pub async fn mutate<T, F>(&self, f: F) -> ApiResult<T>
    where
        F: FnOnce(&mut ContentStore) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let mut guard = Arc::clone(&self.inner.store).write_owned().await;
        tokio::task::spawn_blocking(move || f(&mut *guard))
            .await
            .map_err(|e| ApiError::Internal(format!("store task failed: {e}")))?
            .map_err(ApiError::from)
    }

    /// Run a read-only store call on the blocking pool under the read lock.
    pub async fn inspect<T, F>(&self, f: F) -> ApiResult<T>
    where
        F: FnOnce(&ContentStore) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let guard = Arc::clone(&self.inner.store).read_owned().await;
        tokio::task::spawn_blocking(move || f(&*guard))
            .await
            .map_err(|e| ApiError::Internal(format!("store task failed: {e}")))?
            .map_err(ApiError::from)
    }

    /// Confirm the storage backend can still be read.
    pub async fn check_storage(&self) -> ApiResult<()> {
        self.inspect(|store| store.check_storage())
            .await
            .map_err(|e| ApiError::Internal(format!("storage health check failed: {e}")))
    }

    /// Write the current content to storage (used on shutdown).
    pub async fn flush(&self) -> ApiResult<()> {
        self.inspect(|store| store.flush()).await
    }
}
