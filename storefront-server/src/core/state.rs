use crate::backend::BackendClient;
use crate::catalog;
use crate::core::config::DEFAULT_ADMIN_KEY;
use crate::core::{Config, Result};
use crate::db::LocalStore;
use crate::db::repository::ProductRepository;
use crate::notify::Notifier;

/// Shared application state
///
/// Cloned into every handler. All fields are cheap handles.
///
/// | Field | Owns |
/// |-------|------|
/// | `config` | immutable startup configuration |
/// | `store` | redb-backed container store |
/// | `notifier` | notification service, started and shut down explicitly |
/// | `backend` | hosted backend client, absent when not configured |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub store: LocalStore,
    pub notifier: Notifier,
    pub backend: Option<BackendClient>,
}

impl ServerState {
    /// Open the database under the work dir, seed the catalog and start services
    pub async fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;
        let store = LocalStore::open(config.database_path())?;
        Self::with_store(config.clone(), store)
    }

    /// Build state over an already opened store
    pub fn with_store(config: Config, store: LocalStore) -> Result<Self> {
        if config.is_production() && config.admin_key == DEFAULT_ADMIN_KEY {
            tracing::warn!("ADMIN_KEY is unset, the admin panel accepts the default key");
        }

        if config.seed_catalog {
            ProductRepository::new(store.clone()).seed_if_empty(catalog::build_catalog())?;
        }

        let backend = match &config.backend {
            Some(backend_config) => Some(BackendClient::new(backend_config)?),
            None => {
                tracing::warn!("BACKEND_URL/BACKEND_KEY not set, remote order mirroring disabled");
                None
            }
        };

        let notifier = Notifier::new();
        notifier.start();

        Ok(Self {
            config,
            store,
            notifier,
            backend,
        })
    }

    /// Tear down owned services
    pub fn shutdown(&self) {
        self.notifier.shutdown();
    }

    pub fn is_admin_key(&self, key: &str) -> bool {
        key == self.config.admin_key
    }
}
