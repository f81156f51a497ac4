use std::sync::Arc;

use fractic_server_error::ServerError;

use crate::{
    config::{BilledConfig, StoreConfig},
    data::{
        datasources::memory_storage::MemoryStorage,
        repositories::memory_bills_store::MemoryBillsStore,
    },
    domain::{
        logic::session::{clear_user, load_user, store_user},
        repositories::{bills_store::BillsStore, key_value_storage::KeyValueStorage},
    },
    entities::{Modal, Navigator as _, SessionUser},
    presentation::{
        document::{Document, DocumentModal},
        router::Router,
    },
};

/// Assembled application: document, session storage, store and router.
pub struct BilledUtil {
    document: Arc<Document>,
    storage: Arc<dyn KeyValueStorage>,
    router: Arc<Router>,
}

impl BilledUtil {
    pub async fn from_config(config: &BilledConfig) -> Result<Self, ServerError> {
        let store: Option<Arc<dyn BillsStore>> = match &config.store {
            StoreConfig::Disabled => None,
            StoreConfig::Memory => Some(Arc::new(MemoryBillsStore::new())),
            StoreConfig::JsonFile(path) => {
                Some(Arc::new(MemoryBillsStore::from_json_file(path).await?))
            }
        };
        let document = Arc::new(Document::new());
        let modal = Arc::new(DocumentModal::new(document.clone()));
        Ok(Self::with_collaborators(
            document,
            Arc::new(MemoryStorage::new()),
            store,
            modal,
            config.accepted_file_extensions.clone(),
        ))
    }

    pub fn with_collaborators(
        document: Arc<Document>,
        storage: Arc<dyn KeyValueStorage>,
        store: Option<Arc<dyn BillsStore>>,
        modal: Arc<dyn Modal>,
        accepted_file_extensions: Vec<String>,
    ) -> Self {
        let router = Router::new(
            document.clone(),
            storage.clone(),
            store,
            modal,
            accepted_file_extensions,
        );
        Self {
            document,
            storage,
            router,
        }
    }

    pub fn document(&self) -> &Arc<Document> {
        &self.document
    }

    pub fn router(&self) -> &Arc<Router> {
        &self.router
    }

    pub fn session_user(&self) -> Result<Option<SessionUser>, ServerError> {
        load_user(self.storage.as_ref())
    }

    pub fn sign_in(&self, user: &SessionUser) -> Result<(), ServerError> {
        store_user(self.storage.as_ref(), user)
    }

    /// Forgets the session and goes back to the login page.
    pub async fn sign_out(&self) -> Result<(), ServerError> {
        clear_user(self.storage.as_ref());
        self.router.on_navigate("").await
    }

    pub async fn start(&self) -> Result<(), ServerError> {
        self.router.start().await
    }

    pub async fn navigate(&self, path: &str) -> Result<(), ServerError> {
        self.router.on_navigate(path).await
    }
}
