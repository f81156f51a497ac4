use std::sync::{Arc, Mutex, MutexGuard, Weak};

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    domain::repositories::{bills_store::BillsStore, key_value_storage::KeyValueStorage},
    entities::{Modal, Navigator, Route},
    errors::NavigatorReleased,
    presentation::{
        containers::{
            bills_container::BillsContainer, dashboard_container::DashboardContainer,
            new_bill_container::NewBillContainer,
        },
        document::Document,
        views::{
            bills_view::{self, BillsViewState},
            dashboard_view, error_view, loading_view, login_view, new_bill_view,
        },
    },
};

/// Navigation context of the application.
///
/// Created once at start-up and shared with every container it builds.
/// Each navigation re-renders the document body from scratch.
pub struct Router {
    this: Weak<Router>,
    document: Arc<Document>,
    storage: Arc<dyn KeyValueStorage>,
    store: Option<Arc<dyn BillsStore>>,
    modal: Arc<dyn Modal>,
    accepted_extensions: Vec<String>,
    history: Mutex<Vec<Route>>,
}

impl Router {
    pub fn new(
        document: Arc<Document>,
        storage: Arc<dyn KeyValueStorage>,
        store: Option<Arc<dyn BillsStore>>,
        modal: Arc<dyn Modal>,
        accepted_extensions: Vec<String>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|this| Router {
            this: this.clone(),
            document,
            storage,
            store,
            modal,
            accepted_extensions,
            history: Mutex::new(Vec::new()),
        })
    }

    /// Renders the current route; the login page if nothing was visited yet.
    pub async fn start(&self) -> Result<(), ServerError> {
        self.render(self.current_route()).await
    }

    pub fn current_route(&self) -> Route {
        lock(&self.history).last().copied().unwrap_or(Route::Login)
    }

    pub fn history(&self) -> Vec<Route> {
        lock(&self.history).clone()
    }

    pub fn document(&self) -> &Arc<Document> {
        &self.document
    }

    pub fn bills_container(&self) -> Result<BillsContainer, ServerError> {
        Ok(BillsContainer::new(
            self.document.clone(),
            self.navigator()?,
            self.storage.clone(),
            self.store.clone(),
            self.modal.clone(),
        ))
    }

    pub fn new_bill_container(&self) -> Result<NewBillContainer, ServerError> {
        Ok(NewBillContainer::new(
            self.navigator()?,
            self.storage.clone(),
            self.store.clone(),
            &self.accepted_extensions,
        ))
    }

    pub fn dashboard_container(&self) -> DashboardContainer {
        DashboardContainer::new(self.store.clone())
    }

    fn navigator(&self) -> Result<Arc<dyn Navigator>, ServerError> {
        let this: Arc<dyn Navigator> = self
            .this
            .upgrade()
            .ok_or_else(|| NavigatorReleased::new())?;
        Ok(this)
    }

    async fn render(&self, route: Route) -> Result<(), ServerError> {
        match route {
            Route::Login => self.document.set_body(login_view::render()),
            Route::Bills => {
                self.document
                    .set_body(bills_view::render(BillsViewState::Loading));
                let container = self.bills_container()?;
                let markup = match container.get_bills_for_display().await {
                    Ok(bills) => bills_view::render(BillsViewState::Loaded(&bills)),
                    Err(e) => {
                        tracing::warn!(route = %route, error = ?e, "failed to load bills");
                        bills_view::render(BillsViewState::Error(&e.to_string()))
                    }
                };
                self.document.set_body(markup);
            }
            Route::NewBill => self.document.set_body(new_bill_view::render()),
            Route::Dashboard => {
                self.document.set_body(loading_view::render(route));
                let markup = match self.dashboard_container().sections().await {
                    Ok(sections) => dashboard_view::render(&sections),
                    Err(e) => {
                        tracing::warn!(route = %route, error = ?e, "failed to load dashboard");
                        error_view::render(route, &e.to_string())
                    }
                };
                self.document.set_body(markup);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Navigator for Router {
    async fn on_navigate(&self, path: &str) -> Result<(), ServerError> {
        let route = Route::from_path(path).unwrap_or_else(|| {
            tracing::warn!(path, "unknown path, rendering login");
            Route::Login
        });
        tracing::debug!(route = %route, "navigating");
        lock(&self.history).push(route);
        self.render(route).await
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
