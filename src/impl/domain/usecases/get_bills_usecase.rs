use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    domain::{logic::bills_formatter::BillsFormatter, repositories::bills_store::BillsStore},
    entities::Bill,
};

#[async_trait]
pub trait GetBillsUsecase: Send + Sync {
    /// Lists bills ready for display.
    ///
    /// Resolves empty when no store is configured. Store errors are
    /// returned unchanged; per-record formatting errors are not errors.
    async fn get_bills(&self) -> Result<Vec<Bill>, ServerError>;

    /// Lists bills exactly as the store returns them.
    async fn get_raw_bills(&self) -> Result<Vec<Bill>, ServerError>;
}

pub(crate) struct GetBillsUsecaseImpl {
    store: Option<Arc<dyn BillsStore>>,
}

#[async_trait]
impl GetBillsUsecase for GetBillsUsecaseImpl {
    async fn get_bills(&self) -> Result<Vec<Bill>, ServerError> {
        let bills = self.get_raw_bills().await?;
        Ok(BillsFormatter::new(bills).process())
    }

    async fn get_raw_bills(&self) -> Result<Vec<Bill>, ServerError> {
        match &self.store {
            Some(store) => store.list().await,
            None => Ok(Vec::new()),
        }
    }
}

impl GetBillsUsecaseImpl {
    pub(crate) fn new(store: Option<Arc<dyn BillsStore>>) -> Self {
        Self { store }
    }
}
