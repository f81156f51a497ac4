use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use regex::Regex;

use crate::{
    domain::repositories::bills_store::BillsStore,
    entities::{Bill, CreateBillRequest, CreatedBill, ReceiptFile},
    errors::UnsupportedFileExtension,
};

#[async_trait]
pub trait CreateBillUsecase: Send + Sync {
    /// Checks the receipt's extension against the accepted list.
    fn validate_receipt(&self, file: &ReceiptFile) -> Result<(), ServerError>;

    /// Validates and uploads a receipt. `Ok(None)` without a store.
    async fn upload_receipt(
        &self,
        file: ReceiptFile,
        email: Option<String>,
    ) -> Result<Option<CreatedBill>, ServerError>;

    /// Stores the completed bill under the key reserved by the upload.
    async fn submit(&self, key: Option<&str>, bill: Bill) -> Result<Bill, ServerError>;
}

pub(crate) struct CreateBillUsecaseImpl {
    store: Option<Arc<dyn BillsStore>>,
    accepted_extensions: Vec<String>,
    pattern: Option<Regex>,
}

#[async_trait]
impl CreateBillUsecase for CreateBillUsecaseImpl {
    fn validate_receipt(&self, file: &ReceiptFile) -> Result<(), ServerError> {
        if self.pattern.as_ref().is_some_and(|p| p.is_match(&file.name)) {
            Ok(())
        } else {
            Err(UnsupportedFileExtension::new(
                &file.name,
                &self.accepted_extensions.join(", "),
            ))
        }
    }

    async fn upload_receipt(
        &self,
        file: ReceiptFile,
        email: Option<String>,
    ) -> Result<Option<CreatedBill>, ServerError> {
        self.validate_receipt(&file)?;
        match &self.store {
            Some(store) => Ok(Some(store.create(CreateBillRequest { file, email }).await?)),
            None => Ok(None),
        }
    }

    async fn submit(&self, key: Option<&str>, bill: Bill) -> Result<Bill, ServerError> {
        match (&self.store, key) {
            (Some(store), Some(key)) => store.update(key, bill).await,
            _ => Ok(bill),
        }
    }
}

impl CreateBillUsecaseImpl {
    pub(crate) fn new(store: Option<Arc<dyn BillsStore>>, accepted_extensions: &[String]) -> Self {
        let alternatives = accepted_extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .map(regex::escape)
            .collect::<Vec<_>>();
        // No accepted extension means no receipt is accepted.
        let pattern = (!alternatives.is_empty())
            .then(|| Regex::new(&format!(r"(?i)^.+\.({})$", alternatives.join("|"))).ok())
            .flatten();
        Self {
            store,
            accepted_extensions: accepted_extensions.to_vec(),
            pattern,
        }
    }
}
