use std::sync::{
    atomic::{AtomicU64, Ordering},
    Mutex, MutexGuard,
};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use fractic_server_error::ServerError;

use crate::{
    data::datasources::bills_json_datasource::{BillsJsonDatasource as _, BillsJsonDatasourceImpl},
    domain::repositories::bills_store::BillsStore,
    entities::{Bill, BillStatus, CreateBillRequest, CreatedBill},
    errors::{BillNotFound, StoreRequestFailed},
};

/// In-process bills store.
///
/// Receipts are kept inline as `data:` URLs. A failure message can be
/// injected to make every call reject, which is how request-level errors
/// (e.g. "Erreur 404") are simulated.
pub struct MemoryBillsStore {
    bills: Mutex<Vec<Bill>>,
    failure: Mutex<Option<String>>,
    next_key: AtomicU64,
    list_calls: AtomicU64,
}

impl MemoryBillsStore {
    pub fn new() -> Self {
        Self::with_bills(Vec::new())
    }

    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills: Mutex::new(bills),
            failure: Mutex::new(None),
            next_key: AtomicU64::new(1),
            list_calls: AtomicU64::new(0),
        }
    }

    pub fn from_json(s: &str) -> Result<Self, ServerError> {
        Ok(Self::with_bills(BillsJsonDatasourceImpl::new().from_string(s)?))
    }

    pub async fn from_json_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        Ok(Self::with_bills(
            BillsJsonDatasourceImpl::new().from_file(path).await?,
        ))
    }

    /// Makes every subsequent call reject with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *lock(&self.failure) = Some(message.into());
    }

    pub fn recover(&self) {
        *lock(&self.failure) = None;
    }

    pub fn list_calls(&self) -> u64 {
        self.list_calls.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> Vec<Bill> {
        lock(&self.bills).clone()
    }

    fn check_failure(&self) -> Result<(), ServerError> {
        match lock(&self.failure).as_deref() {
            Some(message) => Err(StoreRequestFailed::new(message)),
            None => Ok(()),
        }
    }
}

impl Default for MemoryBillsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BillsStore for MemoryBillsStore {
    async fn list(&self) -> Result<Vec<Bill>, ServerError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        self.check_failure()?;
        Ok(lock(&self.bills).clone())
    }

    async fn create(&self, request: CreateBillRequest) -> Result<CreatedBill, ServerError> {
        self.check_failure()?;
        let key = format!("bill-{}", self.next_key.fetch_add(1, Ordering::Relaxed));
        let file_url = format!(
            "data:{};base64,{}",
            request.file.content_type,
            STANDARD.encode(&request.file.bytes)
        );
        lock(&self.bills).push(Bill {
            id: Some(key.clone()),
            file_url: Some(file_url.clone()),
            file_name: Some(request.file.name),
            email: request.email,
            status: BillStatus::Pending.code().into(),
            ..Default::default()
        });
        Ok(CreatedBill { key, file_url })
    }

    async fn update(&self, key: &str, bill: Bill) -> Result<Bill, ServerError> {
        self.check_failure()?;
        let mut bills = lock(&self.bills);
        let slot = bills
            .iter_mut()
            .find(|b| b.id.as_deref() == Some(key))
            .ok_or_else(|| BillNotFound::new(key))?;
        *slot = Bill {
            id: Some(key.to_string()),
            ..bill
        };
        Ok(slot.clone())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
