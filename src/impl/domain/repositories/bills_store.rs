use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{Bill, CreateBillRequest, CreatedBill};

/// Remote source of bills. Any transport adapter can back it.
#[async_trait]
pub trait BillsStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Bill>, ServerError>;

    /// Uploads the receipt and reserves a bill for it.
    async fn create(&self, request: CreateBillRequest) -> Result<CreatedBill, ServerError>;

    /// Replaces the bill stored under `key`.
    async fn update(&self, key: &str, bill: Bill) -> Result<Bill, ServerError>;
}
