use std::sync::Arc;

use fractic_server_error::ServerError;

use crate::{
    domain::{
        repositories::bills_store::BillsStore,
        usecases::get_bills_usecase::{GetBillsUsecase as _, GetBillsUsecaseImpl},
    },
    entities::{Bill, BillStatus},
};

/// Admin view over every employee's bills.
pub struct DashboardContainer {
    get_bills_usecase: GetBillsUsecaseImpl,
}

impl DashboardContainer {
    pub fn new(store: Option<Arc<dyn BillsStore>>) -> Self {
        Self {
            get_bills_usecase: GetBillsUsecaseImpl::new(store),
        }
    }

    /// Raw bills; grouping needs the untranslated status codes.
    pub async fn get_bills_all_users(&self) -> Result<Vec<Bill>, ServerError> {
        self.get_bills_usecase.get_raw_bills().await
    }

    /// Bills grouped by status, in `BillStatus::ALL` order.
    pub async fn sections(&self) -> Result<Vec<(BillStatus, Vec<Bill>)>, ServerError> {
        let bills = self.get_bills_all_users().await?;
        Ok(BillStatus::ALL
            .iter()
            .map(|status| (*status, filtered_bills(&bills, *status)))
            .collect())
    }
}

pub fn filtered_bills(bills: &[Bill], status: BillStatus) -> Vec<Bill> {
    bills
        .iter()
        .filter(|bill| bill.status == status.code())
        .cloned()
        .collect()
}
